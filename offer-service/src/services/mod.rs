pub mod offer_service;
