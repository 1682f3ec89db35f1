pub mod offer_repository;
