use std::sync::Arc;

use offer_service::config::Config;
use offer_service::db;
use offer_service::logging::init_logging;
use offer_service::repository::offer_repository::MySqlOfferRepository;
use offer_service::server::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    init_logging(&config)?;

    tracing::info!("Starting offer service");

    let pool = db::create_pool(&config.database).await?;
    db::init_db(&pool).await?;

    let repository = Arc::new(MySqlOfferRepository::new(pool));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_app(AppState { config, repository });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", &addr);

    axum::serve(listener, app).await?;

    Ok(())
}
