use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use auth::{
    AppState,
    config::{AppConfig, StoreBackend},
    repositories::{MemoryUserStore, PgUserStore, UserStore},
    routes,
};
use common::database::{self, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting authentication service");

    let config = AppConfig::from_env()?;

    let store: Arc<dyn UserStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = database::init_pool(&db_config).await?;

            // Check database connectivity
            if database::health_check(&pool).await {
                info!("Database connection successful");
            } else {
                anyhow::bail!("Failed to connect to database");
            }

            let store = PgUserStore::new(pool);
            store.ensure_schema().await?;
            Arc::new(store)
        }
        StoreBackend::Memory => {
            info!("Using in-memory user store; accounts are lost on restart");
            Arc::new(MemoryUserStore::new())
        }
    };

    let bind_address = config.bind_address.clone();
    let app = routes::create_router(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Authentication service listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
