//! Contacts Directory - Main entry point
//!
//! Composition root: configuration, logging, stores, the aggregation service
//! and the MCP server are built here in dependency order.

use anyhow::Result;
use contacts_directory::stores::{
    ContactStore, EmailStore, InMemoryContactStore, InMemoryEmailStore, InMemoryPhoneStore,
    PhoneStore, SqlContactStore, SqlEmailStore, SqlPhoneStore,
};
use contacts_directory::{
    db, Config, ContactAggregationService, ContactService, ContactsMcpServer, StoreBackend,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

type Stores = (Arc<dyn ContactStore>, Arc<dyn EmailStore>, Arc<dyn PhoneStore>);

async fn build_stores(config: &Config) -> Result<Stores> {
    match config.store_backend {
        StoreBackend::Sqlite => {
            let pool = db::connect(config).await?;
            db::ensure_schema(&pool).await?;

            Ok((
                Arc::new(SqlContactStore::new(pool.clone())) as Arc<dyn ContactStore>,
                Arc::new(SqlEmailStore::new(pool.clone())) as Arc<dyn EmailStore>,
                Arc::new(SqlPhoneStore::new(pool)) as Arc<dyn PhoneStore>,
            ))
        }
        StoreBackend::Memory => Ok((
            Arc::new(InMemoryContactStore::new()) as Arc<dyn ContactStore>,
            Arc::new(InMemoryEmailStore::new()) as Arc<dyn EmailStore>,
            Arc::new(InMemoryPhoneStore::new()) as Arc<dyn PhoneStore>,
        )),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contacts directory with {} store",
        config.store_backend
    );

    // Initialize stores
    let (contact_store, email_store, phone_store) = match build_stores(&config).await {
        Ok(stores) => stores,
        Err(e) => {
            error!("Failed to initialize stores: {}", e);
            return Err(e);
        }
    };

    // Aggregation service over the stores
    let service = Arc::new(ContactAggregationService::new(
        contact_store,
        email_store,
        phone_store,
    )) as Arc<dyn ContactService>;

    let server = ContactsMcpServer::new(service);

    info!("Starting MCP server with stdio transport");
    contacts_directory::server::run_server(server).await?;

    info!("Contacts directory shutdown complete");
    Ok(())
}
