//! Registry wiring from configuration

use std::sync::Arc;

use tracing::info;

use highlight_common::{AppConfig, AppError, AppResult};
use highlight_core::traits::{ChannelGateway, RecordStore};
use highlight_db::{create_pool, DatabaseConfig, MemoryRecordStore, PgPool, PgRecordStore};
use highlight_http::{RestChannelGateway, RestConfig};

use crate::services::{Board, BoardConfig, BoardRegistry, EligibilityFilter, ServiceContext};

/// Build the registry with one PostgreSQL table per board, creating the
/// tables when missing.
pub async fn build_registry(
    config: &AppConfig,
    gateway: Arc<dyn ChannelGateway>,
    pool: PgPool,
) -> AppResult<BoardRegistry> {
    let mut stores: Vec<Arc<dyn RecordStore>> = Vec::new();
    for settings in config.boards() {
        let store = PgRecordStore::new(pool.clone(), settings.table.clone())?;
        store.ensure_schema().await?;
        stores.push(Arc::new(store));
    }
    assemble(config, gateway, stores)
}

/// Build the registry over process-local stores
pub fn build_memory_registry(
    config: &AppConfig,
    gateway: Arc<dyn ChannelGateway>,
) -> AppResult<BoardRegistry> {
    let stores = config
        .boards()
        .iter()
        .map(|_| Arc::new(MemoryRecordStore::new()) as Arc<dyn RecordStore>)
        .collect();
    assemble(config, gateway, stores)
}

/// Connect to the database and the REST API, then build the registry
pub async fn connect(config: &AppConfig) -> AppResult<BoardRegistry> {
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let gateway = RestChannelGateway::new(&RestConfig::from(&config.api))
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    build_registry(config, Arc::new(gateway), pool).await
}

fn assemble(
    config: &AppConfig,
    gateway: Arc<dyn ChannelGateway>,
    stores: Vec<Arc<dyn RecordStore>>,
) -> AppResult<BoardRegistry> {
    let ctx = ServiceContext::new(gateway, EligibilityFilter::from_config(config));

    let boards = config
        .boards()
        .into_iter()
        .zip(stores)
        .map(|(settings, store)| Board::new(BoardConfig::from(settings), store, ctx.clone()))
        .collect();

    let registry = BoardRegistry::new(ctx, boards)?;
    info!(
        boards = ?registry.boards().iter().map(|b| b.name()).collect::<Vec<_>>(),
        "Board registry ready"
    );
    Ok(registry)
}
