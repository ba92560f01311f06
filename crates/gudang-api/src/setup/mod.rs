pub mod database;
pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;

use gudang_core::Config;
use gudang_db::LoaderRequestRepository;
use gudang_report::{HttpPhotoFetcher, ReportGenerator};
use gudang_storage::LogoStore;

use crate::state::AppState;

/// Wire the database and report services together and build the router.
///
/// Configuration is validated before anything connects, so a misconfigured
/// deployment fails at startup rather than on the first request.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    config.validate()?;

    let pool = database::setup_database(&config).await?;
    let repository = LoaderRequestRepository::new(pool.clone());
    let logo_store = LogoStore::new(config.asset_path.clone());
    let report_generator = Arc::new(ReportGenerator::new(Box::new(HttpPhotoFetcher::new())));

    let state = Arc::new(AppState {
        config,
        pool,
        repository,
        logo_store,
        report_generator,
    });
    let router = routes::create_router(Arc::clone(&state));
    Ok((state, router))
}
