use std::sync::Arc;

use sqlx::PgPool;

use gudang_core::Config;
use gudang_db::LoaderRequestRepository;
use gudang_report::ReportGenerator;
use gudang_storage::LogoStore;

/// Shared application state handed to every handler.
///
/// Photo uploads run through the CLI pipeline, so the API carries no photo
/// storage backend; the only asset it writes is the logo.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub repository: LoaderRequestRepository,
    pub logo_store: LogoStore,
    pub report_generator: Arc<ReportGenerator>,
}
