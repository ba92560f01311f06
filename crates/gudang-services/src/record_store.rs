//! Object-safe seam over record persistence.

use async_trait::async_trait;
use uuid::Uuid;

use gudang_core::models::{CreateLoaderRequest, LoaderRequest};
use gudang_core::AppError;
use gudang_db::LoaderRequestRepository;

/// Persistence operations the submission pipeline needs. Implemented by the
/// Postgres repository; tests substitute an in-memory fake.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, req: CreateLoaderRequest) -> Result<LoaderRequest, AppError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<LoaderRequest>, AppError>;
}

#[async_trait]
impl RecordStore for LoaderRequestRepository {
    async fn create(&self, req: CreateLoaderRequest) -> Result<LoaderRequest, AppError> {
        LoaderRequestRepository::create(self, req).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<LoaderRequest>, AppError> {
        LoaderRequestRepository::get_by_id(self, id).await
    }
}
