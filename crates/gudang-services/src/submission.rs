//! Submission pipeline: upload photos, persist the record, render the
//! report.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use gudang_core::models::{LoaderRequest, PHOTO_SECTIONS};
use gudang_core::AppError;
use gudang_report::ReportGenerator;
use gudang_storage::{photo_filename, Storage};

use crate::form::FormSession;
use crate::record_store::RecordStore;

/// Result of a completed submission.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub report_pdf: Vec<u8>,
}

pub struct SubmissionService {
    store: Arc<dyn RecordStore>,
    storage: Arc<dyn Storage>,
    generator: ReportGenerator,
}

impl SubmissionService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        storage: Arc<dyn Storage>,
        generator: ReportGenerator,
    ) -> Self {
        SubmissionService {
            store,
            storage,
            generator,
        }
    }

    /// Run the pipeline for one session.
    ///
    /// Uploads happen one section at a time in fixed section order, then the
    /// record is inserted, then the report is rendered. The first error
    /// aborts the remaining steps; photos already uploaded stay in storage.
    pub async fn submit(&self, session: &FormSession) -> Result<SubmissionOutcome, AppError> {
        let submitted_at = Utc::now().timestamp_millis();
        let mut photo_urls = BTreeMap::new();
        for section in PHOTO_SECTIONS {
            let Some(photo) = session.photo(section) else {
                continue;
            };
            let filename = photo_filename(submitted_at, section, &photo.original_name);
            let (_key, url) = self
                .storage
                .upload(&filename, &photo.content_type, photo.data.clone())
                .await?;
            photo_urls.insert(section.to_string(), url);
        }

        let record = self
            .store
            .create(session.to_create_request(photo_urls))
            .await?;
        let report_pdf = self.generator.generate(&record).await?;

        info!(
            id = %record.id,
            photos = record.photo_urls.len(),
            "Submission completed"
        );
        Ok(SubmissionOutcome {
            id: record.id,
            report_pdf,
        })
    }

    /// Confirmation-view lookup for a submitted record.
    pub async fn confirm(&self, id: Uuid) -> Result<LoaderRequest, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loader request {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::PendingPhoto;
    use async_trait::async_trait;
    use bytes::Bytes;
    use gudang_core::models::CreateLoaderRequest;
    use gudang_core::StorageBackend;
    use gudang_report::{PhotoFetcher, RenderError};
    use gudang_storage::{StorageError, StorageResult};
    use std::sync::Mutex;

    struct FakeStore {
        records: Mutex<Vec<LoaderRequest>>,
        fail_create: bool,
    }

    impl FakeStore {
        fn new() -> Self {
            FakeStore {
                records: Mutex::new(Vec::new()),
                fail_create: false,
            }
        }
    }

    #[async_trait]
    impl RecordStore for FakeStore {
        async fn create(&self, req: CreateLoaderRequest) -> Result<LoaderRequest, AppError> {
            if self.fail_create {
                return Err(AppError::Persistence(sqlx::Error::PoolClosed));
            }
            let record = LoaderRequest {
                id: Uuid::new_v4(),
                date: req.date,
                shift: req.shift,
                nike_mp: req.nike_mp,
                time_in_nike: req.time_in_nike,
                shipper_name: req.shipper_name,
                receipt_date: req.receipt_date,
                no_document: req.no_document,
                transaction: req.transaction,
                vehicle_no: req.vehicle_no,
                container_no: req.container_no,
                warehouse_name: req.warehouse_name,
                photo_urls: req.photo_urls,
                created_at: Utc::now(),
            };
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Option<LoaderRequest>, AppError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned())
        }
    }

    struct FakeStorage {
        uploads: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl FakeStorage {
        fn new() -> Self {
            FakeStorage {
                uploads: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }
    }

    #[async_trait]
    impl Storage for FakeStorage {
        async fn upload(
            &self,
            filename: &str,
            _content_type: &str,
            _data: Vec<u8>,
        ) -> StorageResult<(String, String)> {
            if let Some(bad) = &self.fail_on {
                if filename.contains(bad.as_str()) {
                    return Err(StorageError::UploadFailed("disk full".to_string()));
                }
            }
            self.uploads.lock().unwrap().push(filename.to_string());
            Ok((
                format!("photos/{}", filename),
                format!("http://cdn.test/photos/{}", filename),
            ))
        }

        async fn download(&self, _key: &str) -> StorageResult<Vec<u8>> {
            Err(StorageError::NotFound("fake".to_string()))
        }

        async fn delete(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }

        async fn exists(&self, _key: &str) -> StorageResult<bool> {
            Ok(false)
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::Local
        }
    }

    struct OfflineFetcher;

    #[async_trait]
    impl PhotoFetcher for OfflineFetcher {
        async fn fetch(&self, _url: &str) -> Result<Bytes, RenderError> {
            Err(RenderError::Fetch("offline".to_string()))
        }
    }

    fn service(store: FakeStore, storage: FakeStorage) -> SubmissionService {
        SubmissionService::new(
            Arc::new(store),
            Arc::new(storage),
            ReportGenerator::new(Box::new(OfflineFetcher)),
        )
    }

    fn photo(name: &str) -> PendingPhoto {
        PendingPhoto {
            original_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![0xff, 0xd8],
        }
    }

    fn filled_session() -> FormSession {
        let mut session = FormSession::new();
        session.shipper_name = "Acme".to_string();
        session.no_document = "DOC-1".to_string();
        session.warehouse_name = "WH-A".to_string();
        session
    }

    #[tokio::test]
    async fn test_zero_photos_persists_empty_mapping() {
        let svc = service(FakeStore::new(), FakeStorage::new());
        let outcome = svc.submit(&filled_session()).await.unwrap();
        let record = svc.confirm(outcome.id).await.unwrap();
        assert!(record.photo_urls.is_empty());
        assert!(outcome.report_pdf.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_subset_of_sections_maps_exactly() {
        let mut session = filled_session();
        session.set_photo("segel", photo("a.jpg")).unwrap();
        session.set_photo("Product 3", photo("b.jpg")).unwrap();

        let svc = service(FakeStore::new(), FakeStorage::new());
        let outcome = svc.submit(&session).await.unwrap();
        let record = svc.confirm(outcome.id).await.unwrap();

        let keys: Vec<_> = record.photo_urls.keys().cloned().collect();
        assert_eq!(keys, vec!["Product 3".to_string(), "segel".to_string()]);
        assert!(record.photo_urls.values().all(|u| !u.is_empty()));
    }

    #[tokio::test]
    async fn test_upload_order_matches_sections() {
        let mut session = filled_session();
        session.set_photo("Product 1", photo("p1.jpg")).unwrap();
        session.set_photo("foto tampak depan", photo("front.jpg")).unwrap();
        session.set_photo("segel", photo("seal.jpg")).unwrap();

        let storage = Arc::new(FakeStorage::new());
        let svc = SubmissionService::new(
            Arc::new(FakeStore::new()),
            Arc::clone(&storage) as Arc<dyn Storage>,
            ReportGenerator::new(Box::new(OfflineFetcher)),
        );
        svc.submit(&session).await.unwrap();

        let uploads = storage.uploads.lock().unwrap().clone();
        assert_eq!(uploads.len(), 3);
        assert!(uploads[0].contains("foto tampak depan"));
        assert!(uploads[1].contains("segel"));
        assert!(uploads[2].contains("Product 1"));
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_before_insert() {
        let mut session = filled_session();
        session.set_photo("foto tampak depan", photo("front.jpg")).unwrap();
        session.set_photo("segel", photo("seal.jpg")).unwrap();

        let storage = Arc::new(FakeStorage {
            uploads: Mutex::new(Vec::new()),
            fail_on: Some("segel".to_string()),
        });
        let store = Arc::new(FakeStore::new());
        let svc = SubmissionService::new(
            Arc::clone(&store) as Arc<dyn RecordStore>,
            Arc::clone(&storage) as Arc<dyn Storage>,
            ReportGenerator::new(Box::new(OfflineFetcher)),
        );

        let err = svc.submit(&session).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        // Nothing was inserted, but the earlier upload is not rolled back
        assert!(store.records.lock().unwrap().is_empty());
        assert_eq!(storage.uploads.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_failure_surfaces() {
        let store = FakeStore {
            records: Mutex::new(Vec::new()),
            fail_create: true,
        };
        let svc = service(store, FakeStorage::new());
        let err = svc.submit(&filled_session()).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_confirm_unknown_id_is_not_found() {
        let svc = service(FakeStore::new(), FakeStorage::new());
        let err = svc.confirm(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
