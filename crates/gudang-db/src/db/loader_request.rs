use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use gudang_core::models::{CreateLoaderRequest, LoaderRequest};
use gudang_core::validation;
use gudang_core::AppError;
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

/// Raw row shape for `loader_requests`.
///
/// Enum-typed fields are stored as TEXT and `photo_urls` as JSONB; conversion
/// to the domain model parses both.
#[derive(Debug, Clone, FromRow)]
pub struct LoaderRequestRow {
    pub id: Uuid,
    pub date: String,
    pub shift: String,
    pub nike_mp: i32,
    pub time_in_nike: String,
    pub shipper_name: String,
    pub receipt_date: String,
    pub no_document: String,
    pub transaction: String,
    pub vehicle_no: String,
    pub container_no: String,
    pub warehouse_name: String,
    pub photo_urls: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl LoaderRequestRow {
    /// Convert to the domain model.
    pub fn into_loader_request(self) -> Result<LoaderRequest, AppError> {
        let photo_urls: BTreeMap<String, String> = serde_json::from_value(self.photo_urls)?;
        Ok(LoaderRequest {
            id: self.id,
            date: self.date,
            shift: self.shift.parse().map_err(|e: anyhow::Error| {
                AppError::Internal(format!("Corrupt shift value: {}", e))
            })?,
            nike_mp: self.nike_mp,
            time_in_nike: self.time_in_nike,
            shipper_name: self.shipper_name,
            receipt_date: self.receipt_date,
            no_document: self.no_document,
            transaction: self.transaction.parse().map_err(|e: anyhow::Error| {
                AppError::Internal(format!("Corrupt transaction value: {}", e))
            })?,
            vehicle_no: self.vehicle_no,
            container_no: self.container_no,
            warehouse_name: self.warehouse_name,
            photo_urls,
            created_at: self.created_at,
        })
    }
}

/// Repository for loader-request records.
///
/// Records are append-only: there is a create operation, a point lookup and
/// a newest-first listing, and nothing else.
#[derive(Clone, Debug)]
pub struct LoaderRequestRepository {
    pool: PgPool,
}

impl LoaderRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new record and return it with its assigned id.
    pub async fn create(&self, req: CreateLoaderRequest) -> Result<LoaderRequest, AppError> {
        validation::validate_create_request(&req)?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let photo_urls = serde_json::to_value(&req.photo_urls)?;

        let row: LoaderRequestRow = sqlx::query_as::<Postgres, LoaderRequestRow>(
            r#"
            INSERT INTO loader_requests (
                id, date, shift, nike_mp, time_in_nike,
                shipper_name, receipt_date, no_document, transaction,
                vehicle_no, container_no, warehouse_name, photo_urls, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.date)
        .bind(req.shift.to_string())
        .bind(req.nike_mp)
        .bind(&req.time_in_nike)
        .bind(&req.shipper_name)
        .bind(&req.receipt_date)
        .bind(&req.no_document)
        .bind(req.transaction.to_string())
        .bind(&req.vehicle_no)
        .bind(&req.container_no)
        .bind(&req.warehouse_name)
        .bind(&photo_urls)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id = %row.id, "Loader request created");

        row.into_loader_request()
    }

    /// Point lookup by id. `Ok(None)` is the not-found signal; it is never
    /// folded into a persistence error.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<LoaderRequest>, AppError> {
        let row: Option<LoaderRequestRow> = sqlx::query_as::<Postgres, LoaderRequestRow>(
            "SELECT * FROM loader_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LoaderRequestRow::into_loader_request).transpose()
    }

    /// All records, newest first.
    pub async fn list_all(&self) -> Result<Vec<LoaderRequest>, AppError> {
        let rows: Vec<LoaderRequestRow> = sqlx::query_as::<Postgres, LoaderRequestRow>(
            "SELECT * FROM loader_requests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(LoaderRequestRow::into_loader_request)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_core::models::{Shift, Transaction};

    fn sample_row() -> LoaderRequestRow {
        LoaderRequestRow {
            id: Uuid::new_v4(),
            date: "01/01/2024".to_string(),
            shift: "morning".to_string(),
            nike_mp: 2,
            time_in_nike: "08:00".to_string(),
            shipper_name: "Acme".to_string(),
            receipt_date: "01/01/2024".to_string(),
            no_document: "DOC-1".to_string(),
            transaction: "Outbound".to_string(),
            vehicle_no: "B1234".to_string(),
            container_no: "CONT-9".to_string(),
            warehouse_name: "WH-A".to_string(),
            photo_urls: serde_json::json!({
                "segel": "http://localhost/photos/segel.jpg"
            }),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let record = sample_row().into_loader_request().unwrap();
        assert_eq!(record.shift, Shift::Morning);
        assert_eq!(record.transaction, Transaction::Outbound);
        assert_eq!(
            record.photo_urls.get("segel").map(String::as_str),
            Some("http://localhost/photos/segel.jpg")
        );
    }

    #[test]
    fn test_row_conversion_rejects_corrupt_shift() {
        let mut row = sample_row();
        row.shift = "midday".to_string();
        assert!(row.into_loader_request().is_err());
    }

    #[test]
    fn test_row_conversion_empty_mapping() {
        let mut row = sample_row();
        row.photo_urls = serde_json::json!({});
        let record = row.into_loader_request().unwrap();
        assert!(record.photo_urls.is_empty());
    }
}
