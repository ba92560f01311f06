use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Work shift during which the activity took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl FromStr for Shift {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Shift::Morning),
            "afternoon" => Ok(Shift::Afternoon),
            "night" => Ok(Shift::Night),
            _ => Err(anyhow::anyhow!("Invalid shift: {}", s)),
        }
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Shift::Morning => write!(f, "morning"),
            Shift::Afternoon => write!(f, "afternoon"),
            Shift::Night => write!(f, "night"),
        }
    }
}

/// Directional classification of the warehouse activity.
///
/// Serialized capitalized (`Inbound` / `Outbound`) to match the wire format
/// and the rendered report title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Transaction {
    Inbound,
    Outbound,
}

impl FromStr for Transaction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inbound" => Ok(Transaction::Inbound),
            "outbound" => Ok(Transaction::Outbound),
            _ => Err(anyhow::anyhow!("Invalid transaction: {}", s)),
        }
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Transaction::Inbound => write!(f, "Inbound"),
            Transaction::Outbound => write!(f, "Outbound"),
        }
    }
}

/// One persisted loader-request record.
///
/// Append-only: the id and `created_at` are assigned once at insert and the
/// record is never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderRequest {
    pub id: Uuid,
    pub date: String,
    pub shift: Shift,
    pub nike_mp: i32,
    pub time_in_nike: String,
    pub shipper_name: String,
    pub receipt_date: String,
    pub no_document: String,
    pub transaction: Transaction,
    pub vehicle_no: String,
    pub container_no: String,
    pub warehouse_name: String,
    /// Section name -> public photo URL. Keys are a subset of
    /// [`crate::models::PHOTO_SECTIONS`].
    pub photo_urls: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a loader request (the 11 scalar fields plus the
/// photo-URL mapping). Wire names are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoaderRequest {
    pub date: String,
    pub shift: Shift,
    #[validate(range(min = 0))]
    #[serde(rename = "nikeMP")]
    pub nike_mp: i32,
    pub time_in_nike: String,
    pub shipper_name: String,
    pub receipt_date: String,
    pub no_document: String,
    pub transaction: Transaction,
    pub vehicle_no: String,
    pub container_no: String,
    pub warehouse_name: String,
    #[serde(default)]
    pub photo_urls: BTreeMap<String, String>,
}

/// API response shape for a loader request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoaderRequestResponse {
    pub id: Uuid,
    pub date: String,
    pub shift: Shift,
    #[serde(rename = "nikeMP")]
    pub nike_mp: i32,
    pub time_in_nike: String,
    pub shipper_name: String,
    pub receipt_date: String,
    pub no_document: String,
    pub transaction: Transaction,
    pub vehicle_no: String,
    pub container_no: String,
    pub warehouse_name: String,
    pub photo_urls: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl From<LoaderRequest> for LoaderRequestResponse {
    fn from(r: LoaderRequest) -> Self {
        LoaderRequestResponse {
            id: r.id,
            date: r.date,
            shift: r.shift,
            nike_mp: r.nike_mp,
            time_in_nike: r.time_in_nike,
            shipper_name: r.shipper_name,
            receipt_date: r.receipt_date,
            no_document: r.no_document,
            transaction: r.transaction,
            vehicle_no: r.vehicle_no,
            container_no: r.container_no,
            warehouse_name: r.warehouse_name,
            photo_urls: r.photo_urls,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_round_trip() {
        assert_eq!("morning".parse::<Shift>().unwrap(), Shift::Morning);
        assert_eq!("Night".parse::<Shift>().unwrap(), Shift::Night);
        assert!("noon".parse::<Shift>().is_err());
        assert_eq!(Shift::Afternoon.to_string(), "afternoon");
    }

    #[test]
    fn test_transaction_display_is_capitalized() {
        assert_eq!(Transaction::Inbound.to_string(), "Inbound");
        assert_eq!(Transaction::Outbound.to_string(), "Outbound");
        assert_eq!(
            "outbound".parse::<Transaction>().unwrap(),
            Transaction::Outbound
        );
    }

    #[test]
    fn test_create_request_wire_names() {
        let json = serde_json::json!({
            "date": "01/01/2024",
            "shift": "morning",
            "nikeMP": 0,
            "timeInNike": "08:00",
            "shipperName": "Acme",
            "receiptDate": "01/01/2024",
            "noDocument": "DOC-1",
            "transaction": "Outbound",
            "vehicleNo": "B1234",
            "containerNo": "CONT-9",
            "warehouseName": "WH-A"
        });
        let req: CreateLoaderRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.shift, Shift::Morning);
        assert_eq!(req.transaction, Transaction::Outbound);
        assert_eq!(req.nike_mp, 0);
        assert!(req.photo_urls.is_empty());
    }

    #[test]
    fn test_negative_counter_fails_validation() {
        let req = CreateLoaderRequest {
            date: "01/01/2024".to_string(),
            shift: Shift::Morning,
            nike_mp: -1,
            time_in_nike: "08:00".to_string(),
            shipper_name: String::new(),
            receipt_date: String::new(),
            no_document: String::new(),
            transaction: Transaction::Outbound,
            vehicle_no: String::new(),
            container_no: String::new(),
            warehouse_name: String::new(),
            photo_urls: BTreeMap::new(),
        };
        assert!(req.validate().is_err());
    }
}
