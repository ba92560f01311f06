//! Editable form session backing a data-entry flow.

use std::collections::BTreeMap;

use chrono::Local;

use gudang_core::models::{is_valid_section, CreateLoaderRequest, Shift, Transaction};
use gudang_core::AppError;

/// A photo attached to a form slot, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPhoto {
    pub original_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// In-memory form state: the 11 scalar fields plus one photo slot per
/// section. Scalar fields are plain `pub` and edited directly; photo slots
/// go through [`FormSession::set_photo`] so unknown section names are
/// rejected at the edge.
#[derive(Debug, Clone)]
pub struct FormSession {
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
    photos: BTreeMap<String, PendingPhoto>,
}

impl FormSession {
    /// Fresh session: both dates default to today as `dd/mm/yyyy`, the
    /// transaction to `Outbound`, the counter to zero.
    pub fn new() -> Self {
        let today = Local::now().format("%d/%m/%Y").to_string();
        FormSession {
            date: today.clone(),
            shift: Shift::Morning,
            nike_mp: 0,
            time_in_nike: String::new(),
            shipper_name: String::new(),
            receipt_date: today,
            no_document: String::new(),
            transaction: Transaction::Outbound,
            vehicle_no: String::new(),
            container_no: String::new(),
            warehouse_name: String::new(),
            photos: BTreeMap::new(),
        }
    }

    pub fn set_photo(&mut self, section: &str, photo: PendingPhoto) -> Result<(), AppError> {
        if !is_valid_section(section) {
            return Err(AppError::InvalidInput(format!(
                "Unknown photo section: {}",
                section
            )));
        }
        self.photos.insert(section.to_string(), photo);
        Ok(())
    }

    pub fn clear_photo(&mut self, section: &str) {
        self.photos.remove(section);
    }

    pub fn photo(&self, section: &str) -> Option<&PendingPhoto> {
        self.photos.get(section)
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    pub fn increment_nike_mp(&mut self) {
        self.nike_mp += 1;
    }

    /// Clamped at zero; decrementing an empty counter is a no-op.
    pub fn decrement_nike_mp(&mut self) {
        if self.nike_mp > 0 {
            self.nike_mp -= 1;
        }
    }

    /// Freeze the scalar fields into a create payload with the given
    /// uploaded-photo mapping.
    pub fn to_create_request(
        &self,
        photo_urls: BTreeMap<String, String>,
    ) -> CreateLoaderRequest {
        CreateLoaderRequest {
            date: self.date.clone(),
            shift: self.shift,
            nike_mp: self.nike_mp,
            time_in_nike: self.time_in_nike.clone(),
            shipper_name: self.shipper_name.clone(),
            receipt_date: self.receipt_date.clone(),
            no_document: self.no_document.clone(),
            transaction: self.transaction,
            vehicle_no: self.vehicle_no.clone(),
            container_no: self.container_no.clone(),
            warehouse_name: self.warehouse_name.clone(),
            photo_urls,
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> PendingPhoto {
        PendingPhoto {
            original_name: "shot.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_defaults() {
        let session = FormSession::new();
        assert_eq!(session.transaction, Transaction::Outbound);
        assert_eq!(session.nike_mp, 0);
        assert_eq!(session.date, session.receipt_date);
        // dd/mm/yyyy
        assert_eq!(session.date.len(), 10);
        assert_eq!(&session.date[2..3], "/");
        assert_eq!(&session.date[5..6], "/");
        assert_eq!(session.photo_count(), 0);
    }

    #[test]
    fn test_set_photo_rejects_unknown_section() {
        let mut session = FormSession::new();
        assert!(session.set_photo("not a section", photo()).is_err());
        assert!(session.set_photo("segel", photo()).is_ok());
        assert_eq!(session.photo_count(), 1);
    }

    #[test]
    fn test_clear_photo() {
        let mut session = FormSession::new();
        session.set_photo("segel", photo()).unwrap();
        session.clear_photo("segel");
        assert_eq!(session.photo_count(), 0);
        assert!(session.photo("segel").is_none());
    }

    #[test]
    fn test_counter_clamps_at_zero() {
        let mut session = FormSession::new();
        session.decrement_nike_mp();
        assert_eq!(session.nike_mp, 0);
        session.increment_nike_mp();
        session.increment_nike_mp();
        session.decrement_nike_mp();
        assert_eq!(session.nike_mp, 1);
    }

    #[test]
    fn test_to_create_request_carries_mapping() {
        let mut session = FormSession::new();
        session.shipper_name = "Acme".to_string();
        let urls = BTreeMap::from([("segel".to_string(), "http://x/1.jpg".to_string())]);
        let req = session.to_create_request(urls.clone());
        assert_eq!(req.shipper_name, "Acme");
        assert_eq!(req.photo_urls, urls);
    }
}
