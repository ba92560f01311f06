//! Request validation helpers.

use validator::Validate;

use crate::error::AppError;
use crate::models::{is_valid_section, CreateLoaderRequest};

/// Validate a create payload before it reaches the repository.
///
/// Checks the derived field constraints (non-negative counter), that every
/// `photo_urls` key is one of the fixed section names, and that every mapped
/// URL is non-empty.
pub fn validate_create_request(req: &CreateLoaderRequest) -> Result<(), AppError> {
    req.validate()?;

    for (section, url) in &req.photo_urls {
        if !is_valid_section(section) {
            return Err(AppError::InvalidInput(format!(
                "Unknown photo section: {}",
                section
            )));
        }
        if url.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Empty photo URL for section: {}",
                section
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Shift, Transaction};

    fn base_request() -> CreateLoaderRequest {
        CreateLoaderRequest {
            date: "01/01/2024".to_string(),
            shift: Shift::Morning,
            nike_mp: 0,
            time_in_nike: "08:00".to_string(),
            shipper_name: "Acme".to_string(),
            receipt_date: "01/01/2024".to_string(),
            no_document: "DOC-1".to_string(),
            transaction: Transaction::Outbound,
            vehicle_no: "B1234".to_string(),
            container_no: "CONT-9".to_string(),
            warehouse_name: "WH-A".to_string(),
            photo_urls: BTreeMap::new(),
        }
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        assert!(validate_create_request(&base_request()).is_ok());
    }

    #[test]
    fn test_known_sections_are_valid() {
        let mut req = base_request();
        req.photo_urls.insert(
            "segel".to_string(),
            "http://localhost/photos/segel.jpg".to_string(),
        );
        req.photo_urls.insert(
            "Product 3".to_string(),
            "http://localhost/photos/p3.jpg".to_string(),
        );
        assert!(validate_create_request(&req).is_ok());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let mut req = base_request();
        req.photo_urls
            .insert("Product 8".to_string(), "http://localhost/x.jpg".to_string());
        let err = validate_create_request(&req).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let mut req = base_request();
        req.photo_urls.insert("segel".to_string(), "  ".to_string());
        assert!(validate_create_request(&req).is_err());
    }
}
