//! Warehouse activity report generation.
//!
//! Renders a single-page A4 document from a loader request: company header,
//! highlighted activity title, key/value block, two summary lists, a 4x4
//! photo grid, and a footer. Layout lives in [`layout`], the pure op builder
//! in [`ops`], and the printpdf executor in [`pdf`].

pub mod error;
pub mod fetch;
pub mod layout;
pub mod metrics;
pub mod ops;
pub mod pdf;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use gudang_core::models::LoaderRequest;

pub use error::RenderError;
pub use fetch::{HttpPhotoFetcher, PhotoFetcher};
pub use ops::{build_ops, DrawOp, ReportFields};

/// File name the report is saved and served under.
pub const REPORT_FILE_NAME: &str = "warehouse_report.pdf";

/// Builds reports end to end: fetch photos, build ops, render PDF.
pub struct ReportGenerator {
    fetcher: Box<dyn PhotoFetcher>,
}

impl std::fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportGenerator").finish_non_exhaustive()
    }
}

impl ReportGenerator {
    pub fn new(fetcher: Box<dyn PhotoFetcher>) -> Self {
        ReportGenerator { fetcher }
    }

    /// Render the report for a stored request, returning the PDF bytes.
    ///
    /// Photos that cannot be fetched or decoded leave their grid cell empty;
    /// only document assembly itself can fail.
    pub async fn generate(&self, request: &LoaderRequest) -> Result<Vec<u8>, RenderError> {
        self.generate_from_parts(&ReportFields::from(request), &request.photo_urls)
            .await
    }

    pub async fn generate_from_parts(
        &self,
        fields: &ReportFields,
        photo_urls: &BTreeMap<String, String>,
    ) -> Result<Vec<u8>, RenderError> {
        let photos = fetch::fetch_photos(self.fetcher.as_ref(), photo_urls).await;
        let sections = photos.keys().cloned().collect();
        let ops = ops::build_ops(fields, &sections);
        let bytes = pdf::render_ops(&ops, &photos)?;
        info!(
            photos = photos.len(),
            bytes = bytes.len(),
            "Rendered warehouse report"
        );
        Ok(bytes)
    }

    /// Render and save the report under [`REPORT_FILE_NAME`] in `dir`.
    pub async fn generate_to_dir(
        &self,
        request: &LoaderRequest,
        dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let bytes = self.generate(request).await?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(REPORT_FILE_NAME);
        std::fs::write(&path, &bytes)?;
        Ok(path)
    }
}
