//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use uuid::Uuid;

use gudang_core::models::{is_valid_section, CreateLoaderRequest, LoaderRequestResponse};
use gudang_core::Config;
use gudang_db::LoaderRequestRepository;
use gudang_report::{HttpPhotoFetcher, ReportGenerator, REPORT_FILE_NAME};
use gudang_services::{FormSession, PendingPhoto, SubmissionService};
use gudang_storage::create_storage;

/// Load and validate configuration before anything connects.
fn load_config() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn connect(config: &Config) -> Result<LoaderRequestRepository> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    sqlx::migrate::Migrator::new(Path::new("migrations"))
        .await?
        .run(&pool)
        .await?;
    Ok(LoaderRequestRepository::new(pool))
}

fn content_type_for(extension: &str) -> Option<&'static str> {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Check one photo file against the configured upload constraints.
fn check_photo_constraints(
    config: &Config,
    path: &Path,
    extension: &str,
    content_type: &str,
    size_bytes: usize,
) -> Result<()> {
    let extension = extension.to_lowercase();
    if !config.photo_allowed_extensions.contains(&extension) {
        bail!(
            "{}: extension '{}' is not allowed (allowed: {})",
            path.display(),
            extension,
            config.photo_allowed_extensions.join(", ")
        );
    }
    if !config
        .photo_allowed_content_types
        .contains(&content_type.to_string())
    {
        bail!(
            "{}: content type '{}' is not allowed (allowed: {})",
            path.display(),
            content_type,
            config.photo_allowed_content_types.join(", ")
        );
    }
    if size_bytes > config.max_photo_size_bytes {
        bail!(
            "{}: {} bytes exceeds the {} byte limit",
            path.display(),
            size_bytes,
            config.max_photo_size_bytes
        );
    }
    Ok(())
}

/// Fill a session from the input JSON and the photo directory.
fn build_session(config: &Config, input: &Path, photos: Option<&Path>) -> Result<FormSession> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let fields: CreateLoaderRequest =
        serde_json::from_str(&raw).context("Invalid request JSON")?;

    let mut session = FormSession::new();
    session.date = fields.date;
    session.shift = fields.shift;
    session.nike_mp = fields.nike_mp;
    session.time_in_nike = fields.time_in_nike;
    session.shipper_name = fields.shipper_name;
    session.receipt_date = fields.receipt_date;
    session.no_document = fields.no_document;
    session.transaction = fields.transaction;
    session.vehicle_no = fields.vehicle_no;
    session.container_no = fields.container_no;
    session.warehouse_name = fields.warehouse_name;

    let Some(dir) = photos else {
        return Ok(session);
    };
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read photo directory {}", dir.display()))?
    {
        let path = entry?.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !is_valid_section(stem) {
            warn!(file = %path.display(), "File name is not a photo section, skipping");
            continue;
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .with_context(|| format!("{}: photo file has no extension", path.display()))?;
        let content_type = content_type_for(extension).with_context(|| {
            format!(
                "{}: no content type known for extension '{}'",
                path.display(),
                extension
            )
        })?;
        let data = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        check_photo_constraints(config, &path, extension, content_type, data.len())?;
        let original_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(stem)
            .to_string();
        session
            .set_photo(
                stem,
                PendingPhoto {
                    original_name,
                    content_type: content_type.to_string(),
                    data,
                },
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?;
    }
    Ok(session)
}

pub async fn submit(input: PathBuf, photos: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let session = build_session(&config, &input, photos.as_deref())?;
    info!(photos = session.photo_count(), "Submitting loader request");

    let repository = connect(&config).await?;
    let storage = create_storage(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Storage setup failed: {}", e))?;
    let service = SubmissionService::new(
        Arc::new(repository),
        storage,
        ReportGenerator::new(Box::new(HttpPhotoFetcher::new())),
    );

    let outcome = service
        .submit(&session)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.detailed_message()))?;

    let out = out.unwrap_or_else(|| PathBuf::from(&config.report_output_dir).join(REPORT_FILE_NAME));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, &outcome.report_pdf)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!("{}", outcome.id);
    info!(report = %out.display(), "Report written");
    Ok(())
}

pub async fn show(id: Uuid) -> Result<()> {
    let config = load_config()?;
    let repository = connect(&config).await?;
    let Some(record) = repository
        .get_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.detailed_message()))?
    else {
        bail!("Loader request {} not found", id);
    };
    let response = LoaderRequestResponse::from(record);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
