//! Shared key generation for storage backends.
//!
//! Key format: `photos/{filename}`. Photo filenames are made unique per
//! submission by prefixing the submission timestamp and the section name.

/// Generate the storage key for a photo filename.
pub fn photo_key(filename: &str) -> String {
    format!("photos/{}", filename)
}

/// Generate a per-submission photo filename.
///
/// `{unix_millis}-{section}-{original_name}`, mirroring the naming the form
/// has always used, so a re-submission never overwrites an earlier upload.
pub fn photo_filename(submitted_at_millis: i64, section: &str, original_name: &str) -> String {
    format!("{}-{}-{}", submitted_at_millis, section, original_name)
}
