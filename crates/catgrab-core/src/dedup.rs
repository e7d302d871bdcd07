//! Existence-based dedup filter: which records still need a download.

use std::path::{Path, PathBuf};
use url::Url;

use crate::record::ProductRecord;

/// One pending download: the record plus its pre-computed destination path.
/// Created when a record fails the dedup check, consumed exactly once by a
/// pool worker, discarded after the write completes or fails.
#[derive(Debug, Clone)]
pub struct DownloadTask {
    pub record: ProductRecord,
    pub destination: PathBuf,
}

/// Destination path for a record: `images_dir/{file_stem}{ext}`, with the
/// extension taken from the image URL's path (query string excluded). A path
/// without an extension yields a bare stem.
pub fn destination_path(images_dir: &Path, record: &ProductRecord) -> PathBuf {
    let mut file_name = record.file_stem();
    if let Some(ext) = image_extension(&record.image_url) {
        file_name.push('.');
        file_name.push_str(&ext);
    }
    images_dir.join(file_name)
}

/// Extension of the URL's path component, if any.
fn image_extension(image_url: &str) -> Option<String> {
    let path = match Url::parse(image_url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => image_url.to_string(),
    };
    Path::new(&path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_string)
}

/// Tasks for every record whose destination does not exist yet, in document
/// order. Point-in-time check only; a writer racing the check is accepted.
/// Records sharing a file stem both pass the filter when the file is absent
/// (last writer wins on disk).
pub fn pending_tasks(images_dir: &Path, records: &[ProductRecord]) -> Vec<DownloadTask> {
    records
        .iter()
        .filter_map(|record| {
            let destination = destination_path(images_dir, record);
            if destination.exists() {
                tracing::debug!(path = %destination.display(), "image already present, skipping");
                None
            } else {
                Some(DownloadTask {
                    record: record.clone(),
                    destination,
                })
            }
        })
        .collect()
}
