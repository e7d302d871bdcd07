//! Error taxonomy for the fetch/extract/download pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Page or image retrieval failed. On the initial listing-page fetch this is
/// fatal for the whole run; inside a download task it is confined to the task.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported a transport error (DNS, connect, timeout, TLS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response arrived with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

/// Failure of a single download task. Caught and logged at the worker
/// boundary; never propagates to other tasks.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    /// Disk write failed (e.g. disk full, permission denied).
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Statistics were requested over an empty record set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog contains no products")]
    EmptyCatalog,
}
