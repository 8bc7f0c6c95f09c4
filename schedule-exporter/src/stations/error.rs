//! Station mapping error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station mapping.
///
/// Individual unreadable rows are skipped during the load and never
/// surface here; this covers the file itself being unusable.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// The mapping file could not be opened or its header read
    #[error("cannot read station mapping {path:?}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
