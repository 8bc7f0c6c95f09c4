//! Flattening and CSV output.
//!
//! Turns nested per-station schedule documents into flat
//! (train, stop) rows and owns the pipeline that drives a whole
//! export run.

mod flatten;
mod pipeline;
mod row;
mod writer;

pub use flatten::flatten_document;
pub use pipeline::{ExportError, Exporter, ExporterConfig, RunSummary};
pub use row::{FlattenedStop, StopRow};
pub use writer::{OutputError, rows_to_csv, write_rows};
