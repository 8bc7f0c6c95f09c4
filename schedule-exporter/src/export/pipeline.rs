//! The export pipeline.
//!
//! Owns a whole run: load the station mapping, fetch each station's
//! schedule document in turn, flatten, number the rows, and write the
//! output file once at the end.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::egytrains::EgytrainsClient;
use crate::stations::{MappingError, StationMapping};

use super::flatten::flatten_document;
use super::row::StopRow;
use super::writer::{OutputError, write_rows};

/// Default path of the station mapping CSV.
const DEFAULT_STATIONS_PATH: &str = "data/stations.csv";

/// Default path the output CSV is written to.
const DEFAULT_OUTPUT_PATH: &str = "all_stations_output.csv";

/// Fatal export errors.
///
/// Per-station fetch and parse failures are handled inside the run by
/// skipping the station; they never show up here.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The station mapping could not be loaded
    #[error("mapping load failed: {0}")]
    Mapping(#[from] MappingError),

    /// The output file could not be produced
    #[error("output write failed: {0}")]
    Output(#[from] OutputError),
}

/// Configuration for an export run.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Path of the stations CSV (`en_name` and `id` columns)
    pub stations_path: PathBuf,
    /// Path the output CSV is written to
    pub output_path: PathBuf,
}

impl ExporterConfig {
    /// Create a new config with the default paths.
    pub fn new() -> Self {
        Self {
            stations_path: PathBuf::from(DEFAULT_STATIONS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Set the stations CSV path.
    pub fn with_stations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stations_path = path.into();
        self
    }

    /// Set the output CSV path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Stations whose documents were fetched and flattened.
    pub stations_processed: usize,
    /// Stations skipped because their document was unavailable.
    pub stations_skipped: usize,
    /// Data rows written to the output file (the header not counted).
    pub rows_written: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// The export pipeline driver.
pub struct Exporter {
    client: EgytrainsClient,
    config: ExporterConfig,
}

impl Exporter {
    /// Create a new exporter from its client and configuration.
    pub fn new(client: EgytrainsClient, config: ExporterConfig) -> Self {
        Self { client, config }
    }

    /// Run the export end to end.
    ///
    /// Stations are visited one at a time, in mapping-file order. Row
    /// identifiers count up from 1 across the whole run and are
    /// assigned only to rows that are actually written, so a skipped
    /// station consumes none. Only a failure to load the mapping or to
    /// write the output is fatal.
    pub async fn run(&self) -> Result<RunSummary, ExportError> {
        let started = Instant::now();

        let mapping = StationMapping::load(&self.config.stations_path)?;
        let total = mapping.len();

        let mut rows: Vec<StopRow> = Vec::new();
        let mut next_id: u64 = 1;
        let mut processed = 0usize;
        let mut skipped = 0usize;

        for (position, name) in mapping.names().iter().enumerate() {
            info!("processing station ({}/{}): {}", position + 1, total, name);

            let document = match self.client.get_schedule(name).await {
                Ok(document) => document,
                Err(e) => {
                    warn!("no usable schedule document for {name}: {e}");
                    skipped += 1;
                    continue;
                }
            };

            let station_stops = flatten_document(&document, &mapping);
            info!("flattened {} stops for {name}", station_stops.len());

            for stop in station_stops {
                rows.push(stop.into_row(next_id));
                next_id += 1;
            }
            processed += 1;
        }

        info!(
            "writing {} rows to {:?}",
            rows.len(),
            self.config.output_path
        );
        write_rows(&self.config.output_path, &rows)?;

        Ok(RunSummary {
            stations_processed: processed,
            stations_skipped: skipped,
            rows_written: rows.len(),
            elapsed: started.elapsed(),
        })
    }
}
