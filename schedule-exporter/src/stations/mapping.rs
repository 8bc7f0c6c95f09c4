//! Station mapping loading and lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::error::MappingError;

/// One row of the stations CSV.
///
/// Columns are matched by header name, so extra columns and column
/// order are irrelevant. Both fields are optional; rows that lack a
/// usable name are skipped at load time.
#[derive(Debug, Deserialize)]
struct StationRecord {
    /// English display name, as the schedule documents spell it.
    en_name: Option<String>,
    /// Opaque station identifier.
    id: Option<String>,
}

/// English station name → identifier lookup.
///
/// Loaded once at startup and read-only afterwards. The first
/// identifier seen for a name wins; later duplicates are ignored.
/// Insertion order is preserved so a run visits stations in the order
/// the mapping file lists them.
#[derive(Debug, Default)]
pub struct StationMapping {
    /// Names in first-insertion order.
    names: Vec<String>,
    ids: HashMap<String, String>,
}

impl StationMapping {
    /// Load the mapping from a CSV file with `en_name` and `id` columns.
    ///
    /// Rows with an empty or missing name are skipped, as are rows the
    /// CSV reader cannot decode. Fails only if the file itself cannot
    /// be opened or its header read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MappingError> {
        let path = path.as_ref();
        let unavailable = |source| MappingError::Unavailable {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::Reader::from_path(path).map_err(unavailable)?;
        reader.headers().map_err(unavailable)?;

        let mut mapping = StationMapping::default();
        let mut skipped = 0usize;

        for record in reader.deserialize::<StationRecord>() {
            match record {
                Ok(row) => {
                    let name = row.en_name.unwrap_or_default();
                    mapping.insert_first(&name, row.id.unwrap_or_default());
                }
                Err(e) => {
                    debug!("skipping unreadable station row: {e}");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            debug!("skipped {skipped} unreadable station rows");
        }
        info!(
            "loaded {} station mappings (English names only)",
            mapping.len()
        );

        Ok(mapping)
    }

    /// Build a mapping directly from name/identifier pairs (for tests
    /// and tooling). Applies the same policy as [`StationMapping::load`]:
    /// names are trimmed, empty names are skipped, first identifier wins.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut mapping = StationMapping::default();
        for (name, id) in pairs {
            mapping.insert_first(name.as_ref(), id.into());
        }
        mapping
    }

    /// Look up the identifier for a station display name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    /// Station names in first-insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Get the number of mapped stations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Insert a name/identifier pair unless the trimmed name is empty
    /// or already present.
    fn insert_first(&mut self, name: &str, id: String) {
        let name = name.trim();
        if name.is_empty() || self.ids.contains_key(name) {
            return;
        }
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
    }
}
