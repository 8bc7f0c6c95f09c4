//! Station name → identifier mapping.
//!
//! Provides English station name → identifier lookup, loaded from a
//! local CSV file once at startup. The names are the keys the remote
//! schedule documents use for stops, so lookups happen on the display
//! names exactly as published.

mod error;
mod mapping;

pub use error::MappingError;
pub use mapping::StationMapping;
