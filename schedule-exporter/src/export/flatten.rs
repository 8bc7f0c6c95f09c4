//! Schedule document flattening.
//!
//! Converts one station's nested train/stop document into flat stop
//! rows, resolving city names against the station mapping as it goes.

use crate::egytrains::ScheduleDocument;
use crate::stations::StationMapping;

use super::row::FlattenedStop;

/// Flatten a schedule document into unnumbered stop rows.
///
/// Trains are visited in the document's iteration order; each train's
/// stops keep their published travel order and are numbered from 1.
/// City names are looked up as published, without trimming. A name
/// missing from the mapping produces an empty station identifier, not
/// an error, and the stop is still emitted.
pub fn flatten_document(
    document: &ScheduleDocument,
    mapping: &StationMapping,
) -> Vec<FlattenedStop> {
    let mut stops = Vec::new();

    for (train_number, detail) in &document.trains {
        for (index, city) in detail.cities.iter().enumerate() {
            let station_id = mapping.get(&city.name).unwrap_or("").to_string();

            stops.push(FlattenedStop {
                train_number: train_number.clone(),
                stop_order: (index + 1) as u32,
                station_id,
                arrival_time: city.a.clone().unwrap_or_default(),
                departure_time: city.d.clone().unwrap_or_default(),
            });
        }
    }

    stops
}
