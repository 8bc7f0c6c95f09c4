//! Output row types.

use serde::Serialize;

/// A flattened stop that has not been numbered yet.
///
/// Flattening produces these; the pipeline is the only place row
/// identifiers come from, so a skipped station can never consume ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedStop {
    /// Train number (the schedule document key).
    pub train_number: String,
    /// 1-based position of this stop within its train's stop sequence.
    pub stop_order: u32,
    /// Mapped station identifier; empty when the city name is unmapped.
    pub station_id: String,
    /// Arrival time as published; empty when absent.
    pub arrival_time: String,
    /// Departure time as published; empty when absent.
    pub departure_time: String,
}

impl FlattenedStop {
    /// Attach the run-global row identifier, producing an output row.
    pub fn into_row(self, id: u64) -> StopRow {
        StopRow {
            id,
            train_number: self.train_number,
            stop_order: self.stop_order,
            station_id: self.station_id,
            arrival_time: self.arrival_time,
            departure_time: self.departure_time,
        }
    }
}

/// One data line of the output file.
///
/// Field order here is the output column order; the writer emits the
/// header from the same field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopRow {
    /// Run-global row identifier, counting up from 1.
    pub id: u64,
    pub train_number: String,
    pub stop_order: u32,
    pub station_id: String,
    pub arrival_time: String,
    pub departure_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_row_attaches_the_identifier() {
        let stop = FlattenedStop {
            train_number: "901".to_string(),
            stop_order: 3,
            station_id: "14".to_string(),
            arrival_time: "08:48".to_string(),
            departure_time: "08:50".to_string(),
        };

        let row = stop.into_row(42);

        assert_eq!(row.id, 42);
        assert_eq!(row.train_number, "901");
        assert_eq!(row.stop_order, 3);
        assert_eq!(row.station_id, "14");
        assert_eq!(row.arrival_time, "08:48");
        assert_eq!(row.departure_time, "08:50");
    }
}
