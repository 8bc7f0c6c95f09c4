//! CSV output writer.
//!
//! Serializes the flattened rows into the single output file. The
//! whole document is built in memory and written in one shot; there
//! are no incremental or append writes.

use std::path::Path;

use super::row::StopRow;

/// Output column header, in emission order.
const HEADER: [&str; 6] = [
    "id",
    "train_number",
    "stop_order",
    "station_id",
    "arrival_time",
    "departure_time",
];

/// Errors that can occur when producing the output file.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Row serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The output file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize rows to CSV bytes: the header line, then one line per row.
///
/// Fields are joined as-is, with no quoting or escaping. A field that
/// itself contains a comma corrupts its line; the format is kept
/// bug-compatible with existing consumers of the file.
pub fn rows_to_csv(rows: &[StopRow]) -> Result<Vec<u8>, OutputError> {
    let mut buf = Vec::new();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .has_headers(false)
        .from_writer(&mut buf);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);

    Ok(buf)
}

/// Write rows to `path`, replacing any existing file.
pub fn write_rows(path: impl AsRef<Path>, rows: &[StopRow]) -> Result<(), OutputError> {
    let data = rows_to_csv(rows)?;
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_row(id: u64) -> StopRow {
        StopRow {
            id,
            train_number: "900".to_string(),
            stop_order: 1,
            station_id: "1".to_string(),
            arrival_time: String::new(),
            departure_time: "08:00".to_string(),
        }
    }

    #[test]
    fn header_is_written_even_without_rows() {
        let bytes = rows_to_csv(&[]).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "id,train_number,stop_order,station_id,arrival_time,departure_time\n"
        );
    }

    #[test]
    fn rows_serialize_in_column_order() {
        let rows = vec![
            make_row(1),
            StopRow {
                id: 2,
                train_number: "900".to_string(),
                stop_order: 2,
                station_id: "2".to_string(),
                arrival_time: "11:00".to_string(),
                departure_time: String::new(),
            },
        ];

        let text = String::from_utf8(rows_to_csv(&rows).unwrap()).unwrap();

        assert_eq!(
            text,
            "id,train_number,stop_order,station_id,arrival_time,departure_time\n\
             1,900,1,1,,08:00\n\
             2,900,2,2,11:00,\n"
        );
    }

    #[test]
    fn fields_are_never_quoted_or_escaped() {
        let mut row = make_row(1);
        row.departure_time = "08:00, approx".to_string();

        let text = String::from_utf8(rows_to_csv(&[row]).unwrap()).unwrap();

        // The embedded comma goes out raw and corrupts the line.
        assert!(text.contains("1,900,1,1,,08:00, approx\n"));
        assert!(!text.contains('"'));
    }

    #[test]
    fn write_rows_replaces_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_rows(&path, &[make_row(1), make_row(2)]).unwrap();
        write_rows(&path, &[make_row(7)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "id,train_number,stop_order,station_id,arrival_time,departure_time\n\
             7,900,1,1,,08:00\n"
        );
    }

    #[test]
    fn write_rows_fails_for_an_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("output.csv");

        let err = write_rows(&path, &[make_row(1)]).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
