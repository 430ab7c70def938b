use chrono::NaiveDateTime;
use thiserror::Error;

use crate::model::{NewTrip, Zone};

/// Timestamp format used by the trip dataset.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("missing field {0}")]
    MissingField(usize),

    #[error("field {index} ({value:?}) is not an integer")]
    InvalidInt { index: usize, value: String },

    #[error("field {index} ({value:?}) is not a YYYY-MM-DD HH:MM:SS timestamp")]
    InvalidTimestamp { index: usize, value: String },
}

/// One zone lookup row: `LocationID,Borough,Zone,service_zone`.
pub fn parse_zone(record: &csv::StringRecord) -> Result<Zone, RecordError> {
    Ok(Zone {
        location_id: int_field(record, 0)?,
        borough: field(record, 1)?.to_string(),
        zone_name: field(record, 2)?.to_string(),
        service_zone: field(record, 3)?.to_string(),
    })
}

/// One trip row: pickup/dropoff timestamps followed by the location ids.
pub fn parse_trip(record: &csv::StringRecord) -> Result<NewTrip, RecordError> {
    Ok(NewTrip {
        pickup_date_time: timestamp_field(record, 0)?,
        dropoff_date_time: timestamp_field(record, 1)?,
        pickup_location_id: int_field(record, 2)?,
        dropoff_location_id: int_field(record, 3)?,
    })
}

fn field<'a>(record: &'a csv::StringRecord, index: usize) -> Result<&'a str, RecordError> {
    record.get(index).ok_or(RecordError::MissingField(index))
}

fn int_field(record: &csv::StringRecord, index: usize) -> Result<i32, RecordError> {
    let value = field(record, index)?;

    value.parse().map_err(|_| RecordError::InvalidInt {
        index,
        value: value.to_string(),
    })
}

fn timestamp_field(record: &csv::StringRecord, index: usize) -> Result<NaiveDateTime, RecordError> {
    let value = field(record, index)?;

    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).map_err(|_| {
        RecordError::InvalidTimestamp {
            index,
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn parses_a_zone_row() {
        let zone = parse_zone(&record(&["4", "Manhattan", "Alphabet City", "Yellow Zone"])).unwrap();

        assert_eq!(
            zone,
            Zone {
                location_id: 4,
                borough: "Manhattan".to_string(),
                zone_name: "Alphabet City".to_string(),
                service_zone: "Yellow Zone".to_string(),
            }
        );
    }

    #[test]
    fn zone_with_non_integer_id_fails() {
        let err = parse_zone(&record(&["four", "Manhattan", "Alphabet City", "Yellow Zone"]))
            .unwrap_err();

        assert_eq!(
            err,
            RecordError::InvalidInt {
                index: 0,
                value: "four".to_string(),
            }
        );
    }

    #[test]
    fn zone_with_missing_field_fails() {
        let err = parse_zone(&record(&["4", "Manhattan", "Alphabet City"])).unwrap_err();

        assert_eq!(err, RecordError::MissingField(3));
    }

    #[test]
    fn parses_a_trip_row() {
        let trip = parse_trip(&record(&[
            "2024-03-05 07:30:00",
            "2024-03-05 07:55:12",
            "132",
            "48",
        ]))
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        assert_eq!(
            trip,
            NewTrip {
                pickup_date_time: date.and_hms_opt(7, 30, 0).unwrap(),
                dropoff_date_time: date.and_hms_opt(7, 55, 12).unwrap(),
                pickup_location_id: 132,
                dropoff_location_id: 48,
            }
        );
    }

    #[test]
    fn trip_with_bad_timestamp_fails() {
        let err = parse_trip(&record(&[
            "2024-03-05 07:30:00",
            "05/03/2024 07:55",
            "132",
            "48",
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            RecordError::InvalidTimestamp {
                index: 1,
                value: "05/03/2024 07:55".to_string(),
            }
        );
    }

    #[test]
    fn trip_with_non_integer_location_fails() {
        let err = parse_trip(&record(&[
            "2024-03-05 07:30:00",
            "2024-03-05 07:55:12",
            "JFK",
            "48",
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            RecordError::InvalidInt {
                index: 2,
                value: "JFK".to_string(),
            }
        );
    }

    #[test]
    fn trip_with_missing_field_fails() {
        let err =
            parse_trip(&record(&["2024-03-05 07:30:00", "2024-03-05 07:55:12", "132"]))
                .unwrap_err();

        assert_eq!(err, RecordError::MissingField(3));
    }
}
