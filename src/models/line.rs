//! Line-level codec for booking records

use crate::models::booking::{Booking, FIELD_COUNT};
use thiserror::Error;

/// Field delimiter within a record line.
pub const DELIMITER: char = ';';

/// Errors that can occur while decoding a record line
#[derive(Debug, Error)]
pub enum LineError {
    #[error("expected 10 fields, found {0}")]
    FieldCount(usize),
}

/// Parse one semicolon-delimited line into a booking.
///
/// The line must contain exactly ten fields. Field values are taken verbatim;
/// there is no escaping mechanism, so a field containing the delimiter cannot
/// be represented and will change the arity.
pub fn parse_booking(line: &str) -> Result<Booking, LineError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(fields.len()));
    }

    Ok(Booking::new(
        fields[0], fields[1], fields[2], fields[3], fields[4], fields[5], fields[6], fields[7],
        fields[8], fields[9],
    ))
}

/// Serialize a booking back into its line form, without a trailing newline.
pub fn serialize_booking(booking: &Booking) -> String {
    booking.fields().join(&DELIMITER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "Resort Hotel;01/22/2017;4;2;0;0;YES;PL;Check-Out;09/20/2022";

    #[test]
    fn test_parse_booking() {
        let booking = parse_booking(LINE).unwrap();
        assert_eq!(booking.hotel, "Resort Hotel");
        assert_eq!(booking.arrival_date, "01/22/2017");
        assert_eq!(booking.booked_nights, "4");
        assert_eq!(booking.children, "0");
        assert_eq!(booking.meal, "YES");
        assert_eq!(booking.country, "PL");
        assert_eq!(booking.status, "Check-Out");
        assert_eq!(booking.status_date, "09/20/2022");
    }

    #[test]
    fn test_parse_preserves_whitespace() {
        let booking = parse_booking("City Hotel ; 01/22/2017;2;2;0;0;NO;FR;Cancelled;09/20/2022")
            .unwrap();
        assert_eq!(booking.hotel, "City Hotel ");
        assert_eq!(booking.arrival_date, " 01/22/2017");
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = parse_booking("Resort Hotel;01/22/2017;4").unwrap_err();
        assert!(matches!(err, LineError::FieldCount(3)));
    }

    #[test]
    fn test_parse_too_many_fields() {
        let err = parse_booking(&format!("{LINE};extra")).unwrap_err();
        assert!(matches!(err, LineError::FieldCount(11)));
    }

    #[test]
    fn test_serialize_round_trip() {
        let booking = parse_booking(LINE).unwrap();
        assert_eq!(serialize_booking(&booking), LINE);
    }

    #[test]
    fn test_empty_fields_survive() {
        let booking = parse_booking(";;;;;;;;;").unwrap();
        assert_eq!(booking.hotel, "");
        assert_eq!(serialize_booking(&booking), ";;;;;;;;;");
    }
}
