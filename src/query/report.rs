//! Fixed-width reservation table for a single arrival date

use crate::models::Booking;
use crate::query::QueryError;
use chrono::{Days, NaiveDate};
use std::fmt;

/// Date format used by the booking file.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Column labels of the reservation table.
pub const HEADERS: [&str; 7] = [
    "hotel",
    "check in",
    "check out",
    "adults",
    "children",
    "babies",
    "status",
];

/// One rendered reservation row.
///
/// The check-out date is computed, not stored: arrival date plus booked
/// nights, by calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRow {
    pub hotel: String,
    pub check_in: String,
    pub check_out: String,
    pub adults: String,
    pub children: String,
    pub babies: String,
    pub status: String,
}

impl ReservationRow {
    fn from_booking(booking: &Booking) -> Result<Self, QueryError> {
        Ok(ReservationRow {
            hotel: booking.hotel.clone(),
            check_in: booking.arrival_date.clone(),
            check_out: checkout_date(&booking.arrival_date, &booking.booked_nights)?,
            adults: booking.adults.clone(),
            children: booking.children.clone(),
            babies: booking.babies.clone(),
            status: booking.status.clone(),
        })
    }

    /// The seven cells in display order.
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.hotel,
            &self.check_in,
            &self.check_out,
            &self.adults,
            &self.children,
            &self.babies,
            &self.status,
        ]
    }
}

/// Reservation table for one arrival date.
///
/// `width` is the single column width shared by every cell. It is derived
/// from the longest field anywhere in the *input* booking list, not just the
/// rows on display; a long field in an unrelated booking widens the table.
/// This mirrors the source system and keeps tables for different dates over
/// the same data uniformly sized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationTable {
    pub width: usize,
    pub rows: Vec<ReservationRow>,
}

impl fmt::Display for ReservationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, &HEADERS, self.width)?;
        for row in &self.rows {
            writeln!(f)?;
            write_row(f, &row.cells(), self.width)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[&str; 7], width: usize) -> fmt::Result {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " | ")?;
        }
        write!(f, "{cell:^width$}")?;
    }
    Ok(())
}

/// Build the reservation table for bookings arriving on `date`.
///
/// Rows keep input order. A displayed booking whose arrival date or booked
/// nights cannot be parsed fails the whole table; bookings outside `date`
/// are never parsed.
pub fn reservation_table(bookings: &[Booking], date: &str) -> Result<ReservationTable, QueryError> {
    let width = bookings
        .iter()
        .flat_map(|b| b.fields())
        .map(str::len)
        .max()
        .unwrap_or(0);

    let mut rows = Vec::new();
    for booking in bookings {
        if booking.arrival_date == date {
            rows.push(ReservationRow::from_booking(booking)?);
        }
    }

    Ok(ReservationTable { width, rows })
}

/// Render the reservation table for `date` as text.
pub fn render_table(bookings: &[Booking], date: &str) -> Result<String, QueryError> {
    Ok(reservation_table(bookings, date)?.to_string())
}

/// Arrival date plus booked nights, in MM/DD/YYYY.
fn checkout_date(arrival: &str, nights: &str) -> Result<String, QueryError> {
    let date = NaiveDate::parse_from_str(arrival, DATE_FORMAT)
        .map_err(|_| QueryError::BadDate(arrival.to_string()))?;
    let nights: u64 = nights.parse().map_err(|source| QueryError::BadNights {
        value: nights.to_string(),
        source,
    })?;

    let checkout = date
        .checked_add_days(Days::new(nights))
        .ok_or_else(|| QueryError::BadDate(arrival.to_string()))?;

    Ok(checkout.format(DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bookings() -> Vec<Booking> {
        vec![
            Booking::new(
                "Resort Hotel",
                "01/22/2017",
                "4",
                "2",
                "0",
                "0",
                "YES",
                "PL",
                "Check-Out",
                "09/20/2022",
            ),
            Booking::new(
                "City Hotel",
                "01/22/2017",
                "2",
                "2",
                "0",
                "0",
                "NO",
                "FR",
                "Cancelled",
                "09/20/2022",
            ),
            Booking::new(
                "Ibis",
                "09/20/2022",
                "5",
                "2",
                "1",
                "0",
                "YES",
                "DE",
                "Check-In",
                "09/20/2022",
            ),
        ]
    }

    #[test]
    fn test_checkout_date() {
        assert_eq!(checkout_date("09/20/2022", "5").unwrap(), "09/25/2022");
    }

    #[test]
    fn test_checkout_date_crosses_month() {
        assert_eq!(checkout_date("01/30/2017", "4").unwrap(), "02/03/2017");
    }

    #[test]
    fn test_checkout_date_crosses_year() {
        assert_eq!(checkout_date("12/30/2021", "3").unwrap(), "01/02/2022");
    }

    #[test]
    fn test_checkout_date_bad_arrival() {
        let err = checkout_date("not-a-date", "2").unwrap_err();
        assert!(matches!(err, QueryError::BadDate(_)));
    }

    #[test]
    fn test_checkout_date_bad_nights() {
        let err = checkout_date("09/20/2022", "five").unwrap_err();
        assert!(matches!(err, QueryError::BadNights { .. }));
    }

    #[test]
    fn test_width_spans_whole_dataset() {
        let table = reservation_table(&sample_bookings(), "09/20/2022").unwrap();
        // "Resort Hotel" is the longest field even though that booking is
        // not on display.
        assert_eq!(table.width, "Resort Hotel".len());
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_rows_bind_record_values() {
        let table = reservation_table(&sample_bookings(), "01/22/2017").unwrap();
        assert_eq!(table.rows.len(), 2);

        let row = &table.rows[0];
        assert_eq!(row.hotel, "Resort Hotel");
        assert_eq!(row.check_in, "01/22/2017");
        assert_eq!(row.check_out, "01/26/2017");
        assert_eq!(row.adults, "2");
        assert_eq!(row.children, "0");
        assert_eq!(row.babies, "0");
        assert_eq!(row.status, "Check-Out");
    }

    #[test]
    fn test_no_rows_for_unknown_date() {
        let table = reservation_table(&sample_bookings(), "12/25/2019").unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_bad_nights_outside_date_are_ignored() {
        let mut bookings = sample_bookings();
        bookings[1].booked_nights = "two".to_string();
        assert!(reservation_table(&bookings, "09/20/2022").is_ok());
    }

    #[test]
    fn test_render_header_only_when_empty() {
        let text = render_table(&[], "01/22/2017").unwrap();
        assert_eq!(
            text,
            "hotel | check in | check out | adults | children | babies | status"
        );
    }

    #[test]
    fn test_render_centered_cells() {
        let bookings = vec![Booking::new(
            "Ibis", "09/20/2022", "5", "2", "1", "0", "YES", "DE", "Check-In", "09/20/2022",
        )];
        let text = render_table(&bookings, "09/20/2022").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        // Width is 10 ("09/20/2022").
        assert_eq!(lines[0], "  hotel    |  check in  | check out  |   adults   |  children  |   babies   |   status  ");
        assert_eq!(lines[1], "   Ibis    | 09/20/2022 | 09/25/2022 |     2      |     1      |     0      |  Check-In ");
    }
}
