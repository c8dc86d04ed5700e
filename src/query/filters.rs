//! Status, date-range and aggregation queries

use crate::models::Booking;
use crate::query::QueryError;

/// Select bookings whose status equals `status` exactly.
///
/// The match is case-sensitive and untrimmed, and input order is preserved.
/// Zero matches fail with [`QueryError::StatusNotFound`]; a status that never
/// occurs in the data is indistinguishable from a misspelled one.
pub fn filter_by_status(bookings: &[Booking], status: &str) -> Result<Vec<Booking>, QueryError> {
    let matched: Vec<Booking> = bookings
        .iter()
        .filter(|b| b.status == status)
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(QueryError::StatusNotFound);
    }

    Ok(matched)
}

/// Select bookings with `date_in <= arrival_date <= date_out`, comparing the
/// dates as plain strings.
///
/// The stored MM/DD/YYYY format does not order correctly across month and
/// day boundaries under string comparison; callers wanting calendar-correct
/// ranges must pass dates in a lexicographically sortable form. An empty
/// result is not an error, and `date_in > date_out` always yields one.
pub fn filter_by_date_range(bookings: &[Booking], date_in: &str, date_out: &str) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.arrival_date.as_str() >= date_in && b.arrival_date.as_str() <= date_out)
        .cloned()
        .collect()
}

/// Sum the children column over bookings matching both `date` and `hotel`
/// exactly.
///
/// Returns 0 when nothing matches. A matching booking whose children field is
/// not an integer fails with [`QueryError::BadChildren`].
pub fn count_children(bookings: &[Booking], date: &str, hotel: &str) -> Result<u32, QueryError> {
    let mut total = 0u32;
    for booking in bookings {
        if booking.arrival_date == date && booking.hotel == hotel {
            let count: u32 =
                booking
                    .children
                    .parse()
                    .map_err(|source| QueryError::BadChildren {
                        value: booking.children.clone(),
                        source,
                    })?;
            total += count;
        }
    }

    Ok(total)
}
