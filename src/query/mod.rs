//! Query functions over an in-memory booking list

pub mod filters;
pub mod report;

use std::num::ParseIntError;
use thiserror::Error;

pub use filters::{count_children, filter_by_date_range, filter_by_status};
pub use report::{HEADERS, ReservationRow, ReservationTable, render_table, reservation_table};

/// Errors related to query operations
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Status is not present in list")]
    StatusNotFound,
    #[error("Invalid children count '{value}': {source}")]
    BadChildren { value: String, source: ParseIntError },
    #[error("Invalid arrival date '{0}'")]
    BadDate(String),
    #[error("Invalid booked nights '{value}': {source}")]
    BadNights { value: String, source: ParseIntError },
}
