//! Data models for bookline

pub mod booking;
pub mod line;

pub use booking::{Booking, FIELD_COUNT};
pub use line::{DELIMITER, LineError, parse_booking, serialize_booking};
