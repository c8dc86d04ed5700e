//! bookline - reporting over semicolon-delimited hotel booking files
//!
//! This library loads hotel booking records from a flat file (one
//! semicolon-delimited record per line), filters them by status or arrival
//! date, aggregates children counts, and renders a fixed-width reservation
//! table. All queries take their records as an explicit slice; there is no
//! shared state between calls.

pub mod cli;
pub mod models;
pub mod query;
pub mod store;

pub use models::{Booking, parse_booking, serialize_booking};
pub use query::{
    QueryError, count_children, filter_by_date_range, filter_by_status, render_table,
    reservation_table,
};
pub use store::{DEFAULT_BOOKING_FILE, StoreError, WriteMode, load, save};
