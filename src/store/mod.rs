//! Storage layer for the booking flat file

pub mod flat_file;

pub use flat_file::{DEFAULT_BOOKING_FILE, StoreError, WriteMode, load, save};
