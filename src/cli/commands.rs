//! CLI command definitions using clap

use crate::store::{DEFAULT_BOOKING_FILE, WriteMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reporting over semicolon-delimited hotel booking files
#[derive(Parser, Debug)]
#[command(name = "bookline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Booking file to read
    #[arg(short, long, global = true, default_value = DEFAULT_BOOKING_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List bookings, optionally filtered
    List {
        /// Keep only bookings with this exact reservation status
        #[arg(short, long)]
        status: Option<String>,

        /// Start of an arrival-date range (inclusive)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// End of an arrival-date range (inclusive)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Count children arriving on a date at a hotel
    Children {
        /// Arrival date (MM/DD/YYYY)
        date: String,

        /// Hotel name
        hotel: String,
    },

    /// Print the reservation table for an arrival date
    Report {
        /// Arrival date (MM/DD/YYYY)
        date: String,
    },

    /// Write the booking file's records to another file
    Export {
        /// Destination path
        dest: PathBuf,

        /// Write mode (append, overwrite)
        #[arg(short, long, default_value = "overwrite", value_parser = parse_mode)]
        mode: WriteMode,
    },
}

fn parse_mode(s: &str) -> Result<WriteMode, String> {
    s.parse().map_err(|e: crate::store::StoreError| e.to_string())
}
