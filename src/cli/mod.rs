//! CLI surface for bookline

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands};
