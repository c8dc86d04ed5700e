//! bookline CLI - booking file reports

use anyhow::Result;
use bookline::cli::display::{display_booking_list, error, success};
use bookline::cli::{Cli, Commands};
use bookline::query::{count_children, filter_by_date_range, filter_by_status, render_table};
use bookline::store::{load, save};
use clap::Parser;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List {
            status,
            from,
            to,
            json,
        } => {
            let mut bookings = load(&cli.file)?;

            if let Some(status) = status {
                bookings = filter_by_status(&bookings, &status)?;
            }

            if let (Some(from), Some(to)) = (from, to) {
                bookings = filter_by_date_range(&bookings, &from, &to);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&bookings)?);
            } else {
                display_booking_list(&bookings);
            }
        }

        Commands::Children { date, hotel } => {
            let bookings = load(&cli.file)?;
            let count = count_children(&bookings, &date, &hotel)?;
            success(&format!("{} children arriving {} at {}", count, date, hotel));
        }

        Commands::Report { date } => {
            let bookings = load(&cli.file)?;
            println!("{}", render_table(&bookings, &date)?);
        }

        Commands::Export { dest, mode } => {
            let bookings = load(&cli.file)?;
            save(&bookings, &dest, mode)?;
            success(&format!(
                "Wrote {} bookings to {}",
                bookings.len(),
                dest.display()
            ));
        }
    }

    Ok(())
}
