//! Display formatting for CLI output

use crate::models::Booking;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Booking row for table display
#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "Hotel")]
    hotel: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "Nights")]
    nights: String,
    #[tabled(rename = "Adults")]
    adults: String,
    #[tabled(rename = "Children")]
    children: String,
    #[tabled(rename = "Babies")]
    babies: String,
    #[tabled(rename = "Meal")]
    meal: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Status date")]
    status_date: String,
}

impl From<&Booking> for BookingRow {
    fn from(booking: &Booking) -> Self {
        BookingRow {
            hotel: booking.hotel.clone(),
            arrival: booking.arrival_date.clone(),
            nights: booking.booked_nights.clone(),
            adults: booking.adults.clone(),
            children: booking.children.clone(),
            babies: booking.babies.clone(),
            meal: booking.meal.clone(),
            country: booking.country.clone(),
            status: booking.status.clone(),
            status_date: booking.status_date.clone(),
        }
    }
}

/// Display a list of bookings as a table
pub fn display_booking_list(bookings: &[Booking]) {
    if bookings.is_empty() {
        log::info!("No bookings found.");
        return;
    }

    let rows: Vec<BookingRow> = bookings.iter().map(BookingRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..=5)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}
