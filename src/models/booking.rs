//! Booking record model

use serde::Serialize;

/// Number of fields in a booking record.
pub const FIELD_COUNT: usize = 10;

/// One booking line from the flat file.
///
/// Field values are kept exactly as stored: the numeric columns
/// (`booked_nights`, `adults`, `children`, `babies`) stay as text and the
/// date columns stay in their MM/DD/YYYY form. Loading never coerces; the
/// operations that need a number parse it themselves and report a format
/// error if the value is not one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub hotel: String,
    /// Arrival date, MM/DD/YYYY.
    pub arrival_date: String,
    /// Number of booked nights, integer as text.
    pub booked_nights: String,
    /// Number of adults, integer as text.
    pub adults: String,
    /// Number of children, integer as text.
    pub children: String,
    /// Number of babies, integer as text.
    pub babies: String,
    /// Meal flag or meal code.
    pub meal: String,
    /// Country code.
    pub country: String,
    /// Reservation status, e.g. "Check-Out", "Cancelled".
    pub status: String,
    /// Reservation status date, MM/DD/YYYY.
    pub status_date: String,
}

impl Booking {
    /// Build a booking from its ten fields in storage order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hotel: impl Into<String>,
        arrival_date: impl Into<String>,
        booked_nights: impl Into<String>,
        adults: impl Into<String>,
        children: impl Into<String>,
        babies: impl Into<String>,
        meal: impl Into<String>,
        country: impl Into<String>,
        status: impl Into<String>,
        status_date: impl Into<String>,
    ) -> Self {
        Booking {
            hotel: hotel.into(),
            arrival_date: arrival_date.into(),
            booked_nights: booked_nights.into(),
            adults: adults.into(),
            children: children.into(),
            babies: babies.into(),
            meal: meal.into(),
            country: country.into(),
            status: status.into(),
            status_date: status_date.into(),
        }
    }

    /// The ten fields in storage order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.hotel,
            &self.arrival_date,
            &self.booked_nights,
            &self.adults,
            &self.children,
            &self.babies,
            &self.meal,
            &self.country,
            &self.status,
            &self.status_date,
        ]
    }
}
