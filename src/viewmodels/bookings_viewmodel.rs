// ============================================================================
// BOOKINGS VIEWMODEL - Booking history end states + card data
// ============================================================================

use crate::models::Booking;
use crate::services::ApiError;
use crate::utils::constants::BOOKINGS_FETCH_FALLBACK;
use crate::utils::format::{format_seat_numbers, format_timestamp, short_booking_id};

#[derive(Clone, Debug, PartialEq, Default)]
pub enum BookingsState {
    #[default]
    Loading,
    Failed(String),
    Empty,
    Loaded(Vec<Booking>),
}

impl BookingsState {
    pub fn from_result(result: Result<Vec<Booking>, ApiError>) -> Self {
        match result {
            Ok(bookings) if bookings.is_empty() => BookingsState::Empty,
            Ok(bookings) => BookingsState::Loaded(bookings),
            // Server-provided `error` field
            Err(ApiError::Rejected(message)) => BookingsState::Failed(message),
            Err(e @ ApiError::MissingIdentity) => BookingsState::Failed(e.to_string()),
            Err(_) => BookingsState::Failed(BOOKINGS_FETCH_FALLBACK.to_string()),
        }
    }
}

/// Display strings for one booking card
#[derive(Clone, Debug, PartialEq)]
pub struct BookingCard {
    pub key: String,
    pub train_name: String,
    pub short_id: String,
    pub departure: String,
    pub arrival: String,
    pub seats: String,
}

impl From<&Booking> for BookingCard {
    fn from(booking: &Booking) -> Self {
        Self {
            key: booking.booking_id.clone(),
            train_name: booking.train_name.clone(),
            short_id: short_booking_id(&booking.booking_id),
            departure: format_timestamp(booking.arrival_time_at_source.as_deref()),
            arrival: format_timestamp(booking.arrival_time_at_destination.as_deref()),
            seats: format!(
                "{} ({})",
                booking.number_of_seats,
                format_seat_numbers(booking.seat_numbers.as_ref())
            ),
        }
    }
}
