// ============================================================================
// BOOK TRAIN VIEWMODEL - Seat count + reservation status
// ============================================================================

use crate::services::ApiError;
use crate::utils::constants::BOOKING_FALLBACK;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum BookingStatus {
    #[default]
    Editing,
    Submitting,
    Confirmed,
    Failed(String),
}

impl BookingStatus {
    pub fn from_result<T>(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => BookingStatus::Confirmed,
            Err(ApiError::Rejected(message)) => BookingStatus::Failed(message),
            Err(e @ ApiError::MissingIdentity) => BookingStatus::Failed(e.to_string()),
            Err(_) => BookingStatus::Failed(BOOKING_FALLBACK.to_string()),
        }
    }

    /// Inputs and buttons are disabled while submitting and after success
    pub fn is_locked(&self) -> bool {
        matches!(self, BookingStatus::Submitting | BookingStatus::Confirmed)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BookingStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Seat count typed by the user; anything but a positive integer is ignored
pub fn parse_seat_count(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Raw text of the seat field. The field always shows this text, and only a
/// positive count can be booked.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatInput(String);

impl Default for SeatInput {
    fn default() -> Self {
        Self("1".to_string())
    }
}

impl SeatInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> Option<u32> {
        parse_seat_count(&self.0)
    }

    pub fn can_confirm(&self, status: &BookingStatus) -> bool {
        self.count().is_some() && !status.is_locked()
    }
}
