pub mod auth;
pub mod booking;
pub mod id;
pub mod session;
pub mod train;

pub use auth::{LoginRequest, LoginResponse, SignUpOutcome, SignUpRequest, SignUpResponse, User};
pub use booking::{Booking, BookingsResponse, SeatNumbers};
pub use session::Session;
pub use train::{AvailabilityResponse, BookSeatsRequest, Train};
