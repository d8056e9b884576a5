pub mod book_train_viewmodel;
pub mod bookings_viewmodel;
pub mod search_viewmodel;

pub use book_train_viewmodel::{BookingStatus, SeatInput};
pub use bookings_viewmodel::{BookingCard, BookingsState};
pub use search_viewmodel::{SearchForm, SearchState};
