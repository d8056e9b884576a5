pub mod auth;
pub mod book_train_view;
pub mod bookings_view;
pub mod search_view;

pub use auth::{LoginView, SignUpView};
pub use book_train_view::BookTrainView;
pub use bookings_view::BookingsView;
pub use search_view::SearchView;
