pub mod app;
pub mod navbar;
pub mod protected_route;

pub use app::App;
pub use navbar::NavBar;
pub use protected_route::ProtectedRoute;
