/// localStorage key holding the raw bearer token
pub const STORAGE_KEY_TOKEN: &str = "token";

/// localStorage key holding the decoded user as JSON (write-only)
pub const STORAGE_KEY_USER: &str = "user";

pub const BOOKINGS_FETCH_FALLBACK: &str = "Failed to fetch bookings. Please try again later.";
pub const BOOKING_FALLBACK: &str = "An error occurred during booking. Please try again.";
pub const SEARCH_FALLBACK: &str = "Could not load trains. Please try again.";
