use serde::{Deserialize, Serialize};

use super::id::{deserialize_id, deserialize_or_default};

/// The backend is inconsistent about the shape of `seat_numbers`.
// TODO: drop the extra shapes once the bookings API settles on a list
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum SeatNumbers {
    List(Vec<i64>),
    Single(i64),
    Text(String),
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Booking {
    #[serde(deserialize_with = "deserialize_id")]
    pub booking_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub train_id: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub train_name: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub number_of_seats: u32,
    #[serde(default)]
    pub seat_numbers: Option<SeatNumbers>,
    #[serde(default)]
    pub arrival_time_at_source: Option<String>,
    #[serde(default)]
    pub arrival_time_at_destination: Option<String>,
}

/// `GET /api/bookings/user/{user_id}`, either list or application error
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingsResponse {
    #[serde(default)]
    pub bookings: Option<Vec<Booking>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_with(seats: &str) -> Booking {
        let body = format!(
            r#"{{"booking_id": "b-1", "train_id": 3, "train_name": "Night Mail",
                "number_of_seats": 2, "seat_numbers": {},
                "arrival_time_at_source": "08:00", "arrival_time_at_destination": "12:30"}}"#,
            seats
        );
        serde_json::from_str(&body).unwrap()
    }

    #[test]
    fn seat_numbers_accept_all_three_shapes() {
        assert_eq!(booking_with("[1, 2]").seat_numbers, Some(SeatNumbers::List(vec![1, 2])));
        assert_eq!(booking_with("5").seat_numbers, Some(SeatNumbers::Single(5)));
        assert_eq!(
            booking_with(r#""12,13""#).seat_numbers,
            Some(SeatNumbers::Text("12,13".to_string()))
        );
        assert_eq!(booking_with("null").seat_numbers, None);
    }

    #[test]
    fn error_payload_has_no_bookings() {
        let parsed: BookingsResponse = serde_json::from_str(r#"{"error": "User not found"}"#).unwrap();
        assert_eq!(parsed.bookings, None);
        assert_eq!(parsed.error.as_deref(), Some("User not found"));
    }

    #[test]
    fn null_name_and_seat_count_do_not_fail_the_list() {
        let parsed: BookingsResponse = serde_json::from_str(
            r#"{"bookings": [
                {"booking_id": 1, "train_id": 3, "train_name": null, "number_of_seats": null},
                {"booking_id": 2, "train_id": 4, "train_name": "Coast Line", "number_of_seats": 2}
            ]}"#,
        )
        .unwrap();
        let bookings = parsed.bookings.unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].train_name, "");
        assert_eq!(bookings[0].number_of_seats, 0);
        assert_eq!(bookings[1].train_name, "Coast Line");
    }
}
