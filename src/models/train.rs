use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Train {
    #[serde(deserialize_with = "deserialize_id")]
    pub train_id: String,
    pub train_name: String,
    pub seat_capacity: u32,
}

/// `GET /api/trains/availability`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub response: Vec<Train>,
}

/// `POST /api/train/{train_id}/book`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookSeatsRequest {
    pub no_of_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_availability_with_numeric_ids() {
        let body = r#"{"response": [{"train_id": 7, "train_name": "Express", "seat_capacity": 120}]}"#;
        let parsed: AvailabilityResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response.len(), 1);
        assert_eq!(parsed.response[0].train_id, "7");
        assert_eq!(parsed.response[0].seat_capacity, 120);
    }

    #[test]
    fn missing_response_field_is_empty() {
        let parsed: AvailabilityResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.response.is_empty());
    }
}
