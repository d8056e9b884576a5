// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, map the response.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::CONFIG;
use crate::models::{
    AvailabilityResponse, BookSeatsRequest, Booking, BookingsResponse, LoginRequest,
    LoginResponse, SignUpRequest, SignUpResponse, Train,
};

/// Fields read from an error body, in order of preference
const ERROR_FIELDS: &[&str] = &["message", "error"];
/// A failed booking only surfaces `message`; anything else gets the generic text
const BOOKING_ERROR_FIELDS: &[&str] = &["message"];

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// `POST /signup`
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, ApiError> {
        log::info!("📝 Registering account for {}", request.username);

        let response = Request::post(&self.url("/signup"))
            .json(request)?
            .send()
            .await?;

        if !response.ok() {
            return Err(error_from_response(response, ERROR_FIELDS).await);
        }
        parse_json(response).await
    }

    /// `POST /login`, returns the bearer token
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        log::info!("🔐 Signing in {}", request.email);

        let response = Request::post(&self.url("/login"))
            .json(request)?
            .send()
            .await?;

        if !response.ok() {
            return Err(error_from_response(response, ERROR_FIELDS).await);
        }

        let body: LoginResponse = parse_json(response).await?;
        match (body.token, body.message) {
            (Some(token), _) if !token.is_empty() => Ok(token),
            (_, Some(message)) => Err(ApiError::Rejected(message)),
            _ => Err(ApiError::MissingToken),
        }
    }

    /// `GET /api/trains/availability?source=&destination=`
    pub async fn train_availability(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<Train>, ApiError> {
        log::info!("🚆 Searching trains {} → {}", source, destination);

        let response = Request::get(&self.url("/api/trains/availability"))
            .query([("source", source), ("destination", destination)])
            .send()
            .await?;

        if !response.ok() {
            return Err(error_from_response(response, ERROR_FIELDS).await);
        }

        let body: AvailabilityResponse = parse_json(response).await?;
        log::info!("✅ {} trains found", body.response.len());
        Ok(body.response)
    }

    /// `POST /api/train/{train_id}/book`. The confirmation body is returned as-is.
    pub async fn book_seats(
        &self,
        token: &str,
        train_id: &str,
        no_of_seats: u32,
    ) -> Result<serde_json::Value, ApiError> {
        log::info!("🎫 Booking {} seat(s) on train {}", no_of_seats, train_id);

        let response = Request::post(&self.url(&format!("/api/train/{}/book", train_id)))
            .header("Authorization", &Self::bearer(token))
            .json(&BookSeatsRequest { no_of_seats })?
            .send()
            .await?;

        if !response.ok() {
            return Err(error_from_response(response, BOOKING_ERROR_FIELDS).await);
        }
        parse_json(response).await
    }

    /// `GET /api/bookings/user/{user_id}`
    pub async fn user_bookings(&self, token: &str, user_id: &str) -> Result<Vec<Booking>, ApiError> {
        log::info!("📋 Loading bookings for user {}", user_id);

        let response = Request::get(&self.url(&format!("/api/bookings/user/{}", user_id)))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // `{error}` may come with any status
        match serde_json::from_str::<BookingsResponse>(&text) {
            Ok(body) => bookings_from_body(body, status),
            Err(_) if !(200..300).contains(&status) => Err(ApiError::Http {
                status,
                message: error_message_from_body(&text).unwrap_or(text),
            }),
            Err(e) => Err(ApiError::Parse(e.to_string())),
        }
    }
}

fn bookings_from_body(body: BookingsResponse, status: u16) -> Result<Vec<Booking>, ApiError> {
    if let Some(error) = body.error {
        return Err(ApiError::Rejected(error));
    }
    match body.bookings {
        Some(bookings) => Ok(bookings),
        None if (200..300).contains(&status) => Ok(Vec::new()),
        None => Err(ApiError::Http {
            status,
            message: "no bookings in response".to_string(),
        }),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn error_from_response(response: Response, fields: &[&str]) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    rejection_from_body(status, status_text, &body, fields)
}

/// Turns a non-2xx response into `Rejected` when the body carries one of `fields`
fn rejection_from_body(status: u16, status_text: String, body: &str, fields: &[&str]) -> ApiError {
    match message_from_body(body, fields) {
        Some(message) => ApiError::Rejected(message),
        None => ApiError::Http {
            status,
            message: status_text,
        },
    }
}

/// Reads `message` (or `error`) from a JSON error body
pub fn error_message_from_body(body: &str) -> Option<String> {
    message_from_body(body, ERROR_FIELDS)
}

fn message_from_body(body: &str, fields: &[&str]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    fields
        .iter()
        .find_map(|field| value.get(*field)?.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_without_double_slash() {
        let client = ApiClient::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(client.url("/login"), "http://127.0.0.1:5000/login");
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(ApiClient::bearer("abc"), "Bearer abc");
    }

    #[test]
    fn error_message_prefers_message_field() {
        assert_eq!(
            error_message_from_body(r#"{"message": "Not enough seats", "error": "x"}"#).as_deref(),
            Some("Not enough seats")
        );
        assert_eq!(
            error_message_from_body(r#"{"error": "Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
    }

    #[test]
    fn error_message_absent_for_non_json_or_empty() {
        assert_eq!(error_message_from_body("<html>502</html>"), None);
        assert_eq!(error_message_from_body(r#"{"message": ""}"#), None);
        assert_eq!(error_message_from_body(r#"{"message": 5}"#), None);
    }

    #[test]
    fn booking_failure_ignores_error_field() {
        let error = rejection_from_body(
            401,
            "Unauthorized".to_string(),
            r#"{"error": "jwt expired"}"#,
            BOOKING_ERROR_FIELDS,
        );
        assert_eq!(
            error,
            ApiError::Http {
                status: 401,
                message: "Unauthorized".to_string()
            }
        );
        let status = crate::viewmodels::BookingStatus::from_result::<()>(Err(error));
        assert_eq!(status.error(), Some(crate::utils::constants::BOOKING_FALLBACK));
    }

    #[test]
    fn booking_failure_shows_message_verbatim() {
        let error = rejection_from_body(
            400,
            "Bad Request".to_string(),
            r#"{"message": "Only 2 seats left", "error": "x"}"#,
            BOOKING_ERROR_FIELDS,
        );
        assert_eq!(error, ApiError::Rejected("Only 2 seats left".to_string()));
    }

    #[test]
    fn bookings_error_field_wins() {
        let body = BookingsResponse {
            bookings: None,
            error: Some("User has no access".to_string()),
        };
        assert_eq!(
            bookings_from_body(body, 403),
            Err(ApiError::Rejected("User has no access".to_string()))
        );
    }

    #[test]
    fn bookings_missing_list_is_empty_on_success() {
        let body = BookingsResponse { bookings: None, error: None };
        assert_eq!(bookings_from_body(body, 200), Ok(Vec::new()));
    }
}
