use serde::{Deserialize, Serialize};

use super::id::{deserialize_id, deserialize_or_default};

/// Identity claims carried in the bearer token payload. Only `id` is required.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a registration attempt, surfaced to the sign-up view
#[derive(Clone, PartialEq, Debug)]
pub enum SignUpOutcome {
    Success,
    Rejected(String),
    NetworkError(String),
}
