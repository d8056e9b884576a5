// ============================================================================
// USE SESSION HOOK - Session store + the operations that mutate it
// ============================================================================
// Owned once by SessionContextProvider; everything else reads it through
// `use_session_context()`.
// ============================================================================

use yew::prelude::*;

use crate::models::{LoginRequest, SignUpOutcome, SignUpRequest, SignUpResponse};
use crate::services::{ApiClient, ApiError};
use crate::stores::session_store::{self, SessionAction, SessionStore};
use crate::utils::storage::LocalStorage;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseReducerHandle<SessionStore>,
    /// (email, password)
    pub sign_in: Callback<(String, String)>,
    pub sign_up: Callback<SignUpRequest>,
    pub sign_out: Callback<()>,
    /// Forget the last sign-in error and sign-up outcome
    pub dismiss_notices: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_reducer(|| SessionStore::restored(&LocalStorage));

    let sign_in = {
        let state = state.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            state.dispatch(SessionAction::SignInStarted);

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new()
                    .login(&LoginRequest { email, password })
                    .await
                    .and_then(|token| {
                        session_store::establish(token, &LocalStorage).map_err(ApiError::from)
                    });

                match result {
                    Ok(session) => {
                        if let Some(user) = session.user() {
                            log::info!("✅ Signed in as {}", user.username);
                        }
                        state.dispatch(SessionAction::SignedIn(session));
                    }
                    Err(e) => {
                        log::error!("❌ Sign-in failed: {}", e);
                        if matches!(e, ApiError::TokenDecode(_)) {
                            state.dispatch(SessionAction::SignedOut);
                        }
                        state.dispatch(SessionAction::SignInFailed(sign_in_error_message(&e)));
                    }
                }
            });
        })
    };

    let sign_up = {
        let state = state.clone();
        Callback::from(move |request: SignUpRequest| {
            let state = state.clone();
            state.dispatch(SessionAction::SignUpStarted);

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().sign_up(&request).await;
                let outcome = sign_up_outcome(result);
                match &outcome {
                    SignUpOutcome::Success => log::info!("✅ Account created for {}", request.username),
                    SignUpOutcome::Rejected(message) => log::error!("❌ Sign-up rejected: {}", message),
                    SignUpOutcome::NetworkError(message) => log::error!("❌ Sign-up error: {}", message),
                }
                state.dispatch(SessionAction::SignUpFinished(outcome));
            });
        })
    };

    let sign_out = {
        let state = state.clone();
        Callback::from(move |_| {
            session_store::clear(&LocalStorage);
            state.dispatch(SessionAction::SignedOut);
            log::info!("👋 Signed out");
        })
    };

    let dismiss_notices = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SessionAction::NoticesDismissed))
    };

    UseSessionHandle {
        state,
        sign_in,
        sign_up,
        sign_out,
        dismiss_notices,
    }
}

/// Text shown on the sign-in form for a failed attempt
pub fn sign_in_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => message.clone(),
        ApiError::Network(_) => "Could not reach the server. Please try again.".to_string(),
        _ => "Failed to sign in. Please check your credentials.".to_string(),
    }
}

pub fn sign_up_outcome(result: Result<SignUpResponse, ApiError>) -> SignUpOutcome {
    match result {
        Ok(response) if response.success => SignUpOutcome::Success,
        Ok(response) => SignUpOutcome::Rejected(
            response
                .message
                .unwrap_or_else(|| "Signup failed. Please try again.".to_string()),
        ),
        Err(ApiError::Rejected(message)) => SignUpOutcome::Rejected(message),
        Err(e) if e.is_network() => SignUpOutcome::NetworkError(e.to_string()),
        Err(e) => SignUpOutcome::Rejected(e.to_string()),
    }
}
