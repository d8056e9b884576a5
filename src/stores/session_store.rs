// ============================================================================
// SESSION STORE - Token + decoded user, owned by the session context
// ============================================================================
// `reduce` is pure; persistence happens in the functions below it, which the
// session hook calls before dispatching.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::models::{Session, SignUpOutcome, User};
use crate::utils::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use crate::utils::jwt::{decode_user, JwtError};
use crate::utils::storage::TokenStorage;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionStore {
    pub session: Session,
    /// A sign-in or sign-up request is in flight
    pub pending: bool,
    pub last_error: Option<String>,
    pub sign_up: Option<SignUpOutcome>,
}

pub enum SessionAction {
    SignInStarted,
    SignedIn(Session),
    /// Keeps the current session; a decode failure is dispatched as
    /// `SignedOut` first
    SignInFailed(String),
    SignUpStarted,
    SignUpFinished(SignUpOutcome),
    NoticesDismissed,
    SignedOut,
}

impl SessionStore {
    /// Initial value: whatever session survives in `storage`
    pub fn restored(storage: &impl TokenStorage) -> Self {
        Self {
            session: restore(storage),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SessionAction::SignInStarted => Self {
                pending: true,
                last_error: None,
                ..(*self).clone()
            },
            SessionAction::SignedIn(session) => Self {
                session,
                ..Self::default()
            },
            SessionAction::SignInFailed(message) => Self {
                pending: false,
                last_error: Some(message),
                ..(*self).clone()
            },
            SessionAction::SignUpStarted => Self {
                pending: true,
                sign_up: None,
                ..(*self).clone()
            },
            SessionAction::SignUpFinished(outcome) => Self {
                pending: false,
                sign_up: Some(outcome),
                ..(*self).clone()
            },
            SessionAction::NoticesDismissed => Self {
                last_error: None,
                sign_up: None,
                ..(*self).clone()
            },
            SessionAction::SignedOut => Self::default(),
        };
        Rc::new(next)
    }
}

/// Reads the persisted token. A token that does not decode is removed so the
/// session is never half-authenticated.
pub fn restore(storage: &impl TokenStorage) -> Session {
    let Some(token) = storage.get(STORAGE_KEY_TOKEN) else {
        return Session::anonymous();
    };

    match decode_user(&token) {
        Ok(user) => {
            log::info!("✅ Session restored for {}", user.username);
            Session::authenticated(token, user)
        }
        Err(e) => {
            log::error!("❌ Stored token could not be decoded: {}", e);
            clear(storage);
            Session::anonymous()
        }
    }
}

/// Decodes a freshly issued token and persists it. On decode failure nothing
/// is kept.
pub fn establish(token: String, storage: &impl TokenStorage) -> Result<Session, JwtError> {
    let user = match decode_user(&token) {
        Ok(user) => user,
        Err(e) => {
            clear(storage);
            return Err(e);
        }
    };

    if let Err(e) = storage.set(STORAGE_KEY_TOKEN, &token) {
        log::warn!("⚠️ Token not persisted: {}", e);
    }
    if let Err(e) = storage.set_json(STORAGE_KEY_USER, &user) {
        log::warn!("⚠️ User not persisted: {}", e);
    }

    Ok(Session::authenticated(token, user))
}

/// Removes every persisted trace of the session. Idempotent.
pub fn clear(storage: &impl TokenStorage) {
    storage.remove(STORAGE_KEY_TOKEN);
    storage.remove(STORAGE_KEY_USER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::test_tokens::{token_for, valid_token};
    use crate::utils::storage::MemoryStorage;

    fn signed_in_store() -> Rc<SessionStore> {
        let storage = MemoryStorage::default();
        let session = establish(valid_token(), &storage).unwrap();
        Rc::new(SessionStore::default()).reduce(SessionAction::SignedIn(session))
    }

    #[test]
    fn restore_without_token_is_anonymous() {
        let storage = MemoryStorage::default();
        assert_eq!(restore(&storage), Session::anonymous());
    }

    #[test]
    fn restore_with_valid_token() {
        let token = valid_token();
        let storage = MemoryStorage::with(STORAGE_KEY_TOKEN, &token);
        let session = restore(&storage);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some(token.as_str()));
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("asha"));
    }

    #[test]
    fn restore_keeps_token_carrying_only_an_id() {
        let token = token_for(r#"{"id": 17}"#);
        let storage = MemoryStorage::with(STORAGE_KEY_TOKEN, &token);
        let session = restore(&storage);
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("17"));
        assert_eq!(storage.get(STORAGE_KEY_TOKEN), Some(token));
    }

    #[test]
    fn restore_with_invalid_token_clears_everything() {
        let storage = MemoryStorage::with(STORAGE_KEY_TOKEN, "garbage");
        storage.set(STORAGE_KEY_USER, "{}").unwrap();

        let store = SessionStore::restored(&storage);

        assert!(!store.is_authenticated());
        assert_eq!(store.session.token(), None);
        assert_eq!(store.session.user(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn establish_persists_token_and_user() {
        let storage = MemoryStorage::default();
        let token = valid_token();
        let session = establish(token.clone(), &storage).unwrap();

        assert_eq!(session.token(), Some(token.as_str()));
        assert_eq!(storage.get(STORAGE_KEY_TOKEN), Some(token));
        let user_json = storage.get(STORAGE_KEY_USER).unwrap();
        assert!(user_json.contains("\"username\":\"asha\""));
    }

    #[test]
    fn establish_rejects_undecodable_token() {
        let storage = MemoryStorage::with(STORAGE_KEY_TOKEN, &valid_token());
        let result = establish(token_for(r#"{"sub": "asha"}"#), &storage);
        assert!(result.is_err());
        assert!(storage.is_empty());
    }

    #[test]
    fn sign_out_always_ends_unauthenticated() {
        let anonymous = Rc::new(SessionStore::default()).reduce(SessionAction::SignedOut);
        assert!(!anonymous.is_authenticated());

        let signed_out = signed_in_store().reduce(SessionAction::SignedOut);
        assert!(!signed_out.is_authenticated());
        assert_eq!(signed_out.user(), None);

        let twice = signed_out.reduce(SessionAction::SignedOut);
        assert_eq!(*twice, SessionStore::default());
    }

    #[test]
    fn clear_is_idempotent() {
        let storage = MemoryStorage::default();
        establish(valid_token(), &storage).unwrap();
        clear(&storage);
        clear(&storage);
        assert!(storage.is_empty());
    }

    #[test]
    fn sign_in_lifecycle() {
        let started = Rc::new(SessionStore::default()).reduce(SessionAction::SignInStarted);
        assert!(started.pending);

        let failed = started.reduce(SessionAction::SignInFailed("Invalid credentials".into()));
        assert!(!failed.pending);
        assert!(!failed.is_authenticated());
        assert_eq!(failed.last_error.as_deref(), Some("Invalid credentials"));

        let retried = failed.reduce(SessionAction::SignInStarted);
        assert_eq!(retried.last_error, None);
    }

    #[test]
    fn sign_in_replaces_session_wholesale() {
        let store = signed_in_store();
        assert!(store.is_authenticated());
        assert!(!store.pending);
        assert_eq!(store.last_error, None);
        assert_eq!(store.user().map(|u| u.id.as_str()), Some("17"));
    }

    #[test]
    fn sign_up_does_not_authenticate() {
        let store = Rc::new(SessionStore::default())
            .reduce(SessionAction::SignUpStarted)
            .reduce(SessionAction::SignUpFinished(SignUpOutcome::Success));
        assert!(!store.is_authenticated());
        assert!(!store.pending);
        assert_eq!(store.sign_up, Some(SignUpOutcome::Success));

        let dismissed = store.reduce(SessionAction::NoticesDismissed);
        assert_eq!(dismissed.sign_up, None);
    }
}
