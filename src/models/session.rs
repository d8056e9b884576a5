use super::auth::User;

/// Authentication state. `user` is present iff `token` is present and decoded.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Token and user together, for calls that need both
    pub fn credentials(&self) -> Option<(&str, &User)> {
        Some((self.token.as_deref()?, self.user.as_ref()?))
    }
}
