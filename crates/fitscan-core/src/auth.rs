//! Authentication state domain model.

use serde::{Deserialize, Serialize};

/// Authentication state of the current user.
///
/// Invariants:
/// - `is_guest` implies `email` is absent
/// - `!is_authenticated` implies `!is_guest` and `email` is absent
///
/// The constructors below are the only transitions the session store
/// performs, so every value observable through the store satisfies the
/// invariants. Only one authentication mode is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_guest: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthState {
    /// Anonymous state: not authenticated, not a guest, no email.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Guest login: authenticated without an account.
    pub fn guest() -> Self {
        Self {
            is_authenticated: true,
            is_guest: true,
            email: None,
        }
    }

    /// Email login. The store performs no email format validation; that is
    /// a caller/UI concern.
    pub fn authenticated(email: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            is_guest: false,
            email: Some(email.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous() {
        let auth = AuthState::anonymous();
        assert!(!auth.is_authenticated);
        assert!(!auth.is_guest);
        assert!(auth.email.is_none());
    }

    #[test]
    fn test_guest_has_no_email() {
        let auth = AuthState::guest();
        assert!(auth.is_authenticated);
        assert!(auth.is_guest);
        assert!(auth.email.is_none());
    }

    #[test]
    fn test_authenticated_carries_email() {
        let auth = AuthState::authenticated("x@y.com");
        assert!(auth.is_authenticated);
        assert!(!auth.is_guest);
        assert_eq!(auth.email.as_deref(), Some("x@y.com"));
    }

    #[test]
    fn test_json_round_trip() {
        for auth in [
            AuthState::anonymous(),
            AuthState::guest(),
            AuthState::authenticated("a@b.com"),
        ] {
            let json = serde_json::to_string(&auth).unwrap();
            let restored: AuthState = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, auth);
        }
    }
}
