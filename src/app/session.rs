//! Session handling
//!
//! The AuthProvider equivalent: wraps the client's auth store with the
//! operations the auth pages need. `login` establishes a session,
//! `register` only creates the user record, `logout` clears the store
//! synchronously. Worker threads call these and report back over channels.

use serde_json::json;

use crate::pocketbase::{AuthData, Client, ClientError, UserRecord};

/// Per-frame auth UI state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub error: Option<String>,
    pub loading: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Authenticate with email and password. On success the client's auth store
/// holds the new session and has already notified its listeners.
pub fn login(client: &Client, email: &str, password: &str) -> Result<AuthData, ClientError> {
    client.collection("users").auth_with_password(email, password)
}

/// Create a new user record. Does not establish a session.
pub fn register(
    client: &Client,
    email: &str,
    password: &str,
    password_confirm: &str,
    name: &str,
) -> Result<UserRecord, ClientError> {
    client.collection("users").create(&json!({
        "email": email,
        "password": password,
        "passwordConfirm": password_confirm,
        "name": name,
    }))
}

/// Register and then immediately sign in with the same credentials.
///
/// The error string is what the sign-up page shows: the server's field
/// message for the email when present, a generic message otherwise.
pub fn register_and_login(
    client: &Client,
    email: &str,
    password: &str,
    password_confirm: &str,
    name: &str,
) -> Result<AuthData, String> {
    register(client, email, password, password_confirm, name).map_err(|e| {
        tracing::error!("registration failed: {}", e);
        e.field_message("email")
            .unwrap_or_else(|| "Greška pri registraciji. Pokušajte ponovno.".to_string())
    })?;
    login(client, email, password).map_err(|e| {
        tracing::error!("auto-login after registration failed: {}", e);
        "Greška pri registraciji. Pokušajte ponovno.".to_string()
    })
}

/// Drop the current session. Synchronous, no network call.
pub fn logout(client: &Client) {
    client.auth_store().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_default() {
        let state = SessionState::new();
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_session_state_errors() {
        let mut state = SessionState::new();
        state.set_error("Neispravni podaci za prijavu".to_string());
        assert!(state.error.is_some());
        state.clear_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_logout_clears_store() {
        let client = Client::new("http://127.0.0.1:8090");
        client.auth_store().save(
            "token123".to_string(),
            UserRecord {
                id: "u1".to_string(),
                email: "ana@example.com".to_string(),
                name: "Ana".to_string(),
                created: String::new(),
                updated: String::new(),
            },
        );
        assert!(client.auth_store().is_valid());
        logout(&client);
        assert!(!client.auth_store().is_valid());
        assert!(client.auth_store().record().is_none());
    }
}
