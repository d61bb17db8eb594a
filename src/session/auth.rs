use bevy::prelude::*;
use thiserror::Error;

use crate::model::{Identity, Role};

/// Emitted whenever the signed-in identity changes. Carries the new identity.
#[derive(Event, Debug, Clone)]
pub struct IdentityChanged(pub Option<Identity>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("enter a username")]
    BlankUsername,
    #[error("unknown user '{0}'")]
    UnknownUser(String),
    #[error("wrong password")]
    WrongPassword,
}

struct Account {
    username: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: [Account; 2] = [
    Account {
        username: "admin",
        password: "admin123",
        display_name: "Chef Admin",
        role: Role::Admin,
    },
    Account {
        username: "user",
        password: "user123",
        display_name: "Guest Diner",
        role: Role::User,
    },
];

/// In-process identity provider backed by the demo accounts
#[derive(Resource, Default)]
pub struct AuthProvider {
    current: Option<Identity>,
}

impl AuthProvider {
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn sign_in(&mut self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::BlankUsername);
        }
        let account = DEMO_ACCOUNTS
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;
        if account.password != password {
            return Err(AuthError::WrongPassword);
        }

        let identity = Identity::new(account.username, account.display_name, account.role);
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Returns the identity that was signed out, if any
    pub fn sign_out(&mut self) -> Option<Identity> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_roles() {
        let mut auth = AuthProvider::default();
        assert!(auth.current().is_none());

        let admin = auth.sign_in("admin", "admin123").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(auth.current(), Some(&admin));

        let user = auth.sign_in(" USER ", "user123").unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.username, "user");
    }

    #[test]
    fn test_sign_in_failures_keep_identity() {
        let mut auth = AuthProvider::default();
        auth.sign_in("user", "user123").unwrap();

        assert_eq!(auth.sign_in("", "x"), Err(AuthError::BlankUsername));
        assert_eq!(
            auth.sign_in("nobody", "x"),
            Err(AuthError::UnknownUser("nobody".into()))
        );
        assert_eq!(auth.sign_in("admin", "nope"), Err(AuthError::WrongPassword));
        assert_eq!(auth.current().map(|i| i.role), Some(Role::User));
    }

    #[test]
    fn test_sign_out() {
        let mut auth = AuthProvider::default();
        assert!(auth.sign_out().is_none());
        auth.sign_in("admin", "admin123").unwrap();
        assert_eq!(auth.sign_out().map(|i| i.username), Some("admin".to_string()));
        assert!(auth.current().is_none());
    }
}
