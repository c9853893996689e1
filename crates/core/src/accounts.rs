//! Family account registration and login.
//!
//! This is a mock account store: passwords are kept as submitted and the session token is an
//! opaque `mock-jwt-token-<unix millis>` string that nothing verifies.

use std::sync::Arc;

use api_shared::wire::{LoginReq, LoginRes, RegisterReq, RegisterRes};
use chrono::Utc;
use healthassist_types::EmailAddress;

use crate::constants::{REGISTRATION_MESSAGE, SESSION_TOKEN_PREFIX};
use crate::repositories::{NewUser, UserRepository};
use crate::validation::require_all;
use crate::{PortalError, PortalResult};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Mint a session token for a successful login.
pub fn mint_session_token() -> String {
    format!("{SESSION_TOKEN_PREFIX}{}", Utc::now().timestamp_millis())
}

#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new family account.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Validation`] if the family name, email or password is blank, the
    /// email is malformed, or the email is already registered (compared case-insensitively).
    pub fn register(&self, req: RegisterReq) -> PortalResult<RegisterRes> {
        let [family_name, _, _] = require_all(
            [
                req.family_name.as_str(),
                req.email.as_str(),
                req.password.as_str(),
            ],
            "Family name, email and password are required",
        )?;
        let email = EmailAddress::parse(&req.email)
            .map_err(|_| PortalError::Validation("Invalid email address".into()))?;

        let record = self.users.insert(NewUser {
            email,
            password: req.password,
            family_name,
            phone: req.phone.filter(|p| !p.trim().is_empty()),
        })?;

        tracing::info!(user_id = %record.id, "family account registered");
        Ok(RegisterRes {
            message: REGISTRATION_MESSAGE.to_string(),
            user: record.public(),
        })
    }

    /// Check credentials and hand out a session token.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Auth`] for an unknown email or a wrong password. The two cases
    /// are indistinguishable to the caller.
    pub fn login(&self, req: LoginReq) -> PortalResult<LoginRes> {
        let invalid = || PortalError::Auth(INVALID_CREDENTIALS.into());

        let email = EmailAddress::parse(&req.email).map_err(|_| invalid())?;
        let user = self
            .users
            .find_by_email(&email)?
            .filter(|user| user.password == req.password)
            .ok_or_else(|| {
                tracing::warn!("login rejected");
                invalid()
            })?;

        Ok(LoginRes {
            user: user.public(),
            token: mint_session_token(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    fn service() -> AccountService {
        AccountService::new(Arc::new(InMemoryUserRepository::seeded().unwrap()))
    }

    fn registration(email: &str) -> RegisterReq {
        RegisterReq {
            family_name: "Mokoena Family".into(),
            email: email.into(),
            password: "s3cret".into(),
            phone: Some("0820000000".into()),
        }
    }

    #[test]
    fn demo_account_can_log_in() {
        let res = service()
            .login(LoginReq {
                email: "family@example.com".into(),
                password: "password123".into(),
            })
            .unwrap();
        assert_eq!(res.user.id, "1");
        assert_eq!(res.user.family_name, "Smith Family");
        assert!(res.token.starts_with(SESSION_TOKEN_PREFIX));
        assert!(res.token[SESSION_TOKEN_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn register_then_login() {
        let service = service();
        let registered = service.register(registration("mokoena@example.com")).unwrap();
        assert_eq!(registered.message, REGISTRATION_MESSAGE);
        assert_eq!(registered.user.id, "2");

        let logged_in = service
            .login(LoginReq {
                email: "Mokoena@Example.com".into(),
                password: "s3cret".into(),
            })
            .unwrap();
        assert_eq!(logged_in.user, registered.user);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let err = service()
            .register(registration("FAMILY@example.com"))
            .unwrap_err();
        assert!(matches!(err, PortalError::Validation(m) if m == "Email already registered"));
    }

    #[test]
    fn registration_requires_fields_and_valid_email() {
        let service = service();

        let mut blank = registration("new@example.com");
        blank.family_name = " ".into();
        assert!(matches!(
            service.register(blank),
            Err(PortalError::Validation(_))
        ));

        let err = service.register(registration("not-an-email")).unwrap_err();
        assert!(matches!(err, PortalError::Validation(m) if m == "Invalid email address"));
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let service = service();
        for (email, password) in [
            ("family@example.com", "wrong"),
            ("nobody@example.com", "password123"),
            ("garbage", "password123"),
        ] {
            let err = service
                .login(LoginReq {
                    email: email.into(),
                    password: password.into(),
                })
                .unwrap_err();
            assert!(matches!(err, PortalError::Auth(m) if m == INVALID_CREDENTIALS));
        }
    }
}
