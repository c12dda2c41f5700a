//! Demo sign-in against a fixed directory of two accounts.

use std::fmt;
use std::time::Duration;
use sha2::{Digest, Sha256};
use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Student, Role::Admin];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Student => "Student",
            Role::Admin => "Admin",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub role: Role,
}

pub trait Authenticator {
    fn authenticate(&self, role: Role, email: &str, password: &str) -> Result<Session, AuthError>;
}

#[derive(Debug, Clone)]
struct Account {
    role: Role,
    name: &'static str,
    email: &'static str,
    password_hash: &'static str,
}

/// The two demo accounts, one per role.
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    accounts: Vec<Account>,
}

impl Default for DemoDirectory {
    fn default() -> Self {
        Self {
            accounts: vec![
                Account {
                    role: Role::Student,
                    name: "John Student",
                    email: "student@demo.com",
                    password_hash: "703b0a3d6ad75b649a28adde7d83c6251da457549263bc7ff45ec709b0a8448b",
                },
                Account {
                    role: Role::Admin,
                    name: "Sarah Admin",
                    email: "admin@demo.com",
                    password_hash: "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9",
                },
            ],
        }
    }
}

impl DemoDirectory {
    pub fn demo_email(&self, role: Role) -> Option<&'static str> {
        self.accounts.iter().find(|a| a.role == role).map(|a| a.email)
    }
}

impl Authenticator for DemoDirectory {
    fn authenticate(&self, role: Role, email: &str, password: &str) -> Result<Session, AuthError> {
        require_fields(email, password)?;
        let email = email.trim();
        let digest = hash_password(password);
        self.accounts
            .iter()
            .find(|a| a.role == role && a.email.eq_ignore_ascii_case(email) && a.password_hash == digest)
            .map(|a| Session { name: a.name.to_string(), email: a.email.to_string(), role })
            .ok_or(AuthError::InvalidCredentials)
    }
}

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password);
    format!("{:x}", hasher.finalize())
}

pub fn require_fields(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        Err(AuthError::MissingFields)
    } else {
        Ok(())
    }
}

/// Checks credentials after `latency`; missing fields are rejected at once.
pub async fn sign_in<A: Authenticator>(
    directory: A,
    role: Role,
    email: String,
    password: String,
    latency: Duration,
) -> Result<Session, AuthError> {
    require_fields(&email, &password)?;
    tokio::time::sleep(latency).await;
    directory.authenticate(role, &email, &password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hashes_match_demo_passwords() {
        assert_eq!(
            hash_password("admin123"),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[test]
    fn admin_signs_in_with_trimmed_mixed_case_email() {
        let session = DemoDirectory::default()
            .authenticate(Role::Admin, "  Admin@Demo.com ", "admin123")
            .unwrap();
        assert_eq!(session.name, "Sarah Admin");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.email, "admin@demo.com");
    }

    #[test]
    fn account_must_match_the_selected_role() {
        let directory = DemoDirectory::default();
        assert_eq!(
            directory.authenticate(Role::Admin, "student@demo.com", "student123"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(directory.authenticate(Role::Student, "student@demo.com", "student123").is_ok());
    }

    #[test]
    fn every_role_has_a_demo_account() {
        let directory = DemoDirectory::default();
        for &role in Role::ALL {
            let email = directory.demo_email(role).unwrap();
            let password = if role == Role::Admin { "admin123" } else { "student123" };
            assert_eq!(directory.authenticate(role, email, password).unwrap().role, role);
        }
    }

    #[test]
    fn wrong_password_and_blank_fields() {
        let directory = DemoDirectory::default();
        assert_eq!(
            directory.authenticate(Role::Student, "student@demo.com", "student12"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(directory.authenticate(Role::Student, "", "x"), Err(AuthError::MissingFields));
        assert_eq!(directory.authenticate(Role::Student, "a@b.c", ""), Err(AuthError::MissingFields));
    }

    #[tokio::test]
    async fn sign_in_fails_fast_on_missing_fields() {
        let started = std::time::Instant::now();
        let result = sign_in(
            DemoDirectory::default(),
            Role::Student,
            String::new(),
            String::new(),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(result, Err(AuthError::MissingFields));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn sign_in_resolves_a_session() {
        let session = sign_in(
            DemoDirectory::default(),
            Role::Student,
            "student@demo.com".to_string(),
            "student123".to_string(),
            Duration::from_millis(1),
        )
        .await
        .unwrap();
        assert_eq!(session.name, "John Student");
    }
}
