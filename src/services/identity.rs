//! Session and credential logic.
//!
//! Durable identity lives in `users.json`; the active session is one JSON file
//! under the data dir, removed on logout. Passwords are stored as
//! `sha256$<salt-hex>$<digest-hex>` and verified by recomputing the digest.
//! Plain-text password storage is not supported.

use crate::domain::models::{Role, State, User};
use crate::error::AppError;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use uuid::Uuid;

fn session_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("kampusskill")
        .join("session.json"))
}

pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    hash_with_salt(&hex::encode(salt), password)
}

fn hash_with_salt(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    format!("sha256${}${}", salt_hex, hex::encode(hasher.finalize()))
}

pub fn verify_password(stored: &str, password: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("sha256"), Some(salt), Some(_)) => hash_with_salt(salt, password) == stored,
        _ => false,
    }
}

/// Matches a user by email or nim (case-sensitive exact match) and verifies
/// the password. The failure message is identical for unknown identifiers and
/// wrong passwords so accounts cannot be enumerated.
pub fn login(state: &State, identifier: &str, password: &str) -> anyhow::Result<User> {
    let user = state
        .users
        .iter()
        .find(|u| u.email == identifier || u.nim == identifier)
        .filter(|u| verify_password(&u.password_hash, password))
        .ok_or_else(|| AppError::Unauthorized("invalid credentials".to_string()))?;

    let path = session_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(user)?)?;
    Ok(user.clone())
}

/// Removes the session file; returns whether a session existed.
pub fn logout() -> anyhow::Result<bool> {
    let path = session_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}

/// The logged-in user, refreshed against the user collection so a stale
/// session copy never shadows current account data. An unreadable session
/// file means "logged out".
pub fn session_user(state: &State) -> anyhow::Result<Option<User>> {
    let path = session_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    let Ok(session) = serde_json::from_str::<User>(&raw) else {
        return Ok(None);
    };
    Ok(state
        .users
        .iter()
        .find(|u| u.id == session.id)
        .cloned()
        .or(Some(session)))
}

pub fn require_session(state: &State) -> anyhow::Result<User> {
    session_user(state)?.ok_or_else(|| AppError::Unauthorized("login required".to_string()).into())
}

pub fn require_admin(state: &State) -> anyhow::Result<User> {
    let user = require_session(state)?;
    if !user.is_admin() {
        return Err(AppError::Unauthorized("admin access required".to_string()).into());
    }
    Ok(user)
}

/// Creates a new auto-verified student account. Persisting the user collection
/// is the caller's job; nothing is written here and the new user is not
/// logged in.
pub fn register(
    state: &mut State,
    name: &str,
    email: &str,
    nim: &str,
    password: &str,
) -> anyhow::Result<User> {
    validate_name(name)?;
    validate_email(email)?;
    validate_nim(nim)?;
    validate_password(password)?;

    if state.users.iter().any(|u| u.email == email) {
        return Err(AppError::Conflict("email already registered".to_string()).into());
    }
    if state.users.iter().any(|u| u.nim == nim) {
        return Err(AppError::Conflict("nim already registered".to_string()).into());
    }

    let user = User {
        id: format!("user_{}", Uuid::new_v4().simple()),
        name: name.to_string(),
        email: email.to_string(),
        nim: nim.to_string(),
        password_hash: hash_password(password),
        is_verified: true,
        role: Role::Student,
    };
    state.users.push(user.clone());
    Ok(user)
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(AppError::Validation("invalid email format".to_string()));
    }
    Ok(())
}

fn validate_nim(nim: &str) -> Result<(), AppError> {
    if nim.len() < 8 || !nim.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "nim must be all digits and at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < 6 {
        return Err(AppError::Validation(
            "password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{hash_password, validate_email, validate_nim, verify_password};

    #[test]
    fn password_hash_roundtrip() {
        let stored = hash_password("hunter22");
        assert!(stored.starts_with("sha256$"));
        assert!(verify_password(&stored, "hunter22"));
        assert!(!verify_password(&stored, "hunter23"));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        assert_ne!(hash_password("hunter22"), hash_password("hunter22"));
    }

    #[test]
    fn legacy_or_garbage_hash_never_verifies() {
        assert!(!verify_password("hunter22", "hunter22"));
        assert!(!verify_password("md5$aa$bb", "hunter22"));
    }

    #[test]
    fn nim_must_be_numeric_and_long_enough() {
        assert!(validate_nim("12345678").is_ok());
        assert!(validate_nim("1234567").is_err());
        assert!(validate_nim("12345abc").is_err());
    }

    #[test]
    fn email_needs_local_part_and_dotted_domain() {
        assert!(validate_email("a@campus.example").is_ok());
        assert!(validate_email("acampus.example").is_err());
        assert!(validate_email("@campus.example").is_err());
        assert!(validate_email("a@campus").is_err());
    }
}
