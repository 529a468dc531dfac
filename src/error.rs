use thiserror::Error;

/// Domain failures surfaced to the user. Every variant carries a stable code
/// that ends up in the `--json` error envelope; free-form context goes in the
/// message. Storage corruption never appears here; the store recovers from it
/// silently (see `services::store`).
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed input: registration fields, listing fields, image limits.
    #[error("validation error: {0}")]
    Validation(String),

    /// State-dependent rejection: duplicate email/nim, self-rating,
    /// duplicate report, moderation on a terminal listing.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Daily posting limit reached for this provider.
    #[error("daily posting limit reached ({0} listings per day)")]
    QuotaExceeded(usize),

    /// Missing or insufficient session: not logged in, not the owner,
    /// not an admin, or bad credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION",
            AppError::Conflict(_) => "CONFLICT",
            AppError::QuotaExceeded(_) => "QUOTA_EXCEEDED",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_, _) => "NOT_FOUND",
        }
    }
}
