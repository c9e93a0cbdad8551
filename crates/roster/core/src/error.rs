//! Errors raised while turning raw form input into domain values.
//!
//! Numeric fields never fail (they are coerced), so the only rejections are
//! missing text and malformed dates.

use thiserror::Error;

/// Form fields that can be rejected during validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputField {
    Name,
    Role,
    Country,
    Opponent,
    Date,
}

/// Validation failures for player and record forms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    MissingField(InputField),

    #[error("invalid match date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}
