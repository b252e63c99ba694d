//! Account token generation.
//!
//! Tokens are opaque bearer credentials sent by API producers in the
//! [`TOKEN_HEADER`] header. They are generated once at account creation and
//! never change afterwards.

use rand::Rng;

/// Header carrying the account token on inbound data requests.
pub const TOKEN_HEADER: &str = "CL-X-TOKEN";

/// Length of a generated account token (alphanumeric characters).
pub const TOKEN_LENGTH: usize = 48;

/// Generate a new random account token.
pub fn generate_account_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Normalise a raw header value into a lookup token.
///
/// Empty and whitespace-only values yield `None` so they are treated exactly
/// like a missing header.
pub fn normalize_token(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
