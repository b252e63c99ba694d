//! Request extractors.
//!
//! - [`account_token::AccountToken`] -- Resolves the `CL-X-TOKEN` header to an account.

pub mod account_token;
