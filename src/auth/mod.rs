//! Session-token issuance for the login flow.
//!
//! Tokens are HS256 JWTs carrying the member id with a one-hour expiry.
//! They are never stored server-side; validity is entirely a matter of
//! signature verification.

pub mod jwt;
pub mod types;
