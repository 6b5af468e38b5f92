//! Token validation.
//!
//! Issuing tokens is the external identity provider's job; this module only
//! validates what arrives in the `Authorization` header. `generate_access_token`
//! exists for tests and local tooling.

pub mod jwt;
