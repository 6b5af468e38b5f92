//! Pure domain logic for tablematch.
//!
//! This crate has zero internal dependencies so the scorer and the match
//! state machine can be used by the API, repositories, and any future
//! worker or CLI tooling without dragging in sqlx or axum.

pub mod compatibility;
pub mod error;
pub mod lifecycle;
pub mod types;
