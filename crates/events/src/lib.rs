//! tablematch event infrastructure.
//!
//! The matching core does not talk to notification transports directly; it
//! publishes [`PlatformEvent`]s (`match.created`, `photo_match.created`)
//! on the [`EventBus`], and external collaborators subscribe:
//!
//! - [`EventPersistence`] — background service that durably writes every
//!   event to the `events` table.
//! - push/chat delivery — out of scope here; consumers hold a
//!   `bus.subscribe()` receiver.

pub mod bus;
pub mod persistence;

pub use bus::{EventBus, PlatformEvent};
pub use persistence::EventPersistence;

/// Event published when a dish match is created.
pub const MATCH_CREATED: &str = "match.created";

/// Event published when a photo match is created.
pub const PHOTO_MATCH_CREATED: &str = "photo_match.created";
