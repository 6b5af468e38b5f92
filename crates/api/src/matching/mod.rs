//! The match arbiter: turns like events into durable matches.
//!
//! Two structurally similar engines share this module:
//!
//! - [`arbiter`] — dish matching. A like enters the candidate pool and is
//!   scored against every other active candidate for the dish; the best
//!   pairs (capped fan-out) become `matches` rows.
//! - [`photo`] — photo matching. A like counts toward the *pairwise* mutual
//!   like tally between swiper and photo owner; crossing the threshold
//!   creates a `photo_matches` row.
//!
//! Both swallow unique-violation collisions on the canonical pair indexes:
//! when two arbiters race on the same pair, one insert loses and that is
//! "already matched", not an error.

pub mod arbiter;
pub mod photo;

pub use arbiter::{on_dish_like, MatchSummary, SwipeOutcome};
pub use photo::{on_photo_like, PhotoMatchData, PhotoSwipeOutcome};
