//! HTTP handlers, grouped by resource.

pub mod dishes;
pub mod matches;
pub mod photo_swipes;
pub mod photos;
pub mod profile;
pub mod swipes;
