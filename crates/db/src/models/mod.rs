//! Row structs (`FromRow` + `Serialize`) and request DTOs, one file per entity.

pub mod candidate;
pub mod dish;
pub mod dish_match;
pub mod event;
pub mod feedback;
pub mod food_photo;
pub mod photo_match;
pub mod profile;
pub mod swipe;
pub mod user;
