//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod candidate_repo;
pub mod dish_repo;
pub mod dish_swipe_repo;
pub mod event_repo;
pub mod feedback_repo;
pub mod food_photo_repo;
pub mod match_repo;
pub mod photo_match_repo;
pub mod photo_swipe_repo;
pub mod profile_repo;
pub mod user_repo;

pub use candidate_repo::CandidateRepo;
pub use dish_repo::DishRepo;
pub use dish_swipe_repo::DishSwipeRepo;
pub use event_repo::EventRepo;
pub use feedback_repo::FeedbackRepo;
pub use food_photo_repo::FoodPhotoRepo;
pub use match_repo::MatchRepo;
pub use photo_match_repo::PhotoMatchRepo;
pub use photo_swipe_repo::PhotoSwipeRepo;
pub use profile_repo::ProfileRepo;
pub use user_repo::UserRepo;
