//! Photo match arbitration: the mutual-like engine.
//!
//! Unlike dish matching there is no scoring or fan-out here. A like feeds
//! the pairwise tally between swiper and photo owner; the tally is the
//! minimum of the two directed like counts, and crossing the threshold
//! creates the (single, global) photo match for the pair.

use serde::Serialize;
use sqlx::PgPool;
use tablematch_core::types::DbId;
use tablematch_db::models::profile::PublicProfile;
use tablematch_db::repositories::{PhotoMatchRepo, PhotoSwipeRepo, ProfileRepo};
use tablematch_events::{EventBus, PlatformEvent, PHOTO_MATCH_CREATED};

use crate::error::{is_unique_violation, AppResult};

/// Mutual likes required in each direction before a pair matches.
pub const MUTUAL_LIKE_THRESHOLD: i64 = 2;

/// Details of a photo match, returned when a swipe fires the threshold.
#[derive(Debug, Serialize)]
pub struct PhotoMatchData {
    pub match_id: DbId,
    pub other_user: Option<PublicProfile>,
    pub mutual_likes_count: i32,
}

/// Result of evaluating a photo like.
#[derive(Debug, Serialize)]
pub struct PhotoSwipeOutcome {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_data: Option<PhotoMatchData>,
}

impl PhotoSwipeOutcome {
    fn no_match() -> Self {
        Self {
            matched: false,
            match_data: None,
        }
    }
}

/// Evaluate a photo like against the pairwise mutual-like tally.
///
/// The caller has already recorded the swipe row and verified the swiper
/// does not own the photo. A pair that already has a photo match reports
/// `matched: false` — the match happened on an earlier swipe, this one
/// just adds to the tally.
pub async fn on_photo_like(
    pool: &PgPool,
    bus: &EventBus,
    swiper_id: DbId,
    owner_id: DbId,
) -> AppResult<PhotoSwipeOutcome> {
    let likes_given = PhotoSwipeRepo::count_likes_on_owner(pool, swiper_id, owner_id).await?;
    let likes_received = PhotoSwipeRepo::count_likes_on_owner(pool, owner_id, swiper_id).await?;
    let mutual = likes_given.min(likes_received);

    if mutual < MUTUAL_LIKE_THRESHOLD {
        return Ok(PhotoSwipeOutcome::no_match());
    }

    if PhotoMatchRepo::find_between(pool, swiper_id, owner_id)
        .await?
        .is_some()
    {
        return Ok(PhotoSwipeOutcome::no_match());
    }

    let created = match PhotoMatchRepo::create(pool, swiper_id, owner_id, mutual as i32).await {
        Ok(m) => m,
        // Concurrent swipe from the other side won the insert race.
        Err(e) if is_unique_violation(&e, "uq_photo_matches_pair") => {
            tracing::debug!(swiper_id, owner_id, "Duplicate photo match collision");
            return Ok(PhotoSwipeOutcome::no_match());
        }
        Err(e) => return Err(e.into()),
    };

    bus.publish(
        PlatformEvent::new(PHOTO_MATCH_CREATED)
            .with_source("photo_match", created.id)
            .with_actor(swiper_id)
            .with_payload(serde_json::json!({
                "user1_id": created.user1_id,
                "user2_id": created.user2_id,
                "mutual_likes_count": created.mutual_likes_count,
            })),
    );

    tracing::info!(
        match_id = created.id,
        swiper_id,
        owner_id,
        mutual_likes = created.mutual_likes_count,
        "Photo match created"
    );

    let other_user = ProfileRepo::get_by_user(pool, owner_id)
        .await?
        .map(|p| p.public());

    Ok(PhotoSwipeOutcome {
        matched: true,
        match_data: Some(PhotoMatchData {
            match_id: created.id,
            other_user,
            mutual_likes_count: created.mutual_likes_count,
        }),
    })
}
