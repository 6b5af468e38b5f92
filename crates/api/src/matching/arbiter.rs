//! Dish match arbitration.
//!
//! `on_dish_like` runs after the preference row is written and the pool
//! entry enqueued: it scores the active candidates for the dish, ranks them
//! (score descending, enqueue time ascending), and creates matches for the
//! top candidates. Each candidate's match creation stands alone — a failure
//! for one candidate is logged and the loop continues, and matches already
//! committed are never rolled back.

use serde::Serialize;
use sqlx::PgPool;
use tablematch_core::compatibility;
use tablematch_core::types::DbId;
use tablematch_db::models::candidate::ActiveCandidate;
use tablematch_db::models::profile::{Profile, PublicProfile};
use tablematch_db::repositories::{CandidateRepo, MatchRepo};
use tablematch_events::{EventBus, PlatformEvent, MATCH_CREATED};

use crate::error::{is_unique_violation, AppResult};

/// Cap on matches created by a single like event.
///
/// A like can legitimately fan out to several independent candidates; the
/// cap bounds that fan-out per event. Deliberately a product decision, not
/// a technical one.
pub const MAX_MATCHES_PER_SWIPE: usize = 3;

/// One created match, as returned to the swiping user.
#[derive(Debug, Serialize)]
pub struct MatchSummary {
    pub match_id: DbId,
    pub dish_id: DbId,
    pub other_user: PublicProfile,
    pub compatibility_score: i32,
}

/// Result of evaluating a like against the candidate pool.
#[derive(Debug, Serialize)]
pub struct SwipeOutcome {
    pub matched: bool,
    pub matches: Vec<MatchSummary>,
}

impl SwipeOutcome {
    fn none() -> Self {
        Self {
            matched: false,
            matches: Vec::new(),
        }
    }
}

/// Score and rank candidates for a like event.
///
/// Orders by compatibility score descending, then enqueue time ascending
/// (FIFO fairness on ties), and truncates to the fan-out cap.
fn rank_candidates(
    swiper: compatibility::ProfileView<'_>,
    candidates: Vec<ActiveCandidate>,
) -> Vec<(i32, ActiveCandidate)> {
    let mut scored: Vec<(i32, ActiveCandidate)> = candidates
        .into_iter()
        .map(|c| (compatibility::score(swiper, c.scoring_view()), c))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.enqueued_at.cmp(&b.1.enqueued_at)));
    scored.truncate(MAX_MATCHES_PER_SWIPE);
    scored
}

/// Evaluate a dish like against the current candidate pool.
///
/// The caller has already recorded the preference row and enqueued the pool
/// entry; re-invocation is safe because evaluation always starts from the
/// current pool state.
pub async fn on_dish_like(
    pool: &PgPool,
    bus: &EventBus,
    profile: &Profile,
    dish_id: DbId,
) -> AppResult<SwipeOutcome> {
    let user_id = profile.user_id;

    let candidates = CandidateRepo::list_active(pool, dish_id, user_id, None).await?;
    if candidates.is_empty() {
        return Ok(SwipeOutcome::none());
    }

    let ranked = rank_candidates(profile.scoring_view(), candidates);
    let mut matches = Vec::new();

    for (score, candidate) in ranked {
        // Fast path: the pair may already have a match from an earlier like.
        match MatchRepo::find_between(pool, user_id, candidate.user_id, dish_id).await {
            Ok(Some(_)) => continue,
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, other_user = candidate.user_id, "Match lookup failed");
                continue;
            }
        }

        match MatchRepo::create(pool, user_id, candidate.user_id, dish_id).await {
            Ok(created) => {
                // The match is committed at this point; an eviction failure
                // must not discard it or abort the remaining candidates.
                // Stale pool entries are harmless: find_between and the
                // unique index stop the pair from re-matching.
                if let Err(e) =
                    CandidateRepo::evict_pair(pool, user_id, candidate.user_id, dish_id).await
                {
                    tracing::error!(
                        error = %e,
                        dish_id,
                        other_user = candidate.user_id,
                        "Pool eviction failed after match creation"
                    );
                }

                bus.publish(
                    PlatformEvent::new(MATCH_CREATED)
                        .with_source("match", created.id)
                        .with_actor(user_id)
                        .with_payload(serde_json::json!({
                            "dish_id": dish_id,
                            "user1_id": created.user1_id,
                            "user2_id": created.user2_id,
                            "compatibility_score": score,
                        })),
                );

                tracing::info!(
                    match_id = created.id,
                    dish_id,
                    other_user = candidate.user_id,
                    score,
                    "Match created"
                );

                matches.push(MatchSummary {
                    match_id: created.id,
                    dish_id,
                    other_user: PublicProfile {
                        user_id: candidate.user_id,
                        name: candidate.name.clone(),
                        city: candidate.city.clone(),
                    },
                    compatibility_score: score,
                });
            }
            // Concurrent arbiter won the insert race: already matched.
            Err(e) if is_unique_violation(&e, "uq_matches_pair") => {
                tracing::debug!(
                    dish_id,
                    other_user = candidate.user_id,
                    "Duplicate match collision, treating as already matched"
                );
            }
            // Best-effort fan-out: log and move to the next candidate.
            Err(e) => {
                tracing::error!(
                    error = %e,
                    dish_id,
                    other_user = candidate.user_id,
                    "Match creation failed"
                );
            }
        }
    }

    Ok(SwipeOutcome {
        matched: !matches.is_empty(),
        matches,
    })
}
