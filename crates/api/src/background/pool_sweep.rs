//! Periodic cleanup of expired candidate-pool entries.
//!
//! Spawns a background task that deletes `match_queue` rows whose TTL has
//! lapsed. Purely hygiene: `list_active` already filters on `expires_at`,
//! so matching stays correct even if this job never runs. Runs on a fixed
//! interval using `tokio::time::interval`.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tablematch_db::repositories::CandidateRepo;
use tokio_util::sync::CancellationToken;

/// How often the sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the candidate-pool sweep loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Candidate pool sweep started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Candidate pool sweep stopping");
                break;
            }
            _ = interval.tick() => {
                match CandidateRepo::purge_expired(&pool, Utc::now()).await {
                    Ok(purged) => {
                        if purged > 0 {
                            tracing::info!(purged, "Candidate pool sweep: purged expired entries");
                        } else {
                            tracing::debug!("Candidate pool sweep: nothing to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Candidate pool sweep failed");
                    }
                }
            }
        }
    }
}
