//! Match lifecycle state machine.
//!
//! A match moves through `pending -> matched -> meetup_confirmed ->
//! completed`, with `cancelled` reachable from any non-terminal state and
//! `completed` also reachable directly from `matched` (feedback can be
//! submitted without confirming the meetup first). `completed` and
//! `cancelled` are terminal.
//!
//! Status changes only happen through explicit caller actions; there are no
//! timeouts on match status itself (only candidate-pool entries expire).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of a dish match, mirroring the `match_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "match_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Matched,
    MeetupConfirmed,
    Completed,
    Cancelled,
}

impl MatchStatus {
    /// The wire/database representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Matched => "matched",
            MatchStatus::MeetupConfirmed => "meetup_confirmed",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status from its database representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(MatchStatus::Pending),
            "matched" => Some(MatchStatus::Matched),
            "meetup_confirmed" => Some(MatchStatus::MeetupConfirmed),
            "completed" => Some(MatchStatus::Completed),
            "cancelled" => Some(MatchStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether no further transitions are allowed from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Cancelled)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the set of valid target statuses reachable from `from`.
///
/// Terminal states return an empty slice because no further transitions
/// are allowed.
pub fn valid_transitions(from: MatchStatus) -> &'static [MatchStatus] {
    use MatchStatus::*;
    match from {
        Pending => &[Matched, Cancelled],
        Matched => &[MeetupConfirmed, Completed, Cancelled],
        MeetupConfirmed => &[Completed, Cancelled],
        Completed | Cancelled => &[],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: MatchStatus, to: MatchStatus) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a state transition, producing [`CoreError::InvalidTransition`]
/// for invalid ones.
pub fn validate_transition(from: MatchStatus, to: MatchStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::MatchStatus::*;
    use super::*;

    // -----------------------------------------------------------------------
    // Valid transitions
    // -----------------------------------------------------------------------

    #[test]
    fn pending_to_matched() {
        assert!(can_transition(Pending, Matched));
    }

    #[test]
    fn matched_to_meetup_confirmed() {
        assert!(can_transition(Matched, MeetupConfirmed));
    }

    #[test]
    fn matched_directly_to_completed() {
        // Feedback without confirming the meetup first.
        assert!(can_transition(Matched, Completed));
    }

    #[test]
    fn meetup_confirmed_to_completed() {
        assert!(can_transition(MeetupConfirmed, Completed));
    }

    #[test]
    fn every_non_terminal_state_can_cancel() {
        for from in [Pending, Matched, MeetupConfirmed] {
            assert!(can_transition(from, Cancelled), "{from} should cancel");
        }
    }

    // -----------------------------------------------------------------------
    // Invalid transitions
    // -----------------------------------------------------------------------

    #[test]
    fn terminal_states_have_no_exits() {
        assert!(valid_transitions(Completed).is_empty());
        assert!(valid_transitions(Cancelled).is_empty());
    }

    #[test]
    fn completed_cannot_confirm_meetup() {
        let err = validate_transition(Completed, MeetupConfirmed).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: Completed,
                to: MeetupConfirmed
            }
        ));
    }

    #[test]
    fn pending_cannot_skip_to_completed() {
        assert!(!can_transition(Pending, Completed));
    }

    #[test]
    fn no_backwards_transitions() {
        assert!(!can_transition(Matched, Pending));
        assert!(!can_transition(MeetupConfirmed, Matched));
    }

    // -----------------------------------------------------------------------
    // Parsing / display
    // -----------------------------------------------------------------------

    #[test]
    fn parse_round_trips_all_statuses() {
        for status in [Pending, Matched, MeetupConfirmed, Completed, Cancelled] {
            assert_eq!(MatchStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(MatchStatus::parse("ghosted"), None);
    }

    #[test]
    fn terminal_flags() {
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Matched.is_terminal());
    }
}
