//! Activity listing state for the board page.
//!
//! DESIGN
//! ======
//! The rendered view is derived from the last applied server listing minus a
//! short-lived set of pending removals. Loads are numbered; a response whose
//! generation is older than the newest issued load is dropped so overlapping
//! refetches cannot roll the view back.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::types::ActivityBoard;
use crate::util::avatar::avatar_label;

/// Shown in the list region when a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// A participant hidden after a successful unregister, awaiting a newer load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRemoval {
    pub activity: String,
    pub email: String,
    /// Newest load generation at the time of removal.
    pub since: u64,
}

/// Shared activity list state.
#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    /// Last applied authoritative listing.
    pub board: ActivityBoard,
    pub loading: bool,
    pub error: Option<String>,
    /// Generation of the newest issued load.
    pub generation: u64,
    /// Generation of the listing currently in `board`.
    pub applied: u64,
    pub pending_removals: Vec<PendingRemoval>,
}

/// One participant row as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub avatar: String,
}

/// One activity card as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivitiesState {
    /// Start a new load and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    fn is_stale(&self, generation: u64) -> bool {
        generation < self.generation
    }

    /// Replace the listing with a load result. Returns `false` if the result
    /// was stale and dropped.
    pub fn apply_loaded(&mut self, generation: u64, board: ActivityBoard) -> bool {
        if self.is_stale(generation) {
            return false;
        }
        self.board = board;
        self.applied = generation;
        self.loading = false;
        self.error = None;
        self.pending_removals.retain(|p| p.since >= generation);
        true
    }

    /// Record a failed load. The list region shows the failure; the last
    /// listing is kept for the selection control. Returns `false` if stale.
    pub fn apply_failed(&mut self, generation: u64) -> bool {
        if self.is_stale(generation) {
            return false;
        }
        self.loading = false;
        self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
        true
    }

    /// `aria-busy` value for the list region while a load is in flight.
    pub fn busy_attr(&self) -> &'static str {
        if self.loading { "true" } else { "false" }
    }

    /// True until the first load resolves.
    pub fn awaiting_first_load(&self) -> bool {
        self.applied == 0 && self.error.is_none()
    }

    /// Hide a participant until a load issued after this call is applied.
    pub fn mark_removed(&mut self, activity: &str, email: &str) {
        if self.is_pending(activity, email) {
            return;
        }
        self.pending_removals.push(PendingRemoval {
            activity: activity.to_owned(),
            email: email.to_owned(),
            since: self.generation,
        });
    }

    pub fn is_pending(&self, activity: &str, email: &str) -> bool {
        self.pending_removals
            .iter()
            .any(|p| p.activity == activity && p.email == email)
    }

    /// Activity names for the selection control, in listing order.
    pub fn activity_names(&self) -> Vec<String> {
        self.board.names().map(str::to_owned).collect()
    }

    /// Cards to render, in listing order, with pending removals filtered out.
    pub fn cards(&self) -> Vec<ActivityCardView> {
        self.board
            .iter()
            .map(|entry| ActivityCardView {
                name: entry.name.clone(),
                description: entry.activity.description.clone(),
                schedule: entry.activity.schedule.clone(),
                spots_left: entry.activity.spots_left(),
                participants: entry
                    .activity
                    .participants
                    .iter()
                    .filter(|email| !self.is_pending(&entry.name, email))
                    .map(|email| ParticipantRow { email: email.clone(), avatar: avatar_label(email) })
                    .collect(),
            })
            .collect()
    }
}
