use super::*;
use crate::net::types::{Activity, NamedActivity};

fn board(entries: &[(&str, u32, &[&str])]) -> ActivityBoard {
    ActivityBoard(
        entries
            .iter()
            .map(|(name, max, participants)| NamedActivity {
                name: (*name).to_owned(),
                activity: Activity {
                    description: format!("{name} description"),
                    schedule: "Mondays".to_owned(),
                    max_participants: *max,
                    participants: participants.iter().map(|p| (*p).to_owned()).collect(),
                },
            })
            .collect(),
    )
}

fn emails(card: &ActivityCardView) -> Vec<&str> {
    card.participants.iter().map(|p| p.email.as_str()).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_awaits_first_load() {
    let state = ActivitiesState::default();
    assert!(state.awaiting_first_load());
    assert!(state.cards().is_empty());
    assert!(state.activity_names().is_empty());
    assert_eq!(state.generation, 0);
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn begin_load_increments_generation_and_sets_loading() {
    let mut state = ActivitiesState::default();
    assert_eq!(state.begin_load(), 1);
    assert_eq!(state.begin_load(), 2);
    assert!(state.loading);
}

#[test]
fn busy_attr_tracks_in_flight_load() {
    let mut state = ActivitiesState::default();
    assert_eq!(state.busy_attr(), "false");
    let generation = state.begin_load();
    assert_eq!(state.busy_attr(), "true");
    state.apply_loaded(generation, board(&[]));
    assert_eq!(state.busy_attr(), "false");
}

#[test]
fn apply_loaded_replaces_listing() {
    let mut state = ActivitiesState::default();
    let first = state.begin_load();
    assert!(state.apply_loaded(first, board(&[("Chess Club", 12, &["a@x.edu"])])));
    let second = state.begin_load();
    assert!(state.apply_loaded(second, board(&[("Gym Class", 30, &[])])));

    assert_eq!(state.activity_names(), vec!["Gym Class".to_owned()]);
    assert_eq!(state.cards().len(), 1);
    assert!(!state.loading);
    assert!(!state.awaiting_first_load());
    assert_eq!(state.applied, second);
}

#[test]
fn stale_load_is_discarded() {
    let mut state = ActivitiesState::default();
    let older = state.begin_load();
    let newer = state.begin_load();
    assert!(state.apply_loaded(newer, board(&[("New", 5, &[])])));
    assert!(!state.apply_loaded(older, board(&[("Old", 5, &[])])));
    assert_eq!(state.activity_names(), vec!["New".to_owned()]);
}

#[test]
fn stale_failure_is_discarded() {
    let mut state = ActivitiesState::default();
    let older = state.begin_load();
    let newer = state.begin_load();
    assert!(state.apply_loaded(newer, board(&[("Chess Club", 5, &[])])));
    assert!(!state.apply_failed(older));
    assert!(state.error.is_none());
}

#[test]
fn failure_sets_message_and_keeps_options() {
    let mut state = ActivitiesState::default();
    let first = state.begin_load();
    state.apply_loaded(first, board(&[("Chess Club", 5, &[])]));
    let second = state.begin_load();
    assert!(state.apply_failed(second));

    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(!state.loading);
    assert_eq!(state.activity_names(), vec!["Chess Club".to_owned()]);
}

#[test]
fn success_after_failure_clears_error() {
    let mut state = ActivitiesState::default();
    let first = state.begin_load();
    state.apply_failed(first);
    let second = state.begin_load();
    state.apply_loaded(second, board(&[]));
    assert!(state.error.is_none());
}

// =============================================================
// Derived view
// =============================================================

#[test]
fn cards_follow_listing_order_and_derive_spots() {
    let mut state = ActivitiesState::default();
    let generation = state.begin_load();
    state.apply_loaded(
        generation,
        board(&[
            ("Programming Class", 20, &["emma@mergington.edu", "sophia@mergington.edu"]),
            ("Chess Club", 1, &["michael@mergington.edu", "daniel@mergington.edu"]),
        ]),
    );

    let cards = state.cards();
    assert_eq!(cards[0].name, "Programming Class");
    assert_eq!(cards[0].spots_left, 18);
    assert_eq!(cards[1].name, "Chess Club");
    assert_eq!(cards[1].spots_left, -1);
    assert_eq!(cards[1].description, "Chess Club description");
    assert_eq!(cards[1].schedule, "Mondays");
}

#[test]
fn cards_carry_avatar_labels() {
    let mut state = ActivitiesState::default();
    let generation = state.begin_load();
    state.apply_loaded(generation, board(&[("Chess Club", 12, &["john.doe@x.edu", "a@x.edu"])]));

    let cards = state.cards();
    let avatars: Vec<&str> = cards[0].participants.iter().map(|p| p.avatar.as_str()).collect();
    assert_eq!(avatars, vec!["JO", "A"]);
}

// =============================================================
// Pending removals
// =============================================================

#[test]
fn mark_removed_hides_row_immediately() {
    let mut state = ActivitiesState::default();
    let generation = state.begin_load();
    state.apply_loaded(
        generation,
        board(&[
            ("Chess Club", 12, &["a@x.edu", "b@x.edu"]),
            ("Art Club", 12, &["a@x.edu"]),
        ]),
    );

    state.mark_removed("Chess Club", "a@x.edu");

    let cards = state.cards();
    assert_eq!(emails(&cards[0]), vec!["b@x.edu"]);
    // Same email in another activity stays.
    assert_eq!(emails(&cards[1]), vec!["a@x.edu"]);
    // Capacity stays authoritative until the refetch lands.
    assert_eq!(cards[0].spots_left, 10);
}

#[test]
fn mark_removed_is_idempotent() {
    let mut state = ActivitiesState::default();
    state.mark_removed("Chess Club", "a@x.edu");
    state.mark_removed("Chess Club", "a@x.edu");
    assert_eq!(state.pending_removals.len(), 1);
}

#[test]
fn newer_load_clears_pending_removal() {
    let mut state = ActivitiesState::default();
    let first = state.begin_load();
    state.apply_loaded(first, board(&[("Chess Club", 12, &["a@x.edu"])]));
    state.mark_removed("Chess Club", "a@x.edu");

    let refetch = state.begin_load();
    state.apply_loaded(refetch, board(&[("Chess Club", 12, &[])]));

    assert!(state.pending_removals.is_empty());
    assert!(state.cards()[0].participants.is_empty());
    assert_eq!(state.cards()[0].spots_left, 12);
}

#[test]
fn load_issued_before_removal_keeps_pending_entry() {
    let mut state = ActivitiesState::default();
    let in_flight = state.begin_load();
    state.mark_removed("Chess Club", "a@x.edu");

    // Resolves with the participant still listed; the row stays hidden.
    state.apply_loaded(in_flight, board(&[("Chess Club", 12, &["a@x.edu"])]));

    assert!(state.is_pending("Chess Club", "a@x.edu"));
    assert!(state.cards()[0].participants.is_empty());
}

#[test]
fn failed_refetch_keeps_pending_entry() {
    let mut state = ActivitiesState::default();
    let first = state.begin_load();
    state.apply_loaded(first, board(&[("Chess Club", 12, &["a@x.edu"])]));
    state.mark_removed("Chess Club", "a@x.edu");

    let refetch = state.begin_load();
    state.apply_failed(refetch);

    assert!(state.is_pending("Chess Club", "a@x.edu"));
}
