//! Bridges REST calls into shared state signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call the hydrate-only entry points here; each spawns a local
//! task, awaits `net::api`, and applies the result to `ActivitiesState` or
//! `NoticeState`. The outcome mappers are pure so the user-facing behavior
//! of each response can be tested without a browser.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use super::api::ApiError;
use super::types::ApiMessage;
use crate::state::activities::ActivitiesState;
use crate::state::notice::Notice;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use super::api;
#[cfg(feature = "hydrate")]
use crate::state::notice::{NOTICE_DURATION, NoticeState};

pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_ERROR: &str = "Failed to sign up. Please try again.";
pub const REMOVE_FALLBACK_ERROR: &str = "Failed to remove participant";
pub const REMOVE_TRANSPORT_ERROR: &str = "Failed to remove participant. See console for details.";

/// Participant identified by a removal button's data attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

/// Build a removal target only when both attributes are present and non-empty.
pub fn removal_target(activity: Option<String>, email: Option<String>) -> Option<RemovalTarget> {
    let activity = activity.filter(|a| !a.is_empty())?;
    let email = email.filter(|e| !e.is_empty())?;
    Some(RemovalTarget { activity, email })
}

pub fn removal_prompt(target: &RemovalTarget) -> String {
    format!("Remove {} from {}?", target.email, target.activity)
}

/// Ask `confirm` with the removal prompt. `None` when declined; the caller
/// sends nothing and leaves the view alone.
pub fn confirm_removal<C>(target: RemovalTarget, confirm: C) -> Option<RemovalTarget>
where
    C: FnOnce(&str) -> bool,
{
    confirm(&removal_prompt(&target)).then_some(target)
}

/// What the page does after a signup request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupOutcome {
    pub notice: Notice,
    pub auto_hide: bool,
    pub reset_form: bool,
    pub reload: bool,
}

/// One effect of a settled signup, in the order it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupStep {
    ShowNotice,
    ResetForm,
    Reload,
    ScheduleHide,
}

impl SignupOutcome {
    pub fn steps(&self) -> Vec<SignupStep> {
        let mut steps = vec![SignupStep::ShowNotice];
        if self.reset_form {
            steps.push(SignupStep::ResetForm);
        }
        if self.reload {
            steps.push(SignupStep::Reload);
        }
        if self.auto_hide {
            steps.push(SignupStep::ScheduleHide);
        }
        steps
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

pub fn signup_outcome(result: &Result<ApiMessage, ApiError>) -> SignupOutcome {
    match result {
        Ok(body) => SignupOutcome {
            notice: Notice::success(body.message.clone().unwrap_or_default()),
            auto_hide: true,
            reset_form: true,
            reload: true,
        },
        Err(ApiError::Rejected { body, .. }) => SignupOutcome {
            notice: Notice::error(
                non_empty(body.detail.as_ref()).unwrap_or_else(|| SIGNUP_FALLBACK_ERROR.to_owned()),
            ),
            auto_hide: true,
            reset_form: false,
            reload: false,
        },
        Err(ApiError::Transport(_) | ApiError::Decode(_)) => SignupOutcome {
            notice: Notice::error(SIGNUP_TRANSPORT_ERROR),
            auto_hide: false,
            reset_form: false,
            reload: false,
        },
    }
}

/// What the page does after an unregister request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Hide the row and refetch.
    Removed,
    /// Leave the view alone and alert with this text.
    Alert(String),
}

pub fn removal_outcome(result: &Result<ApiMessage, ApiError>) -> RemovalOutcome {
    match result {
        Ok(_) => RemovalOutcome::Removed,
        Err(ApiError::Rejected { body, .. }) => RemovalOutcome::Alert(
            non_empty(body.detail.as_ref())
                .or_else(|| non_empty(body.message.as_ref()))
                .unwrap_or_else(|| REMOVE_FALLBACK_ERROR.to_owned()),
        ),
        Err(ApiError::Transport(_) | ApiError::Decode(_)) => {
            RemovalOutcome::Alert(REMOVE_TRANSPORT_ERROR.to_owned())
        }
    }
}

/// Apply a settled unregister to the listing. Returns `true` when the row
/// was hidden and a refetch should follow.
pub fn apply_removal(state: &mut ActivitiesState, target: &RemovalTarget, outcome: &RemovalOutcome) -> bool {
    match outcome {
        RemovalOutcome::Removed => {
            state.mark_removed(&target.activity, &target.email);
            true
        }
        RemovalOutcome::Alert(_) => false,
    }
}

/// Fetch the listing and apply it, unless a newer load has been issued since.
#[cfg(feature = "hydrate")]
pub fn reload_activities(activities: RwSignal<ActivitiesState>) {
    let mut generation = 0;
    activities.update(|s| generation = s.begin_load());

    leptos::task::spawn_local(async move {
        match api::fetch_activities().await {
            Ok(board) => {
                let mut applied = false;
                activities.update(|s| applied = s.apply_loaded(generation, board));
                if !applied {
                    log::debug!("dropped stale activities load #{generation}");
                }
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                activities.update(|s| {
                    s.apply_failed(generation);
                });
            }
        }
    });
}

/// Submit a signup and report the result in the message region.
///
/// `reset_form` runs only after a successful signup.
#[cfg(feature = "hydrate")]
pub fn submit_signup<F>(
    activity: String,
    email: String,
    activities: RwSignal<ActivitiesState>,
    notice: RwSignal<NoticeState>,
    reset_form: F,
) where
    F: FnOnce() + 'static,
{
    leptos::task::spawn_local(async move {
        let result = api::sign_up(&activity, &email).await;
        if let Err(e) = &result {
            if !e.is_rejection() {
                log::error!("Error signing up: {e}");
            }
        }

        let outcome = signup_outcome(&result);
        let mut reset_form = Some(reset_form);
        let mut seq = 0;
        for step in outcome.steps() {
            match step {
                SignupStep::ShowNotice => notice.update(|n| seq = n.show(outcome.notice.clone())),
                SignupStep::ResetForm => {
                    if let Some(reset) = reset_form.take() {
                        reset();
                    }
                }
                SignupStep::Reload => reload_activities(activities),
                SignupStep::ScheduleHide => {
                    gloo_timers::future::sleep(NOTICE_DURATION).await;
                    notice.update(|n| {
                        n.hide_if_current(seq);
                    });
                }
            }
        }
    });
}

/// Confirm, then unregister the participant. Declining sends nothing.
#[cfg(feature = "hydrate")]
pub fn remove_participant(target: RemovalTarget, activities: RwSignal<ActivitiesState>) {
    let Some(target) = confirm_removal(target, crate::util::dialog::confirm) else {
        return;
    };

    leptos::task::spawn_local(async move {
        let result = api::unregister(&target.activity, &target.email).await;
        if let Err(e) = &result {
            if !e.is_rejection() {
                log::error!("Error removing participant: {e}");
            }
        }

        let outcome = removal_outcome(&result);
        let mut refetch = false;
        activities.maybe_update(|s| {
            refetch = apply_removal(s, &target, &outcome);
            refetch
        });
        if refetch {
            reload_activities(activities);
        } else if let RemovalOutcome::Alert(text) = outcome {
            crate::util::dialog::alert(&text);
        }
    });
}
