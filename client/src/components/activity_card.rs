//! Card for one activity and its participant roster.

use leptos::prelude::*;

use crate::state::activities::{ActivityCardView, ParticipantRow};

/// One activity card. Removal buttons carry `data-activity` / `data-email`
/// and are handled by the delegated listener on the enclosing list.
#[component]
pub fn ActivityCard(card: ActivityCardView) -> impl IntoView {
    let ActivityCardView { name, description, schedule, spots_left, participants } = card;
    let rows = participants
        .into_iter()
        .map(|row| view! { <ParticipantItem activity=name.clone() row=row/> })
        .collect::<Vec<_>>();

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                {format!(" {spots_left} spots left")}
            </p>
            <div class="participants">
                <h5>"Participants"</h5>
                <ul class="participants-list">{rows}</ul>
            </div>
        </div>
    }
}

#[component]
fn ParticipantItem(activity: String, row: ParticipantRow) -> impl IntoView {
    let ParticipantRow { email, avatar } = row;
    view! {
        <li class="participant-item">
            <span class="participant-avatar">{avatar}</span>
            <span class="participant-name">{email.clone()}</span>
            <button
                class="delete-btn"
                type="button"
                data-activity=activity
                data-email=email
                aria-label="Remove participant"
            >
                "✕"
            </button>
        </li>
    }
}
