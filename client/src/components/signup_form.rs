//! Signup form: email field plus an activity select fed from the listing.

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
use crate::state::notice::NoticeState;

/// Placeholder option text; its value is empty so `required` rejects it.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[component]
pub fn SignupForm() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let email = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let activity_value = selected.get_untracked();

        #[cfg(feature = "hydrate")]
        crate::net::sync::submit_signup(activity_value, email_value, activities, notice, move || {
            email.set(String::new());
            selected.set(String::new());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (activity_value, email_value, activities, notice);
        }
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        activities
                            .with(ActivitiesState::activity_names)
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
