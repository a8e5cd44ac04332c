//! Activities region with a single delegated click listener.
//!
//! DESIGN
//! ======
//! Cards are rebuilt from `ActivitiesState::cards` on every change, so row
//! buttons carry identifying data attributes instead of per-row closures and
//! one listener on `#activities-list` resolves the clicked button.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::state::activities::ActivitiesState;

#[component]
pub fn ActivityList() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = clicked_removal_target(&ev) {
                crate::net::sync::remove_participant(target, activities);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            id="activities-list"
            aria-busy=move || activities.with(ActivitiesState::busy_attr)
            on:click=on_click
        >
            {move || {
                let state = activities.get();
                if let Some(error) = state.error.clone() {
                    return view! { <p>{error}</p> }.into_any();
                }
                if state.awaiting_first_load() {
                    return view! { <p>"Loading activities..."</p> }.into_any();
                }
                state
                    .cards()
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

/// Resolve the `.delete-btn` at or above the click target.
#[cfg(feature = "hydrate")]
fn clicked_removal_target(ev: &leptos::ev::MouseEvent) -> Option<crate::net::sync::RemovalTarget> {
    use wasm_bindgen::JsCast as _;

    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = element.closest(".delete-btn").ok().flatten()?;
    crate::net::sync::removal_target(button.get_attribute("data-activity"), button.get_attribute("data-email"))
}
