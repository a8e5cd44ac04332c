//! Activity board page: listing, signup form, and message region.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Server rendering emits the loading placeholder; once
//! hydrated in the browser the page issues the first listing load.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::notice_banner::NoticeBanner;
use crate::components::signup_form::SignupForm;
use crate::state::activities::ActivitiesState;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();

    // Effects only run in the browser, so SSR never fetches.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        crate::net::sync::reload_activities(activities);
        #[cfg(not(feature = "hydrate"))]
        let _ = activities;
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm/>
                <NoticeBanner/>
            </section>
        </main>
    }
}
