//! Message region for signup feedback.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div id="message" class=move || notice.with(NoticeState::class_name) role="status">
            {move || notice.with(|n| n.text.clone())}
        </div>
    }
}
