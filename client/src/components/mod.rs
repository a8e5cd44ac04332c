//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activity board and read/write shared state from
//! Leptos context providers.

pub mod activity_card;
pub mod activity_list;
pub mod notice_banner;
pub mod signup_form;
