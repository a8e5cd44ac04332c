//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `activities` owns the listing and its derived view; `notice` owns the
//! signup message region. Both are plain structs wrapped in `RwSignal` context.

pub mod activities;
pub mod notice;
