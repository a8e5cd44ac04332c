//! Transient message region state for signup feedback.
//!
//! DESIGN
//! ======
//! One slot, one owner. Every `show` bumps `seq`; the auto-hide task carries
//! the `seq` it was scheduled for and only hides that message, so a newer
//! message is never cut short by an older timer.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

/// How long a message stays visible.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Visual style of the message region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message to show, before it is placed in the slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Error }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub text: String,
    pub kind: NoticeKind,
    pub visible: bool,
    pub seq: u64,
}

impl NoticeState {
    /// Place `notice` in the slot and make it visible. Returns its sequence.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.text = notice.text;
        self.kind = notice.kind;
        self.visible = true;
        self.seq
    }

    /// Hide the slot if it still holds message `seq`.
    pub fn hide_if_current(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Class list for the message element.
    pub fn class_name(&self) -> String {
        if self.visible {
            self.kind.class_name().to_owned()
        } else {
            format!("{} hidden", self.kind.class_name())
        }
    }
}
