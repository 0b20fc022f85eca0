//! Transient notice line (success / error / info toast).
//!
//! Each notice carries a sequence number so a delayed auto-dismiss never
//! clears a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

use leptos::prelude::*;

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    seq: u64,
}

impl NoticeState {
    /// Replace the visible notice; returns its sequence number.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice { kind, text: text.into(), seq: self.seq });
        self.seq
    }

    /// Clear the notice if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }
}

/// Show a notice and schedule its dismissal.
pub fn notify(notice: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let text = text.into();
    let mut seq = 0;
    notice.update(|n| seq = n.push(kind, text));
    #[cfg(feature = "hydrate")]
    set_timeout(move || notice.update(|n| n.dismiss(seq)), NOTICE_TTL);
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}
