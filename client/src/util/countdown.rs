//! Payment-deadline countdown.
//!
//! The deadline is server-supplied; the page re-evaluates it once per second
//! against the browser clock. Nothing here decides whether an order expires,
//! it only renders what is left.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use std::time::Duration;

/// How often the payment page re-renders the countdown.
pub const TICK: Duration = Duration::from_secs(1);

/// What the payment page shows for a deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    /// No (parseable) deadline on the order.
    Unknown,
    /// Whole minutes and seconds left.
    Remaining { minutes: u64, seconds: u64 },
    /// The deadline has passed.
    Expired,
}

impl Countdown {
    /// Evaluate a deadline against `now`, both in epoch milliseconds.
    pub fn at(deadline_ms: Option<f64>, now_ms: f64) -> Self {
        let Some(deadline_ms) = deadline_ms.filter(|d| d.is_finite()) else {
            return Self::Unknown;
        };
        let left_ms = deadline_ms - now_ms;
        if left_ms <= 0.0 {
            return Self::Expired;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total_secs = (left_ms / 1000.0).floor() as u64;
        Self::Remaining { minutes: total_secs / 60, seconds: total_secs % 60 }
    }

    /// Seconds left, `None` when the deadline is unknown.
    pub fn remaining_secs(self) -> Option<u64> {
        match self {
            Self::Unknown => None,
            Self::Remaining { minutes, seconds } => Some(minutes * 60 + seconds),
            Self::Expired => Some(0),
        }
    }

    pub fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }

    pub fn text(self) -> String {
        match self {
            Self::Unknown => "Payment deadline unknown".to_owned(),
            Self::Remaining { minutes, seconds } => format!("{minutes} min {seconds} s left to pay"),
            Self::Expired => "Payment timed out, the order will be cancelled".to_owned(),
        }
    }
}

/// Parse a backend timestamp into epoch milliseconds using the browser's
/// `Date` rules (naive timestamps are local time).
pub fn parse_deadline_ms(raw: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let ms = js_sys::Date::parse(raw);
        (!ms.is_nan()).then_some(ms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = raw;
        None
    }
}

/// Browser clock in epoch milliseconds (0 on the server).
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
