//! Payment page view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The order snapshot comes from the last fetch or the last action response;
//! the countdown is derived from it and a clock value refreshed every second.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use crate::net::error::ApiError;
use crate::net::types::{Book, Order, PaymentStatus};
use crate::util::countdown::{Countdown, parse_deadline_ms};

#[derive(Clone, Debug, Default)]
pub struct PaymentState {
    pub order: Option<Order>,
    pub book: Option<Book>,
    pub loading: bool,
    pub error: Option<String>,
    /// Why the book summary is missing; the order stays payable.
    pub book_error: Option<String>,
    /// An action (pay/cancel/delivery) is in flight.
    pub submitting: bool,
    pub now_ms: f64,
}

impl PaymentState {
    pub fn finish_book_load(&mut self, result: Result<Book, ApiError>) {
        match result {
            Ok(book) => {
                self.book = Some(book);
                self.book_error = None;
            }
            Err(e) => {
                self.book = None;
                self.book_error = Some(e.user_message("Could not load the book details"));
            }
        }
    }

    pub fn awaiting_payment(&self) -> bool {
        self.order
            .as_ref()
            .is_some_and(|o| o.payment_status == PaymentStatus::Pending)
    }

    /// Pay, cancel and delivery buttons are live only for an unpaid order with
    /// no action already running.
    pub fn actions_enabled(&self) -> bool {
        self.awaiting_payment() && !self.submitting
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown_with(parse_deadline_ms)
    }

    /// Countdown using an explicit timestamp parser.
    pub fn countdown_with(&self, parse: impl Fn(&str) -> Option<f64>) -> Countdown {
        let deadline = self
            .order
            .as_ref()
            .and_then(|o| o.payment_due_at.as_deref())
            .and_then(parse);
        Countdown::at(deadline, self.now_ms)
    }
}
