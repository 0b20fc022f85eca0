//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clocks, timers,
//! navigation) from page logic so the logic stays testable natively.

pub mod auth;
pub mod countdown;
pub mod format;
pub mod poll;
pub mod storage;
