//! Application and page view state.
//!
//! DESIGN
//! ======
//! `auth` and `notice` are provided app-wide as `RwSignal` contexts; the rest
//! are page-local snapshots of the last fetch, replaced on every reload.

pub mod auth;
pub mod books;
pub mod delivery;
pub mod notice;
pub mod payment;
pub mod personal;
