//! Routed pages.

pub mod book_detail;
pub mod books;
pub mod delivery_tasks;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod personal_center;
pub mod publish;
