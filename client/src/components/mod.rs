//! Reusable UI components shared across pages.

pub mod book_card;
pub mod confirm_dialog;
pub mod layout;
pub mod status_tag;
