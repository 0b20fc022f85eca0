//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs every HTTP call through one bearer-token wrapper, `error`
//! classifies failures, and `types` defines the backend DTOs.

pub mod api;
pub mod error;
pub mod types;
