//! Data model and client-side logic shared by the terpene admin frontend and
//! its launcher backend.
//!
//! Nothing in this crate touches browser APIs, so the reconciliation, selection
//! and citation rules are tested natively.

pub mod citation;
pub mod config;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod selection;
