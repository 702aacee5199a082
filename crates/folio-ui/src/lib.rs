//! Folio UI Components
//!
//! Dioxus components shared by the portfolio page: buttons, form inputs
//! and the form status line.
//!
//! ## Design Notes
//!
//! - Light page, dark text, one accent colour for interactive elements
//! - Form inputs are controlled: the caller owns the value signal
//! - Status colours come from [`folio_core::StatusTone`], not from CSS

pub mod components;

pub use components::*;
