//! Folio Core Library
//!
//! State machines behind an interactive portfolio page.
//!
//! ## Overview
//!
//! The page has four interactive pieces. Each is modelled here without any
//! reference to a browser, so the behaviour can be tested natively; the
//! front-end crate binds them to the DOM.
//!
//! - **Anchor navigation**: hero link to an in-page section ([`anchor`])
//! - **Scroll reveal**: sections fade in once ([`reveal`])
//! - **Project lightbox**: `Open -> Closing -> Removed` with a ref-counted
//!   scroll lock ([`modal`], [`scroll`])
//! - **Contact form**: one async request per submit, stale outcomes
//!   discarded ([`submit`], [`form`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ClickTarget, ModalController, ProjectSummary};
//!
//! let mut modals = ModalController::new(body_scroll);
//! let id = modals.open(ProjectSummary::new("Weather App", "Forecasts", "img/w.png"));
//! modals.handle_click(id, ClickTarget::CloseControl);
//! modals.finish_close(id);
//! ```

pub mod anchor;
pub mod config;
pub mod error;
pub mod form;
pub mod modal;
pub mod reveal;
pub mod scroll;
pub mod submit;
pub mod types;

// Re-exports
pub use anchor::AnchorTarget;
pub use config::{ContactConfig, HeroConfig, RevealConfig, SiteConfig};
pub use error::{FolioError, FolioResult};
pub use form::{
    ErrorBody, ErrorDescriptor, FormEndpoint, FormFields, FormMethod, StatusTone,
    SubmissionStatus, GENERIC_FAILURE_MESSAGE, SENDING_MESSAGE, SUCCESS_MESSAGE,
};
pub use modal::{ClickTarget, ModalController, ModalInstance, ModalState};
pub use reveal::{RevealTracker, DEFAULT_REVEAL_THRESHOLD, REVEAL_RATIO_TOLERANCE, VISIBLE_CLASS};
pub use scroll::{ScrollLock, ScrollSurface};
pub use submit::{
    FormSubmitController, FormView, SubmitReport, SubmitRequest, Transport, TransportResponse,
};
pub use types::*;
