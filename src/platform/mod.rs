//! Browser bindings for the core state machines.
//!
//! Everything that touches `web_sys`, `gloo` or `wasm_bindgen` lives here;
//! components only see the core traits.

mod body_scroll;
mod observer;
mod transport;

pub use body_scroll::BodyScroll;
pub use observer::{Intersection, RevealObserver};
pub use transport::FetchTransport;
