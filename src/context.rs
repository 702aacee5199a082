//! Page-wide context for Folio.
//!
//! The root component provides the site configuration, the modal
//! controller, the section registry and the reveal machinery; child
//! components reach them through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut modals = use_modals();
//! modals.write().open(summary);
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{ModalController, RevealTracker, SiteConfig};

use crate::platform::{BodyScroll, RevealObserver};

/// Modal controller bound to the document body
pub type PageModals = ModalController<BodyScroll>;

/// Mounted sections keyed by element id, for in-page anchor scrolling
pub type SectionRegistry = HashMap<String, Rc<MountedData>>;

/// Reveal tracker plus the observer feeding it
#[derive(Clone)]
pub struct RevealContext {
    /// Which elements have faded in
    pub tracker: Signal<RevealTracker>,
    /// Browser observer watching the remaining ones
    pub observer: RevealObserver,
}

impl RevealContext {
    /// Watch a freshly mounted element under `id`
    ///
    /// Without a working observer the element is revealed immediately.
    pub fn register(&mut self, id: &str, mounted: &MountedData) {
        if !self.tracker.write().observe(id) {
            return;
        }
        if !self.observer.is_active() {
            self.tracker.write().on_intersection(id, true, 1.0);
            return;
        }
        match mounted.downcast::<web_sys::Element>() {
            Some(element) => self.observer.observe(element),
            None => tracing::debug!(id, "Mounted node is not a DOM element"),
        }
    }

    /// Class list for `id`: `base`, plus `visible` once revealed
    pub fn class_for(&self, id: &str, base: &str) -> String {
        self.tracker.read().class_for(id, base)
    }
}

/// Hook to access the site configuration.
pub fn use_site() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>()
}

/// Hook to access the modal controller.
///
/// Writing to the returned signal re-renders the modal layer.
pub fn use_modals() -> Signal<PageModals> {
    use_context::<Signal<PageModals>>()
}

/// Hook to access the section registry.
pub fn use_sections() -> Signal<SectionRegistry> {
    use_context::<Signal<SectionRegistry>>()
}

/// Hook to access reveal tracking.
pub fn use_reveal() -> RevealContext {
    use_context::<RevealContext>()
}
