//! Document body as a scroll surface.

use folio_core::ScrollSurface;

/// Toggles `overflow` on `document.body`
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyScroll;

impl BodyScroll {
    fn set_overflow(value: &str) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            tracing::warn!("No document body to set overflow on");
            return;
        };

        if let Err(e) = body.style().set_property("overflow", value) {
            tracing::warn!("Failed to set body overflow to {}: {:?}", value, e);
        }
    }
}

impl ScrollSurface for BodyScroll {
    fn lock(&mut self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&mut self) {
        Self::set_overflow("auto");
    }
}
