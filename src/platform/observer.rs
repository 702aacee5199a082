//! IntersectionObserver bridge.
//!
//! The browser calls back with batches of entries. Each entry carrying a
//! `data-reveal` id is forwarded over a channel; the reveal tracker decides
//! what to do with it inside the Dioxus runtime.

use std::rc::Rc;

use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attribute holding the reveal id of an observed element
pub const REVEAL_ATTR: &str = "data-reveal";

/// One intersection change reported by the browser
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Value of the element's `data-reveal` attribute
    pub id: String,
    /// Observed element, for unobserving
    pub element: Element,
    /// Whether the element intersects the viewport
    pub is_intersecting: bool,
    /// Visible fraction of the element
    pub ratio: f64,
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct ObserverInner {
    observer: IntersectionObserver,
    // Dropping the closure invalidates the JS callback
    _callback: EntriesCallback,
}

/// Shared handle to the page's IntersectionObserver
///
/// Creation failures (no IntersectionObserver support) leave the handle
/// inert; see [`RevealObserver::is_active`].
#[derive(Clone)]
pub struct RevealObserver {
    inner: Option<Rc<ObserverInner>>,
}

impl RevealObserver {
    /// Create an observer firing at `threshold` visibility
    pub fn new(threshold: f64, sink: UnboundedSender<Intersection>) -> Self {
        match Self::create(threshold, sink) {
            Ok(inner) => Self {
                inner: Some(Rc::new(inner)),
            },
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                Self { inner: None }
            }
        }
    }

    fn create(threshold: f64, sink: UnboundedSender<Intersection>) -> Result<ObserverInner, JsValue> {
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let element = entry.target();
                let Some(id) = element.get_attribute(REVEAL_ATTR) else {
                    continue;
                };
                let hit = Intersection {
                    id,
                    element,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if sink.unbounded_send(hit).is_err() {
                    tracing::debug!("Reveal receiver gone, dropping intersection");
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(ObserverInner {
            observer,
            _callback: callback,
        })
    }

    /// Whether the browser observer exists
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Start observing `element`
    pub fn observe(&self, element: &Element) {
        if let Some(inner) = &self.inner {
            inner.observer.observe(element);
        }
    }

    /// Stop observing `element`
    pub fn unobserve(&self, element: &Element) {
        if let Some(inner) = &self.inner {
            inner.observer.unobserve(element);
        }
    }
}

impl PartialEq for RevealObserver {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
