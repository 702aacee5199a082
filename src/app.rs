use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{ModalController, ModalId, RevealTracker, SiteConfig};
use futures::StreamExt;

use crate::components::{ContactSection, Footer, Hero, ProjectGallery, ProjectModal};
use crate::context::{PageModals, RevealContext, SectionRegistry};
use crate::platform::{BodyScroll, Intersection, RevealObserver};
use crate::theme::GLOBAL_STYLES;

/// Page content, embedded at build time
const SITE_JSON: &str = include_str!("../assets/site.json");

/// Parse the embedded configuration, falling back to defaults
fn load_site() -> SiteConfig {
    match SiteConfig::from_json(SITE_JSON) {
        Ok(site) => {
            tracing::info!(projects = site.projects.len(), "Loaded site configuration");
            site
        }
        Err(e) => {
            tracing::error!("Invalid site configuration, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

/// Root application component.
///
/// Provides global styles and page context, renders the page sections,
/// and renders every open project modal last so it sits on top.
#[component]
pub fn App() -> Element {
    let site = use_context_provider(|| Rc::new(load_site()));

    let modals: Signal<PageModals> = use_signal(|| ModalController::new(BodyScroll));
    let sections: Signal<SectionRegistry> = use_signal(HashMap::new);
    use_context_provider(|| modals);
    use_context_provider(|| sections);

    // Reveal: the observer forwards intersections, the tracker decides
    let threshold = site.reveal.threshold;
    let mut tracker = use_signal(|| RevealTracker::new(threshold));
    let observer = use_hook(|| {
        let (tx, mut rx) = futures::channel::mpsc::unbounded::<Intersection>();
        let observer = RevealObserver::new(threshold, tx);
        let unobserver = observer.clone();
        spawn(async move {
            while let Some(hit) = rx.next().await {
                let revealed = tracker
                    .write()
                    .on_intersection(&hit.id, hit.is_intersecting, hit.ratio);
                if revealed {
                    unobserver.unobserve(&hit.element);
                }
            }
        });
        observer
    });
    use_context_provider(|| RevealContext { tracker, observer });

    let open_modals: Vec<ModalId> = modals.read().instances().iter().map(|m| m.id).collect();

    rsx! {
        style { {GLOBAL_STYLES} }
        Hero {}
        main { class: "page",
            ProjectGallery {}
            if site.contact.is_some() {
                ContactSection {}
            }
        }
        Footer {}
        for id in open_modals {
            ProjectModal { key: "{id}", id: id }
        }
    }
}
