//! Hero banner with the call-to-action link.
//!
//! The link is a plain in-page anchor so it still works without script;
//! with script the jump is replaced by a smooth scroll.

use dioxus::prelude::*;
use folio_core::AnchorTarget;

use crate::context::{use_sections, use_site};

/// Top-of-page banner
#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let sections = use_sections();
    let hero = site.hero.clone();
    let href = hero.cta_href.clone();

    let scroll_to_target = move |evt: MouseEvent| {
        evt.prevent_default();

        let Some(target) = AnchorTarget::parse(&href) else {
            tracing::debug!(href = %href, "Hero link has no in-page target");
            return;
        };
        let Some(section) = sections.read().get(target.id()).cloned() else {
            tracing::debug!(%target, "Anchor target not mounted");
            return;
        };

        spawn(async move {
            if let Err(e) = section.scroll_to(ScrollBehavior::Smooth).await {
                tracing::warn!(%target, "Smooth scroll failed: {:?}", e);
            }
        });
    };

    rsx! {
        header { class: "hero",
            div { class: "hero__inner",
                h1 { class: "hero__heading", "{hero.heading}" }
                if !hero.tagline.is_empty() {
                    p { class: "hero__tagline", "{hero.tagline}" }
                }
                a {
                    class: "btn",
                    href: "{hero.cta_href}",
                    onclick: scroll_to_target,
                    "{hero.cta_label}"
                }
            }
        }
    }
}
