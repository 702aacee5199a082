//! Project Card Component
//!
//! Thumbnail, title and blurb for one project, plus the "View project"
//! link that opens the lightbox.

use dioxus::prelude::*;
use folio_core::ProjectSummary;
use folio_ui::{Button, ButtonVariant};

use crate::context::{use_modals, use_reveal};

/// One project in the gallery
///
/// The modal is built from the card's props at click time, so it always
/// shows what the card currently shows.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         reveal_id: "project-0".to_string(),
///         title: "Weather App".to_string(),
///         description: "Forecasts from open data".to_string(),
///         image_url: "img/weather.png".to_string(),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    /// Id used for scroll reveal
    reveal_id: String,
    /// Card heading
    title: String,
    /// Card blurb
    description: String,
    /// Thumbnail source; empty renders a placeholder
    image_url: String,
) -> Element {
    let mut modals = use_modals();
    let mut reveal = use_reveal();
    let class = reveal.class_for(&reveal_id, "project-card");
    let mount_id = reveal_id.clone();

    let open_details = {
        let title = title.clone();
        let description = description.clone();
        let image_url = image_url.clone();
        move |_: ()| {
            let summary = ProjectSummary::new(title.clone(), description.clone(), image_url.clone());
            modals.write().open(summary);
        }
    };

    rsx! {
        article {
            class: "{class}",
            "data-reveal": "{reveal_id}",
            onmounted: move |evt: MountedEvent| reveal.register(&mount_id, &evt.data()),

            if image_url.trim().is_empty() {
                div { class: "project-card__placeholder", "?" }
            } else {
                img {
                    class: "project-card__img",
                    src: "{image_url}",
                    alt: "{title}",
                    "loading": "lazy",
                }
            }

            div { class: "project-card__body",
                h3 { class: "project-card__title", "{title}" }
                p { class: "project-card__description", "{description}" }
                Button {
                    variant: ButtonVariant::Link,
                    class: "view-project-link".to_string(),
                    onclick: open_details,
                    "View project"
                }
            }
        }
    }
}
