//! Project Gallery Component
//!
//! Grid of project cards from the site configuration.

use dioxus::prelude::*;

use super::ProjectCard;
use crate::components::RevealSection;
use crate::context::use_site;

/// Gallery section, the hero link's default target
#[component]
pub fn ProjectGallery() -> Element {
    let site = use_site();

    rsx! {
        RevealSection { id: "gallery".to_string(),
            h2 { class: "section__title", "Projects" }

            if site.projects.is_empty() {
                p { class: "section__empty", "Projects coming soon." }
            } else {
                div { class: "project-grid",
                    for (index, project) in site.projects.iter().enumerate() {
                        ProjectCard {
                            key: "{index}",
                            reveal_id: format!("project-{}", index),
                            title: project.title.clone(),
                            description: project.description.clone(),
                            image_url: project.image_url.clone(),
                        }
                    }
                }
            }
        }
    }
}
