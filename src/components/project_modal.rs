//! Project Lightbox Component
//!
//! Full-viewport overlay showing one project's details. The overlay and
//! the close button both route into the modal controller; the controller
//! decides whether anything happens.

use dioxus::prelude::*;
use folio_core::{ClickTarget, ModalId};
use folio_ui::CloseButton;

use crate::context::{use_modals, use_site};

/// Name of the exit animation declared in the stylesheet
const CLOSING_ANIMATION: &str = "modal-fade-out";

/// Lightbox for modal `id`
///
/// Renders nothing once the controller has removed the instance.
#[component]
pub fn ProjectModal(id: ModalId) -> Element {
    let mut modals = use_modals();
    let site = use_site();

    let Some(instance) = modals.read().get(id).cloned() else {
        return VNode::empty();
    };
    let summary = instance.summary;
    let overlay_class = instance.state.class();

    rsx! {
        div {
            class: "{overlay_class}",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{summary.title}",
            onclick: move |_| {
                modals.write().handle_click(id, ClickTarget::Backdrop);
            },
            onanimationend: move |evt: AnimationEvent| {
                if evt.animation_name() == CLOSING_ANIMATION {
                    modals.write().finish_close(id);
                }
            },

            div {
                class: "modal-content",
                onclick: move |evt| {
                    evt.stop_propagation();
                    modals.write().handle_click(id, ClickTarget::Content);
                },

                CloseButton {
                    onclick: move |_| {
                        modals.write().handle_click(id, ClickTarget::CloseControl);
                    }
                }

                if summary.has_image() {
                    img { class: "modal-content__img", src: "{summary.image_url}", alt: "{summary.title}" }
                }
                h2 { class: "modal-content__title", "{summary.title}" }
                p { class: "modal-content__description", "{summary.description}" }

                if let Some(note) = &site.modal_note {
                    p { class: "modal-content__note", em { "{note}" } }
                }
            }
        }
    }
}
