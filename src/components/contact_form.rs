//! Contact Form Component
//!
//! Controlled inputs plus a status line. Submission never navigates: the
//! native submit is prevented and the request goes through the form
//! submit controller.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{FormFields, FormSubmitController, FormView, SubmissionStatus};
use folio_ui::{Button, Input, StatusLine, TextArea};

use crate::components::RevealSection;
use crate::context::use_site;
use crate::platform::FetchTransport;

/// Field names, in submission order
const FIELD_NAMES: [&str; 3] = ["name", "email", "message"];

/// Empty field set with every contact field present
fn blank_fields() -> FormFields {
    FIELD_NAMES
        .iter()
        .fold(FormFields::new(), |fields, name| fields.with(*name, ""))
}

/// Form state as seen by the submit controller
#[derive(Clone, Copy)]
struct SignalFormView {
    status: Signal<SubmissionStatus>,
    fields: Signal<FormFields>,
}

impl FormView for SignalFormView {
    fn show_status(&mut self, status: &SubmissionStatus) {
        self.status.set(status.clone());
    }

    fn reset_fields(&mut self) {
        self.fields.write().clear();
    }
}

/// Contact section wrapper
#[component]
pub fn ContactSection() -> Element {
    rsx! {
        RevealSection { id: "contact".to_string(),
            h2 { class: "section__title", "Get in touch" }
            ContactForm {}
        }
    }
}

/// The contact form itself
///
/// Renders nothing when no endpoint is configured.
#[component]
pub fn ContactForm() -> Element {
    let site = use_site();
    let controller = use_hook(|| {
        site.contact_endpoint()
            .map(|endpoint| Rc::new(FormSubmitController::new(FetchTransport, endpoint)))
    });

    let status = use_signal(|| SubmissionStatus::Idle);
    let mut fields = use_signal(blank_fields);

    let Some(controller) = controller else {
        return VNode::empty();
    };
    let action = controller.endpoint().action.to_string();
    let method = controller.endpoint().method.as_str();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let snapshot = fields.read().clone();
        let view = SignalFormView { status, fields };
        let controller = controller.clone();
        spawn(async move {
            controller.submit(snapshot, view).await;
        });
    };

    let value_of = move |name: &str| fields.read().get(name).unwrap_or_default().to_string();
    let sending = status.read().is_pending();

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form",
            action: "{action}",
            method: "{method}",
            "aria-describedby": "form-status",
            onsubmit: onsubmit,

            Input {
                name: "name".to_string(),
                label: "Name".to_string(),
                value: value_of("name"),
                oninput: move |v: String| fields.write().set("name", v),
                required: true,
            }
            Input {
                name: "email".to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                value: value_of("email"),
                oninput: move |v: String| fields.write().set("email", v),
                required: true,
            }
            TextArea {
                name: "message".to_string(),
                label: "Message".to_string(),
                value: value_of("message"),
                oninput: move |v: String| fields.write().set("message", v),
                required: true,
            }

            Button {
                button_type: "submit".to_string(),
                disabled: sending,
                if sending { "Sending..." } else { "Send Message" }
            }

            StatusLine { status: status() }
        }
    }
}
