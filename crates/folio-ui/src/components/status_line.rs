//! Form Status Line Component
//!
//! Renders a [`SubmissionStatus`] as one line of coloured text below the
//! contact form. Nothing is rendered while idle.

use dioxus::prelude::*;
use folio_core::SubmissionStatus;

/// Properties for the StatusLine component
#[derive(Clone, PartialEq, Props)]
pub struct StatusLineProps {
    /// Status to display
    pub status: SubmissionStatus,
    /// Element id, for `aria-describedby` on the form
    #[props(default = "form-status".to_string())]
    pub id: String,
}

/// Inline style for a status; empty when idle
pub fn status_style(status: &SubmissionStatus) -> String {
    status
        .tone()
        .map(|tone| format!("color: {};", tone.color()))
        .unwrap_or_default()
}

/// Displays the current submission status
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusLine { status: status() }
/// }
/// ```
#[component]
pub fn StatusLine(props: StatusLineProps) -> Element {
    let text = props.status.message().to_string();
    let style = status_style(&props.status);

    rsx! {
        p {
            id: "{props.id}",
            class: "form-status",
            role: "status",
            "aria-live": "polite",
            style: "{style}",
            "{text}"
        }
    }
}
