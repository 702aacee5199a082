//! Page section that fades in once scrolled into view.

use dioxus::prelude::*;

use crate::context::{use_reveal, use_sections};

/// `<section>` registered both as an anchor target and for reveal
#[component]
pub fn RevealSection(
    /// Element id; anchors point at it
    id: String,
    /// Extra CSS classes
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let mut reveal = use_reveal();
    let mut sections = use_sections();

    let base = match class.as_deref() {
        Some(extra) => format!("section {}", extra),
        None => "section".to_string(),
    };
    let full_class = reveal.class_for(&id, &base);
    let mount_id = id.clone();

    rsx! {
        section {
            id: "{id}",
            class: "{full_class}",
            "data-reveal": "{id}",
            onmounted: move |evt: MountedEvent| {
                let mounted = evt.data();
                reveal.register(&mount_id, &mounted);
                sections.write().insert(mount_id.clone(), mounted);
            },
            {children}
        }
    }
}
