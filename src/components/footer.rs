//! Page footer

use dioxus::prelude::*;

use crate::context::use_site;

/// Closing line under the page content
#[component]
pub fn Footer() -> Element {
    let site = use_site();

    rsx! {
        footer { class: "footer",
            p { "\u{00A9} {site.hero.heading}" }
        }
    }
}
