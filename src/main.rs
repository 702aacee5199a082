#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod platform;
mod theme;

fn main() {
    // The web launcher may already have installed a subscriber
    let _ = dioxus::logger::init(tracing::Level::INFO);

    tracing::info!("Starting folio");

    dioxus::launch(app::App);
}
