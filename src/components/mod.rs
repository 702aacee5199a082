//! UI Components for the portfolio page.

pub mod cards;
mod contact_form;
mod footer;
mod hero;
mod project_modal;
mod reveal_section;

pub use cards::ProjectGallery;
pub use contact_form::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use project_modal::ProjectModal;
pub use reveal_section::RevealSection;
