//! Project card gallery

mod project_card;
mod project_gallery;

use project_card::ProjectCard;
pub use project_gallery::ProjectGallery;
