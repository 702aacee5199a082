//! Core types for Folio

use serde::{Deserialize, Serialize};

/// Identifier for one open modal instance
///
/// Issued by the modal controller in increasing order; never reused
/// within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(pub u64);

impl std::fmt::Display for ModalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "modal_{}", self.0)
    }
}

/// Details of one project as shown on its card and in the lightbox
///
/// Missing fields deserialize as empty strings and render as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Card heading
    #[serde(default)]
    pub title: String,
    /// Short paragraph below the heading
    #[serde(default)]
    pub description: String,
    /// Thumbnail source
    #[serde(default)]
    pub image_url: String,
}

impl ProjectSummary {
    /// Create a summary from its three parts
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    /// Whether the summary carries an image source at all
    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_id_display() {
        assert_eq!(ModalId(7).to_string(), "modal_7");
    }

    #[test]
    fn test_summary_missing_fields_default_to_empty() {
        let summary: ProjectSummary = serde_json::from_str(r#"{"title":"Dashboard"}"#).unwrap();
        assert_eq!(summary.title, "Dashboard");
        assert_eq!(summary.description, "");
        assert!(!summary.has_image());
    }

    #[test]
    fn test_summary_has_image() {
        let summary = ProjectSummary::new("A", "B", "img/a.png");
        assert!(summary.has_image());
        assert!(!ProjectSummary::new("A", "B", "   ").has_image());
    }
}
