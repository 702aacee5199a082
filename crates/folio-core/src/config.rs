//! Site configuration.
//!
//! The page content and behaviour knobs live in one JSON document that the
//! front-end embeds at build time:
//!
//! ```json
//! {
//!   "hero": { "heading": "Jane Doe", "cta_href": "#gallery" },
//!   "projects": [{ "title": "Weather App", "description": "...", "image_url": "img/w.png" }],
//!   "contact": { "action": "https://formspree.io/f/xyz", "method": "POST" },
//!   "reveal": { "threshold": 0.1 }
//! }
//! ```

use serde::Deserialize;

use crate::anchor::AnchorTarget;
use crate::error::{FolioError, FolioResult};
use crate::form::{FormEndpoint, FormMethod};
use crate::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::types::ProjectSummary;

/// Hero banner content
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Main heading
    pub heading: String,
    /// Line under the heading
    pub tagline: String,
    /// Call-to-action label
    pub cta_label: String,
    /// Call-to-action link, normally an in-page anchor
    pub cta_href: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            heading: "Portfolio".to_string(),
            tagline: String::new(),
            cta_label: "View my work".to_string(),
            cta_href: "#gallery".to_string(),
        }
    }
}

/// Contact form endpoint as written in the document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactConfig {
    /// Absolute URL the form posts to
    pub action: String,
    /// Submission method
    #[serde(default)]
    pub method: FormMethod,
}

/// Scroll reveal settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that triggers the fade-in
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

/// Everything the page needs to render
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Hero banner
    pub hero: HeroConfig,
    /// Gallery entries, in display order
    pub projects: Vec<ProjectSummary>,
    /// Extra paragraph shown in every project modal
    pub modal_note: Option<String>,
    /// Contact form endpoint; the form is hidden without one
    pub contact: Option<ContactConfig>,
    /// Scroll reveal settings
    pub reveal: RevealConfig,
}

impl SiteConfig {
    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FolioError::Config(format!(
                "reveal threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if let Some(contact) = &self.contact {
            FormEndpoint::parse(&contact.action, contact.method)?;
        }
        if AnchorTarget::parse(&self.hero.cta_href).is_none() {
            tracing::warn!(href = %self.hero.cta_href, "Hero link has no in-page target");
        }
        Ok(())
    }

    /// Parsed contact endpoint, if one is configured
    pub fn contact_endpoint(&self) -> Option<FormEndpoint> {
        let contact = self.contact.as_ref()?;
        FormEndpoint::parse(&contact.action, contact.method).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "hero": { "heading": "Jane Doe", "tagline": "Builder", "cta_href": "#gallery" },
        "projects": [
            { "title": "Weather App", "description": "Forecasts", "image_url": "img/weather.png" },
            { "title": "No Image" }
        ],
        "modal_note": "Concept only.",
        "contact": { "action": "https://formspree.io/f/xyz" },
        "reveal": { "threshold": 0.2 }
    }"##;

    #[test]
    fn test_parse_sample() {
        let config = SiteConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.hero.heading, "Jane Doe");
        assert_eq!(config.hero.cta_label, "View my work");
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.projects[1].image_url, "");
        assert_eq!(config.reveal.threshold, 0.2);

        let endpoint = config.contact_endpoint().unwrap();
        assert_eq!(endpoint.method, FormMethod::Post);
        assert_eq!(endpoint.action.as_str(), "https://formspree.io/f/xyz");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(config.contact_endpoint().is_none());
        assert_eq!(config.reveal.threshold, DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = SiteConfig::from_json(r#"{"reveal":{"threshold":1.5}}"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_action() {
        let err = SiteConfig::from_json(r#"{"contact":{"action":"not a url"}}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidUrl(_)));
    }

    #[test]
    fn test_lowercase_method_is_accepted() {
        let config =
            SiteConfig::from_json(r#"{"contact":{"action":"https://x.io/f","method":"post"}}"#)
                .unwrap();
        assert_eq!(config.contact_endpoint().unwrap().method, FormMethod::Post);

        let config =
            SiteConfig::from_json(r#"{"contact":{"action":"https://x.io/f","method":"Get"}}"#)
                .unwrap();
        assert_eq!(config.contact_endpoint().unwrap().method, FormMethod::Get);
    }

    #[test]
    fn test_rejects_unknown_method() {
        let err =
            SiteConfig::from_json(r#"{"contact":{"action":"https://x.io","method":"PUT"}}"#)
                .unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }
}
