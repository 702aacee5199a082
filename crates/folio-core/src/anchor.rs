//! In-page anchor targets.

/// The section an in-page link points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorTarget(String);

impl AnchorTarget {
    /// Parse an `href` of the form `#section-id`
    ///
    /// Anything else (external links, a bare `#`, empty strings) has no
    /// in-page target.
    pub fn parse(href: &str) -> Option<Self> {
        let id = href.trim().strip_prefix('#')?;
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(id.to_string()))
    }

    /// Id of the target element
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnchorTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        let target = AnchorTarget::parse("#gallery").unwrap();
        assert_eq!(target.id(), "gallery");
        assert_eq!(target.to_string(), "#gallery");
    }

    #[test]
    fn test_parse_rejects_non_fragments() {
        assert_eq!(AnchorTarget::parse("#"), None);
        assert_eq!(AnchorTarget::parse(""), None);
        assert_eq!(AnchorTarget::parse("https://example.com/#gallery"), None);
        assert_eq!(AnchorTarget::parse("#two words"), None);
    }
}
