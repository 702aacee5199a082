//! Contact form data and status model.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FolioError, FolioResult};

/// Status text while a request is outstanding
pub const SENDING_MESSAGE: &str = "Sending...";
/// Status text after a successful submission
pub const SUCCESS_MESSAGE: &str = "Thank you! I'll be in touch soon.";
/// Status text for every failure that carries no server-supplied reason
pub const GENERIC_FAILURE_MESSAGE: &str = "Oops! There was a problem submitting your form.";

/// HTTP method a form submits with
///
/// Deserializes case-insensitively, like the HTML `method` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum FormMethod {
    /// Fields travel in the query string
    Get,
    /// Fields travel in the body
    #[default]
    Post,
}

impl FormMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Get => "GET",
            FormMethod::Post => "POST",
        }
    }
}

impl TryFrom<String> for FormMethod {
    type Error = FolioError;

    fn try_from(s: String) -> FolioResult<Self> {
        s.parse()
    }
}

impl std::str::FromStr for FormMethod {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(FormMethod::Get),
            "POST" => Ok(FormMethod::Post),
            other => Err(FolioError::Config(format!(
                "unsupported form method: {}",
                other
            ))),
        }
    }
}

/// Where and how the contact form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEndpoint {
    /// Absolute `action` URL
    pub action: Url,
    /// Submission method
    pub method: FormMethod,
}

impl FormEndpoint {
    /// Parse an endpoint from the form's `action` and `method` attributes
    pub fn parse(action: &str, method: FormMethod) -> FolioResult<Self> {
        let action = Url::parse(action)?;
        match action.scheme() {
            "http" | "https" => Ok(Self { action, method }),
            other => Err(FolioError::Config(format!(
                "form action must be http or https, got {}",
                other
            ))),
        }
    }
}

/// Ordered name/value pairs of a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a field; duplicate names are kept, as a browser would
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Replace the first value for `name`, appending the field if absent
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Empty every value, keeping the field names
    pub fn clear(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    /// `application/x-www-form-urlencoded` encoding of the fields
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Colour family of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Grey, used while sending
    Neutral,
    /// Green confirmation
    Positive,
    /// Red failure
    Negative,
}

impl StatusTone {
    /// CSS colour for this tone
    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "#555",
            StatusTone::Positive => "green",
            StatusTone::Negative => "red",
        }
    }
}

/// What the status line currently says
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request outstanding
    Sending,
    /// Server accepted the submission
    Success,
    /// Submission failed; the message is shown verbatim
    Failure(String),
}

impl SubmissionStatus {
    /// Generic failure with the fixed user-facing message
    pub fn generic_failure() -> Self {
        SubmissionStatus::Failure(GENERIC_FAILURE_MESSAGE.to_string())
    }

    /// Text for the status line
    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Sending => SENDING_MESSAGE,
            SubmissionStatus::Success => SUCCESS_MESSAGE,
            SubmissionStatus::Failure(message) => message,
        }
    }

    /// Colour family; `None` when there is nothing to show
    pub fn tone(&self) -> Option<StatusTone> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(StatusTone::Neutral),
            SubmissionStatus::Success => Some(StatusTone::Positive),
            SubmissionStatus::Failure(_) => Some(StatusTone::Negative),
        }
    }

    /// Whether a request is outstanding
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }
}

/// One server-side validation failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDescriptor {
    /// Human-readable reason
    #[serde(default)]
    pub message: String,
}

/// Body of a rejected submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Validation failures, if the server listed any
    #[serde(default)]
    pub errors: Option<Vec<ErrorDescriptor>>,
}

impl ErrorBody {
    /// Messages joined with `", "`, or `None` if the body lists no errors
    pub fn joined_messages(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|e| !e.is_empty())?;
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escapes_values() {
        let fields = FormFields::new()
            .with("name", "Ada Lovelace")
            .with("message", "hi & bye=1");
        assert_eq!(fields.encode(), "name=Ada+Lovelace&message=hi+%26+bye%3D1");
    }

    #[test]
    fn test_clear_keeps_names() {
        let mut fields = FormFields::new().with("email", "a@b.c").with("message", "hello");
        fields.clear();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("email"), Some(""));
        assert_eq!(fields.encode(), "email=&message=");
    }

    #[test]
    fn test_set_replaces_or_appends() {
        let mut fields = FormFields::new().with("name", "");
        fields.set("name", "Ada");
        fields.set("email", "ada@example.com");
        assert_eq!(fields.get("name"), Some("Ada"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("post".parse::<FormMethod>().unwrap(), FormMethod::Post);
        assert_eq!("GET".parse::<FormMethod>().unwrap(), FormMethod::Get);
        assert!("PATCH".parse::<FormMethod>().is_err());
    }

    #[test]
    fn test_endpoint_rejects_non_http() {
        assert!(FormEndpoint::parse("https://formspree.io/f/abc", FormMethod::Post).is_ok());
        assert!(matches!(
            FormEndpoint::parse("mailto:me@example.com", FormMethod::Post),
            Err(FolioError::Config(_))
        ));
        assert!(matches!(
            FormEndpoint::parse("/contact", FormMethod::Post),
            Err(FolioError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_status_text_and_tone() {
        assert_eq!(SubmissionStatus::Sending.message(), "Sending...");
        assert_eq!(SubmissionStatus::Sending.tone(), Some(StatusTone::Neutral));
        assert_eq!(SubmissionStatus::Success.tone().map(|t| t.color()), Some("green"));
        assert_eq!(
            SubmissionStatus::generic_failure().message(),
            "Oops! There was a problem submitting your form."
        );
        assert_eq!(SubmissionStatus::Idle.tone(), None);
    }

    #[test]
    fn test_error_body_joins_messages() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"errors":[{"message":"Email is required"},{"message":"Message is too short"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.joined_messages().as_deref(),
            Some("Email is required, Message is too short")
        );
    }

    #[test]
    fn test_error_body_without_errors() {
        let body: ErrorBody = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert_eq!(body.joined_messages(), None);
        let empty: ErrorBody = serde_json::from_str(r#"{"errors":[]}"#).unwrap();
        assert_eq!(empty.joined_messages(), None);
    }
}
