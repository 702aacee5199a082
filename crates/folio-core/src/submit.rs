//! Asynchronous contact-form submission.
//!
//! One [`FormSubmitController::submit`] call drives one request:
//! `Sending` is rendered immediately, the request suspends on the
//! [`Transport`], and the outcome is mapped to a status message when it
//! returns. Each call takes a fresh token; an outcome whose token has been
//! superseded by a later submission is dropped without touching the view.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::error::FolioResult;
use crate::form::{ErrorBody, FormEndpoint, FormFields, FormMethod, SubmissionStatus};

/// Outbound request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    /// HTTP method
    pub method: FormMethod,
    /// Full URL, including the query string for `GET`
    pub url: String,
    /// Urlencoded body for `POST`
    pub body: Option<String>,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

impl SubmitRequest {
    /// Build the request a form submission sends to `endpoint`
    pub fn for_form(endpoint: &FormEndpoint, fields: &FormFields) -> Self {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        let encoded = fields.encode();

        match endpoint.method {
            FormMethod::Get => {
                let mut url = endpoint.action.clone();
                url.set_query(if encoded.is_empty() { None } else { Some(encoded.as_str()) });
                Self {
                    method: FormMethod::Get,
                    url: url.into(),
                    body: None,
                    headers,
                }
            }
            FormMethod::Post => {
                headers.push((
                    "Content-Type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                ));
                Self {
                    method: FormMethod::Post,
                    url: endpoint.action.to_string(),
                    body: Some(encoded),
                    headers,
                }
            }
        }
    }

    /// First header value with a case-insensitive name match
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response as seen by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body text
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a submission request somewhere
///
/// The browser implementation uses `fetch`; tests use scripted fakes.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request`; `Err` means no usable response arrived
    async fn send(&self, request: SubmitRequest) -> FolioResult<TransportResponse>;
}

/// The status display and form inputs a submission reports to
pub trait FormView {
    /// Show `status` on the status line
    fn show_status(&mut self, status: &SubmissionStatus);
    /// Clear every input of the form
    fn reset_fields(&mut self);
}

/// What became of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// The outcome was rendered
    Applied(SubmissionStatus),
    /// A newer submission was started before this one finished
    Superseded,
}

/// Drives contact-form submissions against one endpoint
#[derive(Debug)]
pub struct FormSubmitController<T> {
    transport: T,
    endpoint: FormEndpoint,
    issued: AtomicU64,
    status: Mutex<SubmissionStatus>,
}

impl<T: Transport> FormSubmitController<T> {
    /// Create a controller for `endpoint`
    pub fn new(transport: T, endpoint: FormEndpoint) -> Self {
        Self {
            transport,
            endpoint,
            issued: AtomicU64::new(0),
            status: Mutex::new(SubmissionStatus::Idle),
        }
    }

    /// Submit `fields` once and render the outcome on `view`
    pub async fn submit<V: FormView>(&self, fields: FormFields, mut view: V) -> SubmitReport {
        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply(&mut view, SubmissionStatus::Sending);

        let request = SubmitRequest::for_form(&self.endpoint, &fields);
        tracing::info!(token, method = request.method.as_str(), url = %request.url, "Submitting contact form");

        let outcome = self.transport.send(request).await;

        if self.issued.load(Ordering::SeqCst) != token {
            tracing::debug!(token, "Discarding outcome of superseded submission");
            return SubmitReport::Superseded;
        }

        let status = match outcome {
            Ok(response) if response.is_success() => {
                tracing::info!(token, status = response.status, "Contact form accepted");
                SubmissionStatus::Success
            }
            Ok(response) => {
                tracing::warn!(token, status = response.status, "Contact form rejected");
                rejection_status(&response.body)
            }
            Err(e) => {
                tracing::error!(token, "Contact form submission failed: {}", e);
                SubmissionStatus::generic_failure()
            }
        };

        self.apply(&mut view, status.clone());
        if status == SubmissionStatus::Success {
            view.reset_fields();
        }
        SubmitReport::Applied(status)
    }

    /// Last status rendered by this controller
    pub fn status(&self) -> SubmissionStatus {
        self.status.lock().clone()
    }

    /// Whether the latest submission is still outstanding
    pub fn is_pending(&self) -> bool {
        self.status.lock().is_pending()
    }

    /// Transport requests go through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Endpoint this controller submits to
    pub fn endpoint(&self) -> &FormEndpoint {
        &self.endpoint
    }

    fn apply<V: FormView>(&self, view: &mut V, status: SubmissionStatus) {
        view.show_status(&status);
        *self.status.lock() = status;
    }
}

/// Map the body of a non-2xx response to a failure status
fn rejection_status(body: &str) -> SubmissionStatus {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .joined_messages()
            .map(SubmissionStatus::Failure)
            .unwrap_or_else(SubmissionStatus::generic_failure),
        Err(e) => {
            tracing::debug!("Rejection body is not JSON: {}", e);
            SubmissionStatus::generic_failure()
        }
    }
}
