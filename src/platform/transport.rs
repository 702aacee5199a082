//! `fetch`-backed submission transport.

use folio_core::{FolioError, FolioResult, FormMethod, SubmitRequest, Transport, TransportResponse};
use gloo::net::http::{Method, RequestBuilder};

/// Sends submissions with the browser's `fetch`
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: SubmitRequest) -> FolioResult<TransportResponse> {
        let method = match request.method {
            FormMethod::Get => Method::GET,
            FormMethod::Post => Method::POST,
        };

        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| FolioError::Network(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| FolioError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FolioError::Transport(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
