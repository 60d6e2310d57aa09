//! The HTTP seam between the search pipeline and the network.

use crate::core::{RequestPayload, TransportError};

/// A raw HTTP response, before any TEDB-specific interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A 200 response with an `application/json` body.
    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }
}

/// Blocking HTTP client used by [`Tedb`](super::Tedb).
///
/// Implementations perform exactly one request per call and apply their
/// own timeout. Non-200 answers are returned as responses, not errors.
pub trait Transport {
    /// POST `payload` as JSON to `url`.
    fn post_json(&self, url: &str, payload: &RequestPayload)
    -> Result<HttpResponse, TransportError>;

    /// GET `url`.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(
        &self,
        url: &str,
        payload: &RequestPayload,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post_json(url, payload)
    }

    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

const JSON_CONTENT_TYPE: &str = "application/json";

/// Accept only a 200 response with a JSON content type; return its body.
pub(crate) fn expect_json(response: HttpResponse) -> Result<Vec<u8>, TransportError> {
    if response.status != 200 {
        return Err(TransportError::Status {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }

    let is_json = response
        .content_type
        .as_deref()
        .map(|ct| {
            ct.trim()
                .to_ascii_lowercase()
                .starts_with(JSON_CONTENT_TYPE)
        })
        .unwrap_or(false);
    if !is_json {
        return Err(TransportError::ContentType {
            expected: JSON_CONTENT_TYPE.to_string(),
            actual: response.content_type.unwrap_or_else(|| "none".to_string()),
        });
    }

    Ok(response.body)
}

/// Like [`expect_json`], and the body must not be empty.
pub(crate) fn expect_json_body(url: &str, response: HttpResponse) -> Result<Vec<u8>, TransportError> {
    let body = expect_json(response)?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(TransportError::EmptyBody {
            url: url.to_string(),
        });
    }
    Ok(body)
}
