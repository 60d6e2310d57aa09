//! Blocking `reqwest` transport.

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::transport::{HttpResponse, Transport};
use crate::core::{RequestPayload, TedbConfig, TedbError, TransportError};

const USER_AGENT: &str = concat!("tedb/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] over HTTPS with the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &TedbConfig) -> Result<Self, TedbError> {
        let client = Client::builder()
            .timeout(config.get_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(map_error)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        payload: &RequestPayload,
    ) -> Result<HttpResponse, TransportError> {
        let resp = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .map_err(map_error)?;
        into_response(resp)
    }

    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(map_error)?;
        into_response(resp)
    }
}

fn into_response(resp: Response) -> Result<HttpResponse, TransportError> {
    let status = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp.bytes().map_err(map_error)?.to_vec();
    Ok(HttpResponse {
        status,
        content_type,
        body,
    })
}

fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        assert!(HttpTransport::new(&TedbConfig::default()).is_ok());
    }

    #[test]
    fn user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("tedb/"));
    }

    #[test]
    fn unreachable_host_is_network_error() {
        let config = TedbConfig::new().timeout(std::time::Duration::from_secs(2));
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport.get("http://127.0.0.1:9/codes/CN_CODE/0402.json").unwrap_err();
        assert!(matches!(
            err,
            TransportError::Network(_) | TransportError::Timeout(_)
        ));
    }
}
