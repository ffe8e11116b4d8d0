//! HTTP transports behind the console API service
//!
//! The browser build goes through `reqwasm` (fetch API), native builds through
//! `reqwest`. Both only report the raw status and body; deciding what counts
//! as success is the service's job.

use crate::shared::errors::{FetchError, Result};

/// Raw answer to a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests. `Err` is reserved for network-level failures.
#[allow(async_fn_in_trait)]
pub trait JsonTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

// Browser transport (fetch API)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct BrowserTransport;

#[cfg(target_arch = "wasm32")]
impl JsonTransport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        use reqwasm::http::Request;

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

// Native transport (desktop builds and tooling)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct NativeTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonTransport for NativeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = BrowserTransport;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = NativeTransport;

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            status_text: String::new(),
            body: String::new(),
        }
    }

    #[test]
    fn test_success_range() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(302).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
