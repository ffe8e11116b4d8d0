use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::RemoteValue;
use crate::shared::errors::{FetchError, Result};
use crate::shared::logging::{log_fetch_fallback, log_fetch_start};
use crate::shared::services::transport::{DefaultTransport, JsonTransport};

// API Service for console API requests
#[derive(Debug, Clone)]
pub struct ApiService<T = DefaultTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiService<DefaultTransport> {
    pub fn new() -> Self {
        Self::with_transport(ApiConfig::from_build_mode(), DefaultTransport::default())
    }
}

impl Default for ApiService<DefaultTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JsonTransport> ApiService<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    // Generic GET request
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.config.url_for(path);
        log_fetch_start(&url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                status_text: response.status_text,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// GET that never fails: any error is logged and replaced by `fallback`.
    pub async fn fetch_json<R: DeserializeOwned>(&self, path: &str, fallback: R) -> R {
        match self.get(path).await {
            Ok(value) => value,
            Err(e) => {
                log_fetch_fallback(&self.config.url_for(path), &e);
                fallback
            }
        }
    }

    /// Like `fetch_json`, but records whether the value actually loaded.
    ///
    /// `project` picks the displayed field out of the decoded payload; the
    /// fallback is already in that projected form.
    pub async fn fetch_remote<R, V>(&self, path: &str, fallback: V, project: impl FnOnce(R) -> V) -> RemoteValue<V>
    where
        R: DeserializeOwned,
    {
        match self.get::<R>(path).await {
            Ok(value) => RemoteValue::loaded(value).map(project),
            Err(e) => {
                log_fetch_fallback(&self.config.url_for(path), &e);
                RemoteValue::fallback(fallback)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{UsernameResponse, VersionResponse};
    use crate::shared::services::transport::HttpResponse;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned responses keyed by URL; unknown URLs fail at the network level.
    #[derive(Default)]
    pub(crate) struct StubTransport {
        responses: HashMap<String, (u16, String)>,
        pub requested: RefCell<Vec<String>>,
    }

    impl StubTransport {
        pub(crate) fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
            self.responses.insert(path.to_string(), (status, body.to_string()));
            self
        }
    }

    impl JsonTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requested.borrow_mut().push(url.to_string());
            match self.responses.get(url) {
                Some((status, body)) => Ok(HttpResponse {
                    status: *status,
                    status_text: if *status < 300 { "OK".into() } else { "Error".into() },
                    body: body.clone(),
                }),
                None => Err(FetchError::Network("connection refused".into())),
            }
        }
    }

    pub(crate) fn service(transport: StubTransport) -> ApiService<StubTransport> {
        ApiService::with_transport(ApiConfig::relative(), transport)
    }

    fn username_fallback() -> UsernameResponse {
        UsernameResponse {
            username: String::new(),
        }
    }

    #[tokio::test]
    async fn test_fetch_json_success() {
        let api = service(
            StubTransport::default().respond("/multicloud/common/username", 200, r#"{"username":"kube:admin"}"#),
        );
        let result = api.fetch_json("/multicloud/common/username", username_fallback()).await;
        assert_eq!(result.username, "kube:admin");
    }

    #[tokio::test]
    async fn test_fetch_json_server_error_uses_fallback() {
        let api = service(StubTransport::default().respond("/multicloud/common/version", 500, "oops"));
        let fallback = VersionResponse {
            version: "undefined".into(),
        };
        let result = api.fetch_json("/multicloud/common/version", fallback.clone()).await;
        assert_eq!(result, fallback);
    }

    #[tokio::test]
    async fn test_fetch_json_network_error_uses_fallback() {
        let api = service(StubTransport::default());
        let result = api.fetch_json("/multicloud/common/username", username_fallback()).await;
        assert_eq!(result, username_fallback());
    }

    #[tokio::test]
    async fn test_fetch_json_bad_body_uses_fallback() {
        let api = service(StubTransport::default().respond("/multicloud/common/username", 200, "<html>"));
        let result = api.fetch_json("/multicloud/common/username", username_fallback()).await;
        assert_eq!(result, username_fallback());
    }

    #[tokio::test]
    async fn test_get_reports_status_error() {
        let api = service(StubTransport::default().respond("/multicloud/logout", 401, ""));
        let err = api.get::<VersionResponse>("/multicloud/logout").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_fetch_remote_tracks_loaded_flag() {
        let api = service(
            StubTransport::default().respond("/multicloud/common/version", 200, r#"{"version":"2.2.0"}"#),
        );
        let version = |r: VersionResponse| r.version;

        let loaded = api
            .fetch_remote("/multicloud/common/version", "undefined".to_string(), version)
            .await;
        assert_eq!(loaded, RemoteValue::loaded("2.2.0".to_string()));

        let failed = api
            .fetch_remote("/multicloud/common/username", "undefined".to_string(), version)
            .await;
        assert_eq!(failed, RemoteValue::fallback("undefined".to_string()));
    }

    #[tokio::test]
    async fn test_requests_use_configured_host() {
        let api = ApiService::with_transport(
            ApiConfig::with_base_url("https://localhost:3000"),
            StubTransport::default(),
        );
        let _ = api.fetch_json("/multicloud/common/username", username_fallback()).await;
        assert_eq!(
            api.transport.requested.borrow().as_slice(),
            ["https://localhost:3000/multicloud/common/username".to_string()]
        );
    }
}
