use super::{ApiRequest, ApiResponse, Method, RosterError, Transport};
use async_trait::async_trait;
use gloo_net::http::Request;

/// `fetch`-based transport for the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RosterError> {
        let url = self.url(&request.path);
        log::debug!("{:?} {}", request.method, url);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        let response = builder
            .send()
            .await
            .map_err(|e| RosterError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RosterError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
