//! Shared HTTP client for outbound provider calls.

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::RelayError;

/// Reusable outbound client.
///
/// Wraps a single `reqwest::Client`, so connections are pooled across calls. It is
/// configured once and only read afterwards, which makes it safe to share between
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(user_agent: Option<&str>) -> Result<Self, RelayError> {
        let default_ua = format!("chat-relay/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .user_agent(ua)
            .build()
            .map_err(|e| RelayError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Make a single POST request with a JSON body and decode a JSON reply.
    ///
    /// Only a `200 OK` is treated as success; any other status becomes
    /// [`RelayError::Provider`]. Nothing is retried.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, RelayError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);

        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| {
            warn!(error = %e, "HTTP request failed");
            RelayError::transport(e)
        })?;

        let status = res.status();
        if status != StatusCode::OK {
            let error_text = res
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = %status, body = %error_text, "API returned error status");
            return Err(RelayError::Provider {
                status: status.as_u16(),
                body: error_text,
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_text = res.text().await.map_err(RelayError::transport)?;
        serde_json::from_str(&response_text).map_err(RelayError::transport)
    }
}
