use crate::config::SourceConfig;
use crate::domain::ports::NoteTransport;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

/// reqwest-backed transport for Joplin's local data API.
///
/// Every request carries the `token` query parameter.
pub struct HttpTransport {
    base_url: String,
    token: String,
    timeout: Option<Duration>,
    client: Client,
}

impl HttpTransport {
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let token = source
            .token
            .clone()
            .ok_or_else(|| SyncError::MissingConfigError {
                field: "source.token".to_string(),
            })?;

        Ok(Self {
            base_url: source.base_url.trim_end_matches('/').to_string(),
            token,
            timeout: source.timeout_seconds.map(Duration::from_secs),
            client: Client::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn prepare(&self, mut request: RequestBuilder, query: &[(&str, String)]) -> RequestBuilder {
        for (key, value) in query {
            request = request.query(&[(key, value)]);
        }
        request = request.query(&[("token", &self.token)]);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    fn check_status(path: &str, response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("📡 {} -> {}", path, status);

        if status.is_success() {
            Ok(response)
        } else {
            Err(SyncError::HttpStatusError {
                status: status.as_u16(),
                path: path.to_string(),
            })
        }
    }
}

#[async_trait]
impl NoteTransport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<serde_json::Value> {
        let request = self.prepare(self.client.get(self.url(path)), query);
        let response = Self::check_status(path, request.send().await?)?;

        // Joplin answers with text/plain on some versions, so parse the body ourselves
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn put(&self, path: &str, body: &serde_json::Value) -> Result<()> {
        let request = self.prepare(self.client.put(self.url(path)), &[]).json(body);
        Self::check_status(path, request.send().await?)?;
        Ok(())
    }
}
