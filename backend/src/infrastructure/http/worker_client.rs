/// HTTP client for the content worker
use super::api_types::ApiResponse;
use crate::application::repositories::{KeyEntry, KeyValueStore, RemoteStore, StoreError, StoreResult};
use crate::config::ContentConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Production key-value store reached over the worker's `/api` routes.
///
/// Every request carries the configured timeout. Values travel as the raw
/// JSON body of a POST and come back inside the `data` field of the envelope.
#[derive(Debug, Clone)]
pub struct WorkerClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl WorkerClient {
    pub fn new(config: &ContentConfig) -> StoreResult<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            StoreError::Backend(format!("Invalid worker URL {}: {}", config.api_base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::Backend(format!(
                "Worker URL {} cannot carry a path",
                config.api_base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StoreError::Backend(format!("Failed to create HTTP client: {}", e)))?;

        Ok(WorkerClient {
            client,
            base_url,
            timeout: config.request_timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/{segments...}`, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    fn data_url(&self, key: &str) -> Url {
        self.endpoint(&["data", key])
    }

    async fn send(&self, request: RequestBuilder) -> StoreResult<(StatusCode, ApiResponse)> {
        let response = request.send().await.map_err(|e| self.request_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_error(e))?;

        let envelope = serde_json::from_str::<ApiResponse>(&body).map_err(|e| {
            StoreError::Malformed(format!("Worker answered {} with a non-envelope body: {}", status, e))
        })?;
        Ok((status, envelope))
    }

    /// Send and require a successful envelope
    async fn expect_success(&self, request: RequestBuilder) -> StoreResult<ApiResponse> {
        let (status, envelope) = self.send(request).await?;
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                message: envelope.error_text(),
            });
        }
        if !envelope.success {
            return Err(StoreError::Rejected(envelope.error_text()));
        }
        Ok(envelope)
    }

    fn request_error(&self, e: reqwest::Error) -> StoreError {
        if e.is_timeout() {
            StoreError::Timeout(self.timeout)
        } else {
            StoreError::Backend(format!("Worker request failed: {}", e))
        }
    }

    /// Key names stored by the worker
    pub async fn list_keys(&self, prefix: Option<&str>) -> StoreResult<Vec<KeyEntry>> {
        let mut request = self.client.get(self.endpoint(&["list-keys"]));
        if let Some(prefix) = prefix {
            request = request.query(&[("prefix", prefix)]);
        }

        let envelope = self.expect_success(request).await?;
        match envelope.data {
            Some(data) => Ok(serde_json::from_value(data)?),
            None => Ok(Vec::new()),
        }
    }

    /// Connectivity check; returns the worker's diagnostic payload
    pub async fn test(&self) -> StoreResult<Value> {
        let envelope = self.expect_success(self.client.get(self.endpoint(&["test"]))).await?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

#[async_trait]
impl KeyValueStore for WorkerClient {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let (status, envelope) = self.send(self.client.get(self.data_url(key))).await?;
        if status == StatusCode::NOT_FOUND {
            debug!("Worker has no value for {}", key);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                message: envelope.error_text(),
            });
        }

        match envelope.data {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(value.to_string())),
        }
    }

    async fn put(&self, key: &str, value: String) -> StoreResult<()> {
        let request = self
            .client
            .post(self.data_url(key))
            .header(CONTENT_TYPE, "application/json")
            .body(value);
        self.expect_success(request).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.expect_success(self.client.delete(self.data_url(key))).await?;
        Ok(())
    }

    async fn list(&self, prefix: Option<&str>) -> StoreResult<Vec<KeyEntry>> {
        self.list_keys(prefix).await
    }
}

#[async_trait]
impl RemoteStore for WorkerClient {
    async fn initialize(&self) -> StoreResult<String> {
        let envelope = self
            .expect_success(self.client.post(self.endpoint(&["initialize"])))
            .await?;
        Ok(envelope.message.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn client(base: &str) -> WorkerClient {
        WorkerClient::new(&ContentConfig::production().with_api_base_url(base)).unwrap()
    }

    #[test]
    fn test_data_url_encodes_key() {
        let client = client("https://worker.example");
        assert_eq!(
            client.data_url("page_home").as_str(),
            "https://worker.example/api/data/page_home"
        );
        assert_eq!(
            client.data_url("a b/c").as_str(),
            "https://worker.example/api/data/a%20b%2Fc"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let client = client("https://ngo.example/content/");
        assert_eq!(
            client.endpoint(&["list-keys"]).as_str(),
            "https://ngo.example/content/api/list-keys"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ContentConfig::production().with_api_base_url("not a url");
        assert!(matches!(WorkerClient::new(&config), Err(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn test_unresponsive_worker_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the connection without answering
        let _held = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let config = ContentConfig::production()
            .with_api_base_url(format!("http://{}", addr))
            .with_request_timeout(Duration::from_millis(100));
        let client = WorkerClient::new(&config).unwrap();

        let result = client.get("page_home").await;
        assert!(matches!(result, Err(StoreError::Timeout(_))));
    }
}
