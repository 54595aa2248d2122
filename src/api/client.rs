use crate::api::models::{Document, ErrorDocument};
use crate::api::query::QueryParams;
use crate::error::ApiError;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("mbta-client/", env!("CARGO_PKG_VERSION"));
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

#[derive(Debug, Clone)]
pub struct MbtaClient {
    client: Client,
    pub base_url: String,
    pub api_key: Option<String>,
    timeout_secs: u64,
}

impl MbtaClient {
    // Create baseClient with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_options(base_url, None, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_api_key(base_url: String, api_key: String) -> Result<Self, ApiError> {
        Self::with_options(base_url, Some(api_key), DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_options(
        base_url: String,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Request {
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(MbtaClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            timeout_secs,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, JSON_API_MEDIA_TYPE);

        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key);
        }

        request
    }

    /// GET `path` with `params` and decode the JSON:API document.
    ///
    /// The request is dropped as soon as `cancel` fires. A single attempt is
    /// made; failures are returned as-is.
    pub async fn get_document<T>(
        &self,
        path: &str,
        params: &QueryParams,
        cancel: &CancellationToken,
    ) -> Result<Document<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::GET, path).query(params);
        log::debug!("GET {}{} {:?}", self.base_url, path, params);

        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| self.convert_request_error(e, path))?;
            Self::handle_response::<Document<T>>(response, path, self.timeout_secs).await
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("GET {} cancelled", path);
                Err(ApiError::Cancelled {
                    endpoint: path.to_string(),
                })
            }
            result = exchange => result,
        }
    }

    fn convert_request_error(&self, error: reqwest::Error, endpoint: &str) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout {
                timeout_secs: self.timeout_secs,
                endpoint: endpoint.to_string(),
            }
        } else {
            ApiError::Request {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        }
    }

    pub async fn handle_response<T>(
        response: Response,
        endpoint: &str,
        timeout_secs: u64,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(|e| ApiError::Request {
                endpoint: endpoint.to_string(),
                message: format!("Failed to read response body: {}", e),
            })?;

            serde_json::from_slice::<T>(&body).map_err(|e| ApiError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorDocument>(&error_text)
                .ok()
                .and_then(|doc| doc.summary())
                .unwrap_or(error_text);

            log::warn!("{} returned {}: {}", endpoint, status, message);

            match status.as_u16() {
                401 | 403 => Err(ApiError::Unauthorized {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    server_message: message,
                }),
                404 => Err(ApiError::NotFound {
                    endpoint: endpoint.to_string(),
                    message,
                }),
                408 | 504 => Err(ApiError::Timeout {
                    timeout_secs,
                    endpoint: endpoint.to_string(),
                }),
                _ => Err(ApiError::Http {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    message,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MbtaClient::new("http://example.test".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_no_api_key_by_default() {
        let client =
            MbtaClient::new("http://example.test".to_string()).expect("client creation failed");
        assert!(!client.has_api_key());
        assert_eq!(client.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let client = MbtaClient::with_api_key("http://example.test".to_string(), String::new())
            .expect("client creation failed");
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_build_request_without_api_key() {
        let client =
            MbtaClient::new("http://example.test".to_string()).expect("client creation failed");
        let request = client.build_request(Method::GET, "/vehicles");

        let built_request = request.build().expect("Failed to build request");

        assert_eq!(built_request.url().as_str(), "http://example.test/vehicles");
        assert_eq!(built_request.method(), Method::GET);
        assert!(built_request.headers().get("x-api-key").is_none());
        assert_eq!(
            built_request.headers().get(ACCEPT).unwrap(),
            JSON_API_MEDIA_TYPE
        );
    }

    #[test]
    fn test_build_request_with_api_key() {
        let client = MbtaClient::with_api_key(
            "http://example.test".to_string(),
            "test_api_key_123".to_string(),
        )
        .expect("client creation failed");

        let request = client.build_request(Method::GET, "/vehicles");
        let built_request = request.build().expect("Failed to build request");

        assert_eq!(
            built_request
                .headers()
                .get("x-api-key")
                .unwrap()
                .to_str()
                .unwrap(),
            "test_api_key_123"
        );
    }

    #[test]
    fn test_query_params_are_percent_encoded() {
        let client =
            MbtaClient::new("http://example.test".to_string()).expect("client creation failed");
        let params: QueryParams = vec![("filter[route]", "Red,Orange".to_string())];
        let built_request = client
            .build_request(Method::GET, "/vehicles")
            .query(&params)
            .build()
            .expect("Failed to build request");

        let pairs: Vec<(String, String)> = built_request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![("filter[route]".to_string(), "Red,Orange".to_string())]
        );
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let client =
            MbtaClient::new("http://example.test/".to_string()).expect("client creation failed");
        assert_eq!(client.base_url, "http://example.test");
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        // Nothing listens on this port; cancellation must win regardless.
        let client =
            MbtaClient::new("http://127.0.0.1:9".to_string()).expect("client creation failed");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = client
            .get_document::<Vec<serde_json::Value>>("/vehicles", &QueryParams::new(), &cancel)
            .await;
        assert!(matches!(result, Err(ApiError::Cancelled { .. })));
    }
}
