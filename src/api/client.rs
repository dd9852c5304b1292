use reqwest::{header, Client, RequestBuilder};

use super::error::FetchError;
use crate::config::{ApiKey, Config, REQUEST_TIMEOUT, SEARCH_ORIENTATION, SEARCH_QUERY};
use crate::state::data::SearchResult;

/// Photo search API client
#[derive(Clone, Debug)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
    api_key: ApiKey,
}

impl SearchClient {
    /// Create a new client for the configured endpoint
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Wrap an already configured HTTP client
    pub fn with_client(client: Client, config: &Config) -> Self {
        log::info!("[SearchClient] Using search endpoint {}", config.endpoint);

        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// The fixed search request (query term and orientation are constants)
    fn search_request(&self) -> RequestBuilder {
        self.client
            .get(&self.endpoint)
            .query(&[("query", SEARCH_QUERY), ("orientation", SEARCH_ORIENTATION)])
            .header(header::AUTHORIZATION, self.api_key.expose())
    }

    /// Issue the search and decode the first results page
    pub async fn search(&self) -> Result<SearchResult, FetchError> {
        let response = self.search_request().send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status, !self.api_key.is_empty()));
        }

        let body = response.bytes().await?;
        let result = SearchResult::from_json(&body)?;

        log::debug!(
            "[SearchClient] Received {} of {} photos (page {})",
            result.photos.len(),
            result.total_results,
            result.page
        );

        Ok(result)
    }

    /// Download raw image bytes. Image CDNs need no authorization.
    pub async fn download(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(uri).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client_with(key: &str) -> SearchClient {
        let config = Config {
            api_key: ApiKey::new(key),
            endpoint: "https://api.example.com/v1/search".to_string(),
        };
        SearchClient::new(&config).unwrap()
    }

    #[test]
    fn test_search_request_shape() {
        let request = client_with("token-123").search_request().build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/v1/search?query=mobile+wallpaper&orientation=portrait"
        );
        assert_eq!(request.headers()[header::AUTHORIZATION], "token-123");
    }

    /// Serve one canned HTTP response on a local port and hand back the
    /// raw request that was received
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/v1/search", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).into_owned()
        });

        (endpoint, server)
    }

    fn local_client(endpoint: String, key: &str) -> SearchClient {
        let config = Config {
            api_key: ApiKey::new(key),
            endpoint,
        };
        let client = Client::builder().no_proxy().build().unwrap();
        SearchClient::with_client(client, &config)
    }

    #[tokio::test]
    async fn test_search_sends_query_and_key() {
        let body = r#"{"total_results": 1, "page": 1, "per_page": 1,
            "photos": [{ "id": 7, "src": { "large": "http://127.0.0.1/7.jpeg" } }]}"#;
        let (endpoint, server) = serve_once("200 OK", body).await;

        let result = local_client(endpoint, "token-123").search().await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(result.photos.len(), 1);
        assert_eq!(result.photos[0].id, 7);
        assert!(request.starts_with("GET /v1/search?query=mobile+wallpaper&orientation=portrait HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("authorization: token-123"));
    }

    #[tokio::test]
    async fn test_rejected_key_is_unauthorized() {
        let (endpoint, server) = serve_once("401 Unauthorized", r#"{"error":"bad key"}"#).await;

        let err = local_client(endpoint, "token-123").search().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, FetchError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_rejected_without_key_is_missing_token() {
        let (endpoint, server) = serve_once("401 Unauthorized", "{}").await;

        let err = local_client(endpoint, "").search().await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err.kind(), "missing-token");
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let (endpoint, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = local_client(endpoint, "token-123").search().await.unwrap_err();
        server.await.unwrap();

        match err {
            FetchError::Status { status } => assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (endpoint, server) = serve_once("200 OK", r#"{"photos": [{"id": "#).await;

        let err = local_client(endpoint, "token-123").search().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let printed = format!("{:?}", client_with("token-123"));
        assert!(!printed.contains("token-123"));
    }
}
