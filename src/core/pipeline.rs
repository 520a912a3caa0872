use crate::core::{ConfigProvider, Pipeline};
use crate::utils::error::{NobelError, Result};
use reqwest::Client;

pub const DEFAULT_API_ENDPOINT: &str = "http://api.nobelprize.org/v1/prize.json?";

/// One GET, whole body as text. Non-2xx answers count as network failures;
/// there is no retry and no fallback payload.
pub async fn fetch_raw(client: &Client, url: &str) -> Result<String> {
    tracing::debug!("Making API request to: {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| NobelError::network(url, e))?;

    tracing::debug!("API response status: {}", response.status());

    let body = response
        .error_for_status()
        .map_err(|e| NobelError::network(url, e))?
        .text()
        .await
        .map_err(|e| NobelError::network(url, e))?;

    tracing::debug!("Received {} bytes", body.len());
    Ok(body)
}

pub struct PrizePipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> PrizePipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for PrizePipeline<C> {
    async fn fetch_raw(&self) -> Result<String> {
        fetch_raw(&self.client, self.config.api_endpoint()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        api_endpoint: String,
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn category_filter(&self) -> Option<&str> {
            None
        }

        fn country_filter(&self) -> Option<&str> {
            None
        }
    }

    fn pipeline_for(url: String) -> PrizePipeline<MockConfig> {
        PrizePipeline::new(MockConfig { api_endpoint: url })
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/prize.json");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(r#"{"prizes":[]}"#);
            })
            .await;

        let pipeline = pipeline_for(server.url("/v1/prize.json"));
        let body = pipeline.fetch_raw().await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(body, r#"{"prizes":[]}"#);
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/prize.json");
                then.status(500);
            })
            .await;

        let pipeline = pipeline_for(server.url("/v1/prize.json"));
        let err = pipeline.fetch_raw().await.unwrap_err();

        api_mock.assert_async().await;
        match err {
            NobelError::NetworkError { url, .. } => assert!(url.ends_with("/v1/prize.json")),
            other => panic!("expected NetworkError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let pipeline = pipeline_for("http://127.0.0.1:1/v1/prize.json".to_string());

        let err = pipeline.fetch_raw().await.unwrap_err();

        assert!(matches!(err, NobelError::NetworkError { .. }));
    }

    #[tokio::test]
    async fn test_default_decode_and_aggregate() {
        let pipeline = pipeline_for(DEFAULT_API_ENDPOINT.to_string());
        let records = pipeline
            .decode(r#"{"prizes":[{"year":"1921","category":"physics","laureates":[]}]}"#)
            .unwrap();
        let data = pipeline.aggregate(records);

        assert_eq!(data.category_keys(), vec!["physics"]);
    }
}
