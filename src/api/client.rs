//! Sensor API Client
//!
//! Fetches the latest sensor readings and nutrient predictions over HTTP.

use crate::api::LatestDataSource;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::snapshot::LatestData;
use reqwest::{Client, ClientBuilder, Response};

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("hydro-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request(&self, endpoint: &str) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl LatestDataSource for ApiClient {
    async fn latest_data(&self) -> Result<LatestData, ApiError> {
        let body = self.get_request(http::LATEST_DATA_ENDPOINT).await?;
        Ok(LatestData::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ShapeError;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(Environment::Custom {
            api_url: server.uri(),
        })
    }

    #[test]
    fn test_build_url_joins_without_double_slash() {
        let client = ApiClient::new(Environment::Custom {
            api_url: "http://greenhouse:5000/".to_string(),
        });
        assert_eq!(
            client.build_url("/latest-data"),
            "http://greenhouse:5000/latest-data"
        );
        let local = ApiClient::new(Environment::Local);
        assert_eq!(
            local.build_url(http::LATEST_DATA_ENDPOINT),
            "http://localhost:5000/latest-data"
        );
    }

    #[tokio::test]
    async fn test_latest_data_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest-data"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"sensor":{"temp":"22C","pH":6.1},"nutrients":{"N":12.345,"K":40}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let data = client_for(&server).latest_data().await.unwrap();
        let sensor: Vec<(&str, String)> = data
            .sensor
            .iter()
            .map(|(k, v)| (k, crate::snapshot::display_value(v)))
            .collect();
        assert_eq!(
            sensor,
            vec![("temp", "22C".to_string()), ("pH", "6.1".to_string())]
        );
        let nutrients: Vec<(&str, f64)> = data.nutrients.iter().collect();
        assert_eq!(nutrients, vec![("N", 12.345), ("K", 40.0)]);
    }

    #[tokio::test]
    async fn test_latest_data_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest-data"))
            .respond_with(ResponseTemplate::new(503).set_body_string("sensor hub offline"))
            .mount(&server)
            .await;

        let err = client_for(&server).latest_data().await.unwrap_err();
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "sensor hub offline");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_latest_data_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest-data"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).latest_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn test_latest_data_partial_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest-data"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"sensor":{"pH":6.0}}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).latest_data().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidShape(ShapeError::MissingField("nutrients"))
        ));
    }

    #[tokio::test]
    async fn test_latest_data_connection_refused() {
        // Nothing listens on port 1.
        let client = ApiClient::new(Environment::Custom {
            api_url: "http://127.0.0.1:1".to_string(),
        });
        let err = client.latest_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Reqwest(_)));
        assert!(err.is_network());
    }
}
