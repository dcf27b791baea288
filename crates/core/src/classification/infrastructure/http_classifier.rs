use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::classification::domain::error::ClassifyError;
use crate::classification::domain::result::ResultSet;
use crate::shared::constants::CLASSIFY_ENDPOINT;

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    url: &'a str,
}

/// The backend reports some failures as 2xx bodies carrying only an `error`
/// field, so both fields are optional and resolved after the status check.
#[derive(Deserialize)]
struct ClassifyResponse {
    results: Option<ResultSet>,
    error: Option<String>,
}

/// HTTP transport to the dialect-classification backend.
///
/// One `POST {origin}/classify_dialect/` per call, with the request timeout
/// layered here at the transport boundary; the session state machine itself
/// defines none.
#[derive(Debug)]
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpClassifier {
    pub fn new(origin: &str, timeout: Duration) -> Result<Self, ClassifyError> {
        let endpoint = Url::parse(origin)
            .and_then(|base| base.join(CLASSIFY_ENDPOINT))
            .map_err(|e| {
                ClassifyError::transport(format!("invalid backend origin {origin:?}: {e}"))
            })?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifyError::transport(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit one URL for classification. The raw field value goes out
    /// unmodified; the ranked results come back in backend order.
    pub async fn classify(&self, url: &str) -> Result<ResultSet, ClassifyError> {
        log::info!("requesting dialect classification for {url}");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ClassifyRequest { url })
            .send()
            .await
            .map_err(|e| ClassifyError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("backend rejected classification request ({status})");
            let message = response
                .json::<ClassifyResponse>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(ClassifyError::request(message));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::transport(e.to_string()))?;

        match body {
            ClassifyResponse {
                results: Some(results),
                ..
            } => {
                log::debug!("received {} ranked candidates", results.len());
                Ok(results)
            }
            ClassifyResponse {
                error: Some(message),
                ..
            } => Err(ClassifyError::request(Some(message))),
            _ => Err(ClassifyError::transport("response body missing results")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::classification::domain::result::ClassificationResult;

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    async fn classifier_for(server: &MockServer) -> HttpClassifier {
        HttpClassifier::new(&server.uri(), TEST_TIMEOUT).unwrap()
    }

    #[test]
    fn test_new_joins_endpoint_onto_origin() {
        let classifier = HttpClassifier::new("http://localhost:8000", TEST_TIMEOUT).unwrap();
        assert_eq!(
            classifier.endpoint().as_str(),
            "http://localhost:8000/classify_dialect/"
        );
    }

    #[test]
    fn test_new_rejects_unparsable_origin() {
        let err = HttpClassifier::new("not an origin", TEST_TIMEOUT).unwrap_err();
        assert!(matches!(err, ClassifyError::TransportFailed(_)));
    }

    #[tokio::test]
    async fn test_classify_posts_raw_url_and_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_dialect/"))
            .and(body_json(json!({"url": "https://example.com/video.mp4"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"label": "us", "score": 0.92},
                    {"label": "scotland", "score": 0.41}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = classifier_for(&server)
            .await
            .classify("https://example.com/video.mp4")
            .await
            .unwrap();

        assert_eq!(
            results,
            vec![
                ClassificationResult {
                    label: "us".to_owned(),
                    score: 0.92
                },
                ClassificationResult {
                    label: "scotland".to_owned(),
                    score: 0.41
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_non_2xx_with_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_dialect/"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "bad video"})),
            )
            .mount(&server)
            .await;

        let err = classifier_for(&server)
            .await
            .classify("https://example.com/video.mp4")
            .await
            .unwrap_err();

        assert_eq!(err, ClassifyError::RequestFailed("bad video".to_owned()));
    }

    #[tokio::test]
    async fn test_non_2xx_without_body_uses_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_dialect/"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = classifier_for(&server)
            .await
            .classify("https://example.com/video.mp4")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClassifyError::RequestFailed("Classification failed".to_owned())
        );
    }

    #[tokio::test]
    async fn test_2xx_with_error_body_is_request_failure() {
        // FastAPI handlers that return {"error": ...} dicts still answer 200.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_dialect/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "Failed to download the video."
            })))
            .mount(&server)
            .await;

        let err = classifier_for(&server)
            .await
            .classify("https://example.com/video.mp4")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClassifyError::RequestFailed("Failed to download the video.".to_owned())
        );
    }

    #[tokio::test]
    async fn test_malformed_2xx_body_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_dialect/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = classifier_for(&server)
            .await
            .classify("https://example.com/video.mp4")
            .await
            .unwrap_err();

        assert!(matches!(err, ClassifyError::TransportFailed(_)));
    }

    #[tokio::test]
    async fn test_2xx_with_neither_field_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_dialect/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;

        let err = classifier_for(&server)
            .await
            .classify("https://example.com/video.mp4")
            .await
            .unwrap_err();

        assert!(matches!(err, ClassifyError::TransportFailed(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_failure() {
        // Discard port; nothing listens there.
        let classifier = HttpClassifier::new("http://127.0.0.1:9", TEST_TIMEOUT).unwrap();
        let err = classifier
            .classify("https://example.com/video.mp4")
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifyError::TransportFailed(_)));
    }
}
