// appvox-core/src/infrastructure/adapters/sentiment_http.rs
//
// Classifier adapter: posts review text to an inference endpoint serving a
// pretrained sentiment model and reads back (label, score). The neutral
// fallback on failure is NOT applied here — that policy belongs to the
// application layer, one visible conversion per record.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::AppvoxError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::classifier::{SentimentClassifier, SentimentScore};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpSentimentClassifier {
    http_client: Client,
    endpoint: String,
    max_input_chars: usize,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    label: String,
    score: f64,
}

impl HttpSentimentClassifier {
    pub fn new(endpoint: &str, max_input_chars: usize) -> Result<Self, InfrastructureError> {
        let http_client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.to_string(),
            max_input_chars,
        })
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    fn name(&self) -> &'static str {
        "http-inference"
    }

    fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    async fn classify(&self, text: &str) -> Result<SentimentScore, AppvoxError> {
        let request_body = serde_json::json!({ "text": text });

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Api { status, body }.into());
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| InfrastructureError::Parse(format!("classifier response: {}", e)))?;

        Ok(SentimentScore {
            label: parsed.label,
            score: parsed.score,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape_decodes() {
        let parsed: ClassifyResponse =
            serde_json::from_str(r#"{"label": "POSITIVE", "score": 0.9987}"#).unwrap();
        assert_eq!(parsed.label, "POSITIVE");
        assert!(parsed.score > 0.99);
    }

    #[test]
    fn test_client_reports_truncation_bound() {
        let classifier = HttpSentimentClassifier::new("http://127.0.0.1:8080/classify", 512)
            .unwrap();
        assert_eq!(classifier.max_input_chars(), 512);
        assert_eq!(classifier.name(), "http-inference");
    }
}
