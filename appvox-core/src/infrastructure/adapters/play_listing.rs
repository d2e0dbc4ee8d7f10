// appvox-core/src/infrastructure/adapters/play_listing.rs
//
// Google Play review-listing adapter. Consumes the paginated review feed:
// batches of records behind a continuation token, newest first. The records
// are handed to the domain as raw JSON — the mapper owns the shape contract.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::error::AppvoxError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::listing::{FetchOptions, ReviewListing};

const DEFAULT_BASE_URL: &str = "https://play-reviews.googleapis.com/v1";

/// Batch size per page request. The feed caps batches around 150 records.
const PAGE_SIZE: usize = 150;

/// User-Agent sent with every request.
const USER_AGENT: &str = "appvox/0.1.0";

pub struct PlayStoreListing {
    http_client: Client,
    base_url: String,
}

/// One page of the review feed.
#[derive(Debug, Deserialize)]
struct ReviewPage {
    #[serde(default)]
    reviews: Vec<Value>,
    #[serde(rename = "nextToken")]
    next_token: Option<String>,
}

impl PlayStoreListing {
    /// Build the client. `timeout` applies per request so a hung page fetch
    /// cannot block the rest of the run.
    pub fn new(timeout: Duration) -> Result<Self, InfrastructureError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let http_client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn fetch_page(
        &self,
        app_id: &str,
        opts: &FetchOptions,
        token: Option<&str>,
    ) -> Result<ReviewPage, AppvoxError> {
        let mut url = format!(
            "{}/apps/{}/reviews?lang={}&country={}&sort=newest&count={}",
            self.base_url, app_id, opts.lang, opts.country, PAGE_SIZE
        );
        if let Some(token) = token {
            url.push_str(&format!("&token={}", token));
        }

        debug!(app_id = %app_id, token = ?token, "Requesting review page");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Api { status, body }.into());
        }

        let body = response.text().await.map_err(InfrastructureError::Http)?;
        Ok(parse_page(&body)?)
    }
}

/// Decode one feed page. Split out of the HTTP path so the envelope
/// handling is testable without a live service.
fn parse_page(body: &str) -> Result<ReviewPage, InfrastructureError> {
    serde_json::from_str(body)
        .map_err(|e| InfrastructureError::Parse(format!("review page decode failed: {}", e)))
}

#[async_trait]
impl ReviewListing for PlayStoreListing {
    fn source_label(&self) -> &'static str {
        "Google Play Store"
    }

    async fn fetch_all(
        &self,
        app_id: &str,
        opts: &FetchOptions,
    ) -> Result<Vec<Value>, AppvoxError> {
        let mut collected: Vec<Value> = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self.fetch_page(app_id, opts, token.as_deref()).await?;
            let page_len = page.reviews.len();
            collected.extend(page.reviews);

            debug!(
                app_id = %app_id,
                page_len,
                total = collected.len(),
                "Review page received"
            );

            if let Some(cap) = opts.cap
                && collected.len() >= cap
            {
                collected.truncate(cap);
                break;
            }

            // The feed signals exhaustion with an absent token or an empty
            // batch — fewer records than the cap is not an error.
            token = match page.next_token {
                Some(t) if page_len > 0 => Some(t),
                _ => break,
            };

            if opts.page_sleep_ms > 0 {
                sleep(Duration::from_millis(opts.page_sleep_ms)).await;
            }
        }

        Ok(collected)
    }
}
