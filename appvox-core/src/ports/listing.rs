// appvox-core/src/ports/listing.rs

// This file defines what the application needs from the external
// review-listing service, without knowing how it's done. The adapter behind
// it decides pagination, endpoints and wire formats.

use crate::error::AppvoxError;
use async_trait::async_trait;
use serde_json::Value;

/// Options for one fetch against the listing service.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Review locale (e.g. "en").
    pub lang: String,
    /// Store country (e.g. "us").
    pub country: String,
    /// Per-target cap. `None` means everything available.
    pub cap: Option<usize>,
    /// Pause between pages, in milliseconds. 0 means no artificial delay.
    pub page_sleep_ms: u64,
}

#[async_trait]
pub trait ReviewListing: Send + Sync {
    /// Origin label attached to every record fetched through this channel.
    fn source_label(&self) -> &'static str;

    /// Fetch all available reviews for `app_id`, sorted newest first,
    /// stopping at the cap. The service holding fewer records than the cap
    /// is not an error; an unreachable or failing service is.
    async fn fetch_all(
        &self,
        app_id: &str,
        opts: &FetchOptions,
    ) -> Result<Vec<Value>, AppvoxError>;
}
