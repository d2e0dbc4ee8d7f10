// appvox-core/src/infrastructure/adapters/mod.rs

pub mod play_listing;
pub mod sentiment_http;
