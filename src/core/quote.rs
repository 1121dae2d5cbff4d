//! Spot quote abstractions
//!
//! Quotes are display-only: a fetched price never flows into a sheet
//! unless the user types it into an item by hand.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Gram price for one purity grade.
#[derive(Debug, Clone, PartialEq)]
pub struct KaratPrice {
    pub karat: &'static str,
    pub price_per_gram: f64,
}

/// Spot gold quote as returned by the external price service.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldQuote {
    pub price_per_ounce: f64,
    pub currency: String,
    pub gram_prices: Vec<KaratPrice>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, currency: &str) -> Result<GoldQuote>;
}
