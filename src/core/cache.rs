use crate::core::quote::GoldQuote;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Per-run quote cache keyed by currency code. Quotes are few and small,
/// so entries live for the duration of the process.
#[derive(Clone, Default)]
pub struct QuoteCache {
    inner: Arc<Mutex<HashMap<String, GoldQuote>>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, currency: &str) -> Option<GoldQuote> {
        let cache = self.inner.lock().await;
        let value = cache.get(currency).cloned();
        if value.is_some() {
            debug!("Quote cache HIT for {}", currency);
        } else {
            debug!("Quote cache MISS for {}", currency);
        }
        value
    }

    pub async fn put(&self, currency: String, quote: GoldQuote) {
        let mut cache = self.inner.lock().await;
        debug!("Quote cache PUT for {}", currency);
        cache.insert(currency, quote);
    }
}
