//! In-memory caching using moka
//!
//! The pricing engine is purely functional, so composed quotes and
//! competitor comparisons are memoized on the configuration fingerprint.
//! The engine itself never touches the cache; this is an API-layer concern.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::pricing::responses::{ComparisonResponse, QuoteResponse};
use crate::pricing::Configuration;

/// Application cache holding composed quotes and comparison batches
#[derive(Clone)]
pub struct QuoteCache {
    /// Composed quotes (configuration fingerprint -> QuoteResponse)
    pub quotes: Cache<String, Arc<QuoteResponse>>,
    /// Competitor comparisons (configuration fingerprint -> ComparisonResponse)
    pub comparisons: Cache<String, Arc<ComparisonResponse>>,
}

impl QuoteCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Quotes: 10k entries, 10 min TTL. Entries only go stale when a
            // pricing epoch rolls over, so the TTL is a bound, not a need.
            quotes: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(10 * 60))
                .time_to_idle(Duration::from_secs(5 * 60))
                .build(),

            // Comparisons: fewer entries, same lifetime profile
            comparisons: Cache::builder()
                .max_capacity(1_000)
                .time_to_live(Duration::from_secs(10 * 60))
                .time_to_idle(Duration::from_secs(5 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
            comparisons_size: self.comparisons.entry_count(),
        }
    }

    /// Invalidate all caches (e.g. when a new pricing epoch ships)
    pub fn invalidate_all(&self) {
        self.quotes.invalidate_all();
        self.comparisons.invalidate_all();
        info!("All pricing caches invalidated");
    }

    /// Generate the cache key for a configuration
    pub fn config_key(config: &Configuration) -> String {
        config.fingerprint()
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
    pub comparisons_size: u64,
}
