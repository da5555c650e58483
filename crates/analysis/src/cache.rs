//! Result cache keyed on the request's true inputs.
//!
//! The key is derived from the target company and the exact file set,
//! independent of transcript ordering, so two transcripts that mention
//! the same files in a different order share one entry. Entries expire
//! after a fixed TTL and the store is capacity-bounded with
//! least-recently-used eviction.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::AnalysisReport;

/// Default maximum number of cached analyses.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default entry lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(48 * 60 * 60);

struct CacheSlot {
    stored_at: Instant,
    report: AnalysisReport,
}

/// Shared, capacity- and TTL-bounded store of finished analyses.
///
/// Safe for concurrent use across request handlers; locking is internal.
/// Uses an IndexMap so insertion order doubles as recency order: reads
/// move an entry to the back, eviction pops from the front.
pub struct AnalysisCache {
    entries: RwLock<IndexMap<String, CacheSlot>>,
    max_entries: usize,
    ttl: Duration,
}

/// Snapshot of cache occupancy for the stats endpoint.
#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub cache_size: usize,
    pub max_size: usize,
    pub ttl_hours: f64,
    pub entries: Vec<String>,
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}

impl AnalysisCache {
    /// Create a new cache with the given capacity and TTL.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
            max_entries,
            ttl,
        }
    }

    /// Look up a previous analysis.
    ///
    /// A hit comes back with `cached` set on a clone; the stored report
    /// keeps `cached == false` so the next read is served the same way.
    /// Expired entries are dropped on access. A hit also counts as a
    /// use for eviction purposes.
    pub async fn get(&self, key: &str) -> Option<AnalysisReport> {
        let mut entries = self.entries.write().await;

        let slot = entries.shift_remove(key)?;
        if slot.stored_at.elapsed() >= self.ttl {
            debug!(key = %key, "cache entry expired");
            return None;
        }

        let mut report = slot.report.clone();
        report.cached = true;

        // Reinsert at the back to mark as recently used.
        entries.insert(key.to_string(), slot);

        Some(report)
    }

    /// Store a finished analysis, evicting the least recently used
    /// entries beyond capacity.
    pub async fn put(&self, key: &str, mut report: AnalysisReport) {
        report.cached = false;

        let mut entries = self.entries.write().await;
        entries.shift_remove(key);
        entries.insert(
            key.to_string(),
            CacheSlot {
                stored_at: Instant::now(),
                report,
            },
        );

        while entries.len() > self.max_entries {
            // shift_remove_index removes the first (oldest) entry.
            entries.shift_remove_index(0);
        }
    }

    /// Current occupancy for the stats endpoint.
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        CacheStats {
            cache_size: entries.len(),
            max_size: self.max_entries,
            ttl_hours: self.ttl.as_secs_f64() / 3600.0,
            entries: entries.keys().cloned().collect(),
        }
    }
}

/// Derive the cache key for one request.
///
/// The company segment is lowercased with spaces and hyphens replaced
/// by underscores; the path segment is the first 8 hex chars of a
/// SHA-256 over the sorted path list. Sorting makes the key independent
/// of transcript ordering; 8 hex chars are enough at this scale.
pub fn cache_key(target_company: &str, file_paths: &[String]) -> String {
    let mut sorted = file_paths.to_vec();
    sorted.sort();

    let mut hasher = Sha256::new();
    for path in &sorted {
        hasher.update(path.as_bytes());
    }
    let digest = hasher.finalize();

    let mut hash8 = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        hash8.push_str(&format!("{:02x}", byte));
    }

    let company = target_company.to_lowercase().replace([' ', '-'], "_");
    format!("{}_{}", company, hash8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(target: &str) -> AnalysisReport {
        AnalysisReport {
            target_company: target.to_string(),
            verified_competitors: Vec::new(),
            to_crosscheck: Vec::new(),
            verified_count: 0,
            crosscheck_count: 0,
            reasoning: "done".to_string(),
            files_processed: 1,
            total_files_found: 1,
            failed_files: Vec::new(),
            cached: false,
        }
    }

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_key_is_order_independent() {
        let forward = cache_key("Acme", &paths(&["a.xlsx", "b.xlsx"]));
        let reverse = cache_key("Acme", &paths(&["b.xlsx", "a.xlsx"]));
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_key_normalizes_company_casing() {
        let upper = cache_key("Acme", &paths(&["a.xlsx"]));
        let lower = cache_key("acme", &paths(&["a.xlsx"]));
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_key_normalizes_spaces_and_hyphens() {
        let key = cache_key("Acme-Global Holdings", &paths(&["a.xlsx"]));
        assert!(key.starts_with("acme_global_holdings_"));
    }

    #[test]
    fn test_key_changes_with_file_set() {
        let one = cache_key("Acme", &paths(&["a.xlsx"]));
        let two = cache_key("Acme", &paths(&["a.xlsx", "b.xlsx"]));
        assert_ne!(one, two);
    }

    #[test]
    fn test_key_hash_segment_is_8_hex_chars() {
        let key = cache_key("Acme", &paths(&["a.xlsx"]));
        let hash = key.rsplit('_').next().unwrap();
        assert_eq!(hash.len(), 8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_hit_is_marked_cached_without_mutating_the_store() {
        let cache = AnalysisCache::default();
        cache.put("key", report("Acme")).await;

        let first = cache.get("key").await.unwrap();
        assert!(first.cached);

        // The stored value was not rewritten; a second read still works.
        let second = cache.get("key").await.unwrap();
        assert!(second.cached);
    }

    #[tokio::test]
    async fn test_put_forces_cached_false() {
        let cache = AnalysisCache::default();
        let mut stale = report("Acme");
        stale.cached = true;

        cache.put("key", stale).await;

        let hit = cache.get("key").await.unwrap();
        assert!(hit.cached);
        assert_eq!(hit.target_company, "Acme");
    }

    #[tokio::test]
    async fn test_miss_returns_none() {
        let cache = AnalysisCache::default();
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_immediately() {
        let cache = AnalysisCache::new(10, Duration::ZERO);
        cache.put("key", report("Acme")).await;

        assert!(cache.get("key").await.is_none());
        assert_eq!(cache.stats().await.cache_size, 0);
    }

    #[tokio::test]
    async fn test_lru_eviction_beyond_capacity() {
        let cache = AnalysisCache::new(2, DEFAULT_TTL);
        cache.put("a", report("A")).await;
        cache.put("b", report("B")).await;

        // Touch "a" so "b" becomes least recently used.
        cache.get("a").await.unwrap();

        cache.put("c", report("C")).await;

        assert!(cache.get("a").await.is_some());
        assert!(cache.get("b").await.is_none());
        assert!(cache.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_stats_reports_occupancy() {
        let cache = AnalysisCache::new(5, Duration::from_secs(7200));
        cache.put("one", report("A")).await;
        cache.put("two", report("B")).await;

        let stats = cache.stats().await;
        assert_eq!(stats.cache_size, 2);
        assert_eq!(stats.max_size, 5);
        assert_eq!(stats.ttl_hours, 2.0);
        assert_eq!(stats.entries, vec!["one".to_string(), "two".to_string()]);
    }
}
