//! Cache statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing how stores against a [`crate::ComicCache`] played out
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    characters: AtomicU64,
    comics: AtomicU64,
    conflicts: AtomicU64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a store skipped because the character was already cached
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a store that had to process its comics
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a character entry inserted
    pub fn record_character(&self) {
        self.characters.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `n` comic records inserted, returning the new total
    pub fn record_comics(&self, n: u64) -> u64 {
        self.comics.fetch_add(n, Ordering::Relaxed) + n
    }

    /// Record a character insert that found the name already present
    pub fn record_conflict(&self) {
        self.conflicts.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total hits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Get total misses
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get total character entries inserted
    pub fn characters(&self) -> u64 {
        self.characters.load(Ordering::Relaxed)
    }

    /// Get total comic records inserted
    pub fn comics(&self) -> u64 {
        self.comics.load(Ordering::Relaxed)
    }

    /// Get total character inserts that found the name already present
    pub fn conflicts(&self) -> u64 {
        self.conflicts.load(Ordering::Relaxed)
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}
