//! ComicCache: comic lookup tables keyed by character and by comic id

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ahash::RandomState;
use comicdata::{decode_comics, Comic, ComicId, Result};
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::stats::CacheStats;

/// In-memory comic cache with two tables
///
/// - character name -> comic ids in API response order
/// - comic id -> full comic record
///
/// Both tables only grow: the first write for a key wins and entries are
/// never updated or removed. The cache is `Send + Sync`; share it by
/// reference or `Arc` across threads.
pub struct ComicCache {
    /// Comic ids per character name
    by_character: RwLock<HashMap<String, Vec<ComicId>, RandomState>>,

    /// Comic records per id
    by_id: RwLock<HashMap<ComicId, Comic, RandomState>>,

    /// Store statistics
    stats: CacheStats,
}

impl ComicCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create an empty cache with room for the given number of entries
    ///
    /// # Arguments
    /// * `characters` - Expected number of characters
    /// * `comics` - Expected number of distinct comics
    pub fn with_capacity(characters: usize, comics: usize) -> Self {
        Self {
            by_character: RwLock::new(HashMap::with_capacity_and_hasher(
                characters,
                RandomState::new(),
            )),
            by_id: RwLock::new(HashMap::with_capacity_and_hasher(comics, RandomState::new())),
            stats: CacheStats::new(),
        }
    }

    /// Check whether `comics` is already cached for `character`
    ///
    /// Only the endpoints are compared: the stored list must start with
    /// `comics[0].id` and end with the id of the last comic. A character's
    /// upstream list is assumed stable, so matching endpoints mean the same
    /// list. An empty `comics` is never considered cached.
    pub fn already_cached(&self, character: &str, comics: &[Comic]) -> bool {
        let (Some(first), Some(last)) = (comics.first(), comics.last()) else {
            return false;
        };

        let by_character = self.by_character.read();
        match by_character.get(character) {
            Some(ids) => ids.first() == Some(&first.id) && ids.last() == Some(&last.id),
            None => false,
        }
    }

    /// Store `comics` for `character` unless they are already cached
    ///
    /// Every comic is added to the id table if its id is new; comics already
    /// present (e.g. shared with another character) keep their first record.
    /// The id list is then added for `character` if the name is new. When two
    /// stores for the same character race, one id list is kept and the other
    /// is dropped; comics from both still land in the id table.
    ///
    /// An empty `comics` records nothing.
    ///
    /// # Returns
    /// * `Result<()>` - Always `Ok` today; callers should still check it
    pub fn store_if_absent(&self, character: &str, comics: &[Comic]) -> Result<()> {
        if comics.is_empty() {
            debug!("No comics to store for {}", character);
            return Ok(());
        }

        if self.already_cached(character, comics) {
            self.stats.record_hit();
            debug!("Comics for {} already cached", character);
            return Ok(());
        }
        self.stats.record_miss();

        let mut ids = Vec::with_capacity(comics.len());
        let mut inserted = 0u64;
        {
            let mut by_id = self.by_id.write();
            for comic in comics {
                ids.push(comic.id);
                if let Entry::Vacant(slot) = by_id.entry(comic.id) {
                    slot.insert(comic.clone());
                    inserted += 1;
                }
            }
        }
        let total = self.stats.record_comics(inserted);

        match self.by_character.write().entry(character.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(ids);
                self.stats.record_character();
                info!(
                    "Added {} new comics for {} ({} comics cached)",
                    inserted, character, total
                );
            }
            Entry::Occupied(_) => {
                self.stats.record_conflict();
                debug!("Comic list for {} already present, keeping it", character);
            }
        }

        Ok(())
    }

    /// Decode a comics payload and store its results for `character`
    ///
    /// # Returns
    /// * `Result<usize>` - Number of comics in the payload
    pub fn decode_and_store(&self, character: &str, payload: &[u8]) -> Result<usize> {
        let response = decode_comics(payload)?;
        let comics = response.comics();
        self.store_if_absent(character, comics)?;
        Ok(comics.len())
    }

    /// Get the comic ids stored for `character`
    pub fn comic_ids(&self, character: &str) -> Option<Vec<ComicId>> {
        self.by_character.read().get(character).cloned()
    }

    /// Get a comic by id
    pub fn comic(&self, id: ComicId) -> Option<Comic> {
        self.by_id.read().get(&id).cloned()
    }

    /// Get the comics stored for `character`, in stored order
    pub fn comics_for(&self, character: &str) -> Option<Vec<Comic>> {
        let ids = self.comic_ids(character)?;
        let by_id = self.by_id.read();
        Some(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
    }

    /// Check whether `character` has an entry
    pub fn contains_character(&self, character: &str) -> bool {
        self.by_character.read().contains_key(character)
    }

    /// Names of all cached characters, sorted
    pub fn characters(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_character.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of characters cached
    pub fn character_count(&self) -> usize {
        self.by_character.read().len()
    }

    /// Get the number of distinct comics cached
    pub fn comic_count(&self) -> usize {
        self.by_id.read().len()
    }

    /// Check if nothing has been cached
    pub fn is_empty(&self) -> bool {
        self.character_count() == 0 && self.comic_count() == 0
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl Default for ComicCache {
    fn default() -> Self {
        Self::new()
    }
}
