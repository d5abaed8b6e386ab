//! # comiccache
//!
//! In-memory comic cache for ComicVault.
//!
//! ## Architecture
//! - **Character table**: character name -> comic ids in API response order
//! - **Comic table**: comic id -> full `Comic` record
//! - **Locking**: each table behind a `parking_lot::RwLock` over an AHash map;
//!   insert-if-absent runs under a single write lock
//!
//! Entries are written once and never updated, evicted or removed.

#![warn(missing_docs)]

mod cache;
mod stats;

pub use cache::ComicCache;
pub use stats::CacheStats;

pub use comicdata::{Comic, ComicId, Error, Result};
