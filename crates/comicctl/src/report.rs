//! Cache report printed after loading

use comiccache::{Comic, ComicCache};
use serde::Serialize;

use crate::loader::LoadSummary;

/// Load outcome and cache state after a run
#[derive(Debug, Serialize)]
pub struct Report {
    pub payloads_loaded: usize,
    pub payloads_failed: usize,
    /// Comics across all loaded payloads, duplicates included
    pub comics_seen: usize,
    /// Characters cached
    pub characters: usize,
    /// Distinct comics cached
    pub comics: usize,
    /// Stores skipped because the character was already cached
    pub store_hits: u64,
    pub store_misses: u64,
    pub conflicts: u64,
    /// Characters requested with `--show`
    pub shown: Vec<CharacterReport>,
}

/// Cached comics of one requested character
#[derive(Debug, Serialize)]
pub struct CharacterReport {
    pub name: String,
    /// `None` when the character was never stored
    pub comics: Option<Vec<Comic>>,
}

impl Report {
    /// Collect the report from the cache and the load summary
    pub fn build(cache: &ComicCache, summary: &LoadSummary, show: &[String]) -> Self {
        let stats = cache.stats();

        Self {
            payloads_loaded: summary.loaded,
            payloads_failed: summary.failed,
            comics_seen: summary.comics_seen,
            characters: cache.character_count(),
            comics: cache.comic_count(),
            store_hits: stats.hits(),
            store_misses: stats.misses(),
            conflicts: stats.conflicts(),
            shown: show
                .iter()
                .map(|name| CharacterReport {
                    name: name.clone(),
                    comics: cache.comics_for(name),
                })
                .collect(),
        }
    }

    /// Render the report as plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Payloads:   {} loaded, {} failed, {} comics seen\n",
            self.payloads_loaded, self.payloads_failed, self.comics_seen
        ));
        out.push_str(&format!("Characters: {}\n", self.characters));
        out.push_str(&format!("Comics:     {}\n", self.comics));
        out.push_str(&format!(
            "Stores:     {} cached, {} processed, {} conflicts\n",
            self.store_hits, self.store_misses, self.conflicts
        ));

        for character in &self.shown {
            out.push('\n');
            match &character.comics {
                Some(comics) => {
                    out.push_str(&format!("{} ({} comics)\n", character.name, comics.len()));
                    for comic in comics {
                        out.push_str(&format!("  {:>8}  {}\n", comic.id, comic.title));
                    }
                }
                None => out.push_str(&format!("{}: not cached\n", character.name)),
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with_thor() -> ComicCache {
        let cache = ComicCache::new();
        let comics = vec![
            Comic {
                id: 10,
                title: "Thor #1".to_string(),
                ..Default::default()
            },
            Comic {
                id: 11,
                title: "Thor #2".to_string(),
                ..Default::default()
            },
        ];
        cache.store_if_absent("Thor", &comics).unwrap();
        cache
    }

    #[test]
    fn test_report_text() {
        let cache = cache_with_thor();
        let summary = LoadSummary {
            loaded: 1,
            failed: 0,
            comics_seen: 2,
        };

        let report = Report::build(&cache, &summary, &["Thor".to_string(), "Loki".to_string()]);
        let text = report.render_text();

        assert!(text.contains("1 loaded, 0 failed, 2 comics seen"));
        assert!(text.contains("Characters: 1"));
        assert!(text.contains("Comics:     2"));
        assert!(text.contains("Thor (2 comics)"));
        assert!(text.contains("Thor #2"));
        assert!(text.contains("Loki: not cached"));
    }

    #[test]
    fn test_report_json() {
        let cache = cache_with_thor();
        let report = Report::build(&cache, &LoadSummary::default(), &["Thor".to_string()]);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["characters"], 1);
        assert_eq!(value["store_misses"], 1);
        assert_eq!(value["shown"][0]["comics"][1]["title"], "Thor #2");
    }
}
