//! Payload loading for comicctl

use anyhow::{Context, Result};
use comiccache::ComicCache;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

/// A payload file and the character it belongs to (`CHARACTER=PATH`)
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadSpec {
    pub character: String,
    pub path: PathBuf,
}

impl FromStr for PayloadSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (character, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected CHARACTER=PATH, got '{}'", s))?;

        let character = character.trim();
        if character.is_empty() {
            return Err(format!("missing character name in '{}'", s));
        }
        if path.is_empty() {
            return Err(format!("missing payload path in '{}'", s));
        }

        Ok(Self {
            character: character.to_string(),
            path: PathBuf::from(path),
        })
    }
}

/// Outcome of a batch load
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadSummary {
    /// Payloads decoded and stored
    pub loaded: usize,
    /// Payloads that could not be read or decoded
    pub failed: usize,
    /// Comics seen across loaded payloads
    pub comics_seen: usize,
}

/// Read one payload file and store its comics
pub async fn load_payload(cache: &ComicCache, spec: &PayloadSpec) -> Result<usize> {
    let payload = tokio::fs::read(&spec.path)
        .await
        .with_context(|| format!("Failed to read {}", spec.path.display()))?;

    let count = cache
        .decode_and_store(&spec.character, &payload)
        .with_context(|| format!("Failed to decode {}", spec.path.display()))?;

    info!(
        "Loaded {} comics for {} from {}",
        count,
        spec.character,
        spec.path.display()
    );
    Ok(count)
}

/// Load all payloads, running at most `workers` at once
pub async fn load_all(
    cache: Arc<ComicCache>,
    specs: Vec<PayloadSpec>,
    workers: usize,
) -> LoadSummary {
    let permits = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = JoinSet::new();

    for spec in specs {
        let cache = Arc::clone(&cache);
        let permits = Arc::clone(&permits);

        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await?;
            load_payload(&cache, &spec).await
        });
    }

    let mut summary = LoadSummary::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(count)) => {
                summary.loaded += 1;
                summary.comics_seen += count;
            }
            Ok(Err(e)) => {
                error!("{:#}", e);
                summary.failed += 1;
            }
            Err(e) => {
                error!("Load task failed: {}", e);
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_payload(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_parse_payload_spec() {
        let spec: PayloadSpec = "Spider-Man=data/spidey.json".parse().unwrap();
        assert_eq!(spec.character, "Spider-Man");
        assert_eq!(spec.path, PathBuf::from("data/spidey.json"));

        // Only the first '=' separates the name
        let spec: PayloadSpec = "Thor=a=b.json".parse().unwrap();
        assert_eq!(spec.path, PathBuf::from("a=b.json"));
    }

    #[test]
    fn test_parse_payload_spec_invalid() {
        assert!("spidey.json".parse::<PayloadSpec>().is_err());
        assert!("=spidey.json".parse::<PayloadSpec>().is_err());
        assert!("Spider-Man=".parse::<PayloadSpec>().is_err());
    }

    #[tokio::test]
    async fn test_load_payload() {
        let dir = TempDir::new().unwrap();
        let path = write_payload(
            &dir,
            "spidey.json",
            r#"{"data":{"results":[{"id":1,"title":"ASM #1"},{"id":2,"title":"ASM #2"}]}}"#,
        );
        let cache = ComicCache::new();
        let spec = PayloadSpec {
            character: "Spider-Man".to_string(),
            path,
        };

        assert_eq!(load_payload(&cache, &spec).await.unwrap(), 2);
        assert_eq!(cache.comic_ids("Spider-Man"), Some(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_load_payload_missing_file() {
        let dir = TempDir::new().unwrap();
        let cache = ComicCache::new();
        let spec = PayloadSpec {
            character: "Thor".to_string(),
            path: dir.path().join("missing.json"),
        };

        let err = load_payload(&cache, &spec).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_load_all_counts_failures() {
        let dir = TempDir::new().unwrap();
        let thor = write_payload(&dir, "thor.json", r#"{"data":{"results":[{"id":10},{"id":42}]}}"#);
        let hulk = write_payload(&dir, "hulk.json", r#"{"data":{"results":[{"id":42},{"id":11}]}}"#);
        let broken = write_payload(&dir, "broken.json", r#"{"data":{"results":["#);

        let specs = vec![
            PayloadSpec { character: "Thor".to_string(), path: thor },
            PayloadSpec { character: "Hulk".to_string(), path: hulk },
            PayloadSpec { character: "Loki".to_string(), path: broken },
        ];

        let cache = Arc::new(ComicCache::new());
        let summary = load_all(Arc::clone(&cache), specs, 2).await;

        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.comics_seen, 4);
        assert_eq!(cache.character_count(), 2);
        assert_eq!(cache.comic_count(), 3);
        assert!(!cache.contains_character("Loki"));
    }
}
