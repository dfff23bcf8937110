//! End-to-end export of one mode.
//!
//! Runs locate → extract → resolve → build → write. Nothing is written
//! unless every step succeeds.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::{CatalogResolver, CatalogTransport};
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::mode::ExportMode;
use crate::playlist::{Playlist, write_playlist};
use crate::source::{Prompter, extract_hashes, locate_source};

/// What an export produced
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub mode: ExportMode,
    /// Hashes extracted from the source file
    pub found: usize,
    /// Songs written to the playlist
    pub exported: usize,
    /// Hashes the catalog could not resolve
    pub skipped: Vec<String>,
    pub path: PathBuf,
}

pub struct Exporter<T: CatalogTransport> {
    config: ExportConfig,
    resolver: CatalogResolver<T>,
}

impl<T: CatalogTransport> Exporter<T> {
    /// Create an exporter issuing catalog requests through `transport`
    pub fn new(config: ExportConfig, transport: T) -> Self {
        let resolver = CatalogResolver::new(transport, config.catalog_url.clone());
        Self { config, resolver }
    }

    pub fn run(&self, mode: ExportMode, prompter: &dyn Prompter) -> Result<ExportSummary> {
        self.run_at(mode, prompter, Utc::now())
    }

    /// Run an export stamped with `exported_at`
    pub fn run_at(
        &self,
        mode: ExportMode,
        prompter: &dyn Prompter,
        exported_at: DateTime<Utc>,
    ) -> Result<ExportSummary> {
        let source = locate_source(mode, &self.config, prompter)?;
        let hashes = extract_hashes(mode, &source, prompter)?;
        prompter.display_message(&format!(
            "Found {} maps, looking them up on BeatSaver...",
            hashes.len()
        ));

        let resolution = self.resolver.resolve(&hashes)?;
        if resolution.maps.is_empty() {
            return Err(Error::NoMapsFound(mode));
        }

        let playlist = Playlist::build(mode, resolution.maps, exported_at);
        let path = write_playlist(&playlist, &self.config.output_dir, mode, exported_at)?;
        info!("{} export finished: {}", mode, path.display());

        Ok(ExportSummary {
            mode,
            found: hashes.len(),
            exported: playlist.len(),
            skipped: resolution.skipped,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogResponse;
    use crate::source::testing::ScriptedPrompter;
    use std::cell::Cell;
    use std::fs;

    /// Catalog that knows every hash except "missing"
    #[derive(Default)]
    struct StubCatalog {
        calls: Cell<usize>,
    }

    impl CatalogTransport for StubCatalog {
        fn get(&self, url: &str) -> Result<CatalogResponse> {
            self.calls.set(self.calls.get() + 1);
            let hashes: Vec<&str> = url.rsplit('/').next().unwrap_or("").split(',').collect();
            let body = if let [hash] = hashes.as_slice() {
                if *hash == "missing" {
                    serde_json::json!({"error": "Not Found"})
                } else {
                    serde_json::json!({"id": format!("k{}", hash.len()), "name": hash})
                }
            } else {
                let entries: serde_json::Map<String, serde_json::Value> = hashes
                    .iter()
                    .map(|h| {
                        let value = if *h == "missing" {
                            serde_json::Value::Null
                        } else {
                            serde_json::json!({"id": format!("{}", h.len()), "name": h})
                        };
                        (h.to_string(), value)
                    })
                    .collect();
                serde_json::Value::Object(entries)
            };
            Ok(CatalogResponse::ok(body.to_string()))
        }
    }

    fn game_dir(votes: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("UserData")).unwrap();
        fs::write(dir.path().join("UserData").join("votedSongs.json"), votes).unwrap();
        dir
    }

    #[test]
    fn test_export_upvotes() {
        let game = game_dir(
            r#"{"aaaa":{"voteType":"Upvote"},"bb":{"voteType":"upvote"},
                "missing":{"voteType":"Upvote"},"cc":{"voteType":"Downvote"}}"#,
        );
        let out = tempfile::tempdir().unwrap();
        let config = ExportConfig::builder()
            .game_dir(game.path())
            .output_dir(out.path())
            .build();
        let exporter = Exporter::new(config, StubCatalog::default());
        let prompter = ScriptedPrompter::default();

        let summary = exporter.run(ExportMode::Upvotes, &prompter).unwrap();
        assert_eq!(summary.found, 3);
        assert_eq!(summary.exported, 2);
        assert_eq!(summary.skipped, vec!["missing"]);
        assert!(summary.path.starts_with(out.path()));

        let playlist =
            Playlist::from_json(&fs::read_to_string(&summary.path).unwrap()).unwrap();
        let keys: Vec<&str> = playlist.songs.iter().map(|s| s.beat_saver_id.as_str()).collect();
        assert_eq!(keys, vec!["2", "4"]);
        assert!(playlist.title.starts_with("Upvotes ("));
    }

    #[test]
    fn test_no_maps_found_before_any_request() {
        let game = game_dir(r#"{"aaaa":{"voteType":"Upvote"}}"#);
        let out = tempfile::tempdir().unwrap();
        let config = ExportConfig::builder()
            .game_dir(game.path())
            .output_dir(out.path())
            .build();
        let catalog = StubCatalog::default();
        let exporter = Exporter::new(config, &catalog);

        let err = exporter
            .run(ExportMode::Downvotes, &ScriptedPrompter::default())
            .unwrap_err();
        assert!(matches!(err, Error::NoMapsFound(ExportMode::Downvotes)));
        assert_eq!(catalog.calls.get(), 0);
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_nothing_resolved_writes_nothing() {
        let game = game_dir(r#"{"missing":{"voteType":"Upvote"}}"#);
        let out = tempfile::tempdir().unwrap();
        let config = ExportConfig::builder()
            .game_dir(game.path())
            .output_dir(out.path())
            .build();
        let exporter = Exporter::new(config, StubCatalog::default());

        let err = exporter
            .run(ExportMode::Upvotes, &ScriptedPrompter::default())
            .unwrap_err();
        assert!(matches!(err, Error::NoMapsFound(_)));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_favorites_with_player_choice() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("PlayerData.dat");
        fs::write(
            &profile,
            r#"{"localPlayers":[
                {"playerId":"1","playerName":"A","favoritesLevelIds":["custom_level_AAA"]},
                {"playerId":"2","playerName":"B","favoritesLevelIds":["custom_level_BB","Level1"]}
            ]}"#,
        )
        .unwrap();
        let config = ExportConfig::builder()
            .player_data_path(&profile)
            .output_dir(dir.path().join("out"))
            .build();
        let exporter = Exporter::new(config, StubCatalog::default());
        let prompter = ScriptedPrompter::new(&["1"]);

        let summary = exporter.run(ExportMode::Favorites, &prompter).unwrap();
        assert_eq!(summary.found, 1);
        assert_eq!(summary.exported, 1);

        let playlist =
            Playlist::from_json(&fs::read_to_string(&summary.path).unwrap()).unwrap();
        assert_eq!(playlist.songs[0].hash, "BB");
        assert_eq!(playlist.songs[0].name, "BB");
    }
}
