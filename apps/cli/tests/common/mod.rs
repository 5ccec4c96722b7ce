//! Shared setup for integration tests.
//!
//! Every test gets its own temporary directory holding a fresh collection
//! and whatever puzzle files it writes.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use puzzle_cards_lib::commands::init_collection;
use puzzle_cards_lib::config::{EffectiveSettings, Overrides, Settings};
use puzzle_cards_lib::db::SqliteStore;
use tempfile::TempDir;

pub struct TestContext {
    dir: TempDir,
    pub collection: PathBuf,
}

impl TestContext {
    /// Temporary directory with an empty collection in it.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let collection = dir.path().join("sandbox").join("collection.db");
        init_collection(&collection).expect("create collection");
        Self { dir, collection }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a puzzle file and return its path.
    pub fn write_puzzles(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("write puzzle file");
        path
    }

    /// Default settings pointed at this context's collection.
    pub fn settings(&self) -> EffectiveSettings {
        let overrides = Overrides {
            collection: Some(self.collection.clone()),
            ..Overrides::default()
        };
        EffectiveSettings::merge(&Settings::default(), &overrides)
    }

    /// Empty settings file, so tests never read the user's real one.
    pub fn config_file(&self) -> PathBuf {
        self.write_puzzles("config.yaml", "")
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.collection).expect("open collection")
    }
}
