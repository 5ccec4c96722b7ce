//! User settings from `config.yaml`, merged with command-line overrides.

use anyhow::{Context, Result};
use clap::ValueEnum;
use puzzle_core::{ColorScheme, RenderOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "puzzle-cards";
const CONFIG_FILE: &str = "config.yaml";
const COLLECTION_FILE: &str = "collection.db";

/// Board colours to use: one scheme, or every scheme in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    All,
    Blue,
    Brown,
    Gray,
    Green,
    Pink,
    Purple,
}

impl Palette {
    pub fn schemes(self) -> Vec<ColorScheme> {
        match self {
            Self::All => ColorScheme::ALL.to_vec(),
            Self::Blue => vec![ColorScheme::Blue],
            Self::Brown => vec![ColorScheme::Brown],
            Self::Gray => vec![ColorScheme::Gray],
            Self::Green => vec![ColorScheme::Green],
            Self::Pink => vec![ColorScheme::Pink],
            Self::Purple => vec![ColorScheme::Purple],
        }
    }
}

/// Contents of the settings file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one sub-directory per profile.
    pub collections_root: PathBuf,
    pub profile: String,
    /// Board size in pixels; 0 leaves the diagram unsized.
    pub board_pixels: u32,
    pub color_scheme: Palette,
    pub coordinates: bool,
    /// Tag added to every imported card; empty disables it.
    pub bookkeeping_tag: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collections_root: default_collections_root(),
            profile: "sandbox".to_string(),
            board_pixels: 380,
            color_scheme: Palette::All,
            coordinates: false,
            bookkeeping_tag: "chess_puzzle".to_string(),
        }
    }
}

fn default_collections_root() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default settings file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Settings {
    /// Load settings. An explicit path must exist; a missing default file
    /// falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                Some(path) => {
                    tracing::warn!(
                        "Settings file not found at {}, using defaults",
                        path.display()
                    );
                    Ok(Self::default())
                }
                None => {
                    tracing::warn!("No config directory on this platform, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(contents)?)
    }
}

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub profile: Option<String>,
    pub collection: Option<PathBuf>,
    pub board_pixels: Option<u32>,
    pub color_scheme: Option<Palette>,
    pub coordinates: Option<bool>,
}

/// Settings for one run after applying overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub collection_path: PathBuf,
    pub board_pixels: Option<u32>,
    pub color_schemes: Vec<ColorScheme>,
    pub coordinates: bool,
    pub bookkeeping_tag: Option<String>,
}

impl EffectiveSettings {
    /// Merge file settings with command-line overrides.
    pub fn merge(settings: &Settings, overrides: &Overrides) -> Self {
        let collection_path = match &overrides.collection {
            Some(path) => path.clone(),
            None => {
                let profile = overrides.profile.as_deref().unwrap_or(&settings.profile);
                settings
                    .collections_root
                    .join(profile)
                    .join(COLLECTION_FILE)
            }
        };

        let pixels = overrides.board_pixels.unwrap_or(settings.board_pixels);
        let tag = settings.bookkeeping_tag.trim();

        Self {
            collection_path,
            board_pixels: (pixels > 0).then_some(pixels),
            color_schemes: overrides
                .color_scheme
                .unwrap_or(settings.color_scheme)
                .schemes(),
            coordinates: overrides.coordinates.unwrap_or(settings.coordinates),
            bookkeeping_tag: (!tag.is_empty()).then(|| tag.to_string()),
        }
    }

    pub fn render_options(&self, base_deck: &str) -> RenderOptions {
        RenderOptions {
            base_deck: base_deck.to_string(),
            board_pixels: self.board_pixels,
            coordinates: self.coordinates,
            color_schemes: self.color_schemes.clone(),
            bookkeeping_tag: self.bookkeeping_tag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::parse("profile: main\ncolor_scheme: green\n").unwrap();
        assert_eq!(settings.profile, "main");
        assert_eq!(settings.color_scheme, Palette::Green);
        assert_eq!(settings.board_pixels, 380);
        assert_eq!(settings.bookkeeping_tag, "chess_puzzle");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::parse("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_bad_value_is_error() {
        assert!(Settings::parse("board_pixels: large\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "coordinates: true\nbookkeeping_tag: ''\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert!(settings.coordinates);
        assert!(settings.bookkeeping_tag.is_empty());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("nope.yaml"))).is_err());
    }

    #[test]
    fn test_collection_path_from_profile() {
        let settings = Settings {
            collections_root: PathBuf::from("/data"),
            ..Settings::default()
        };
        let effective = EffectiveSettings::merge(&settings, &Overrides::default());
        assert_eq!(
            effective.collection_path,
            PathBuf::from("/data/sandbox/collection.db")
        );

        let overrides = Overrides {
            profile: Some("main".to_string()),
            ..Overrides::default()
        };
        let effective = EffectiveSettings::merge(&settings, &overrides);
        assert_eq!(
            effective.collection_path,
            PathBuf::from("/data/main/collection.db")
        );
    }

    #[test]
    fn test_explicit_collection_wins() {
        let overrides = Overrides {
            profile: Some("main".to_string()),
            collection: Some(PathBuf::from("/tmp/c.db")),
            ..Overrides::default()
        };
        let effective = EffectiveSettings::merge(&Settings::default(), &overrides);
        assert_eq!(effective.collection_path, PathBuf::from("/tmp/c.db"));
    }

    #[test]
    fn test_overrides_beat_file() {
        let settings = Settings {
            board_pixels: 200,
            color_scheme: Palette::Blue,
            ..Settings::default()
        };
        let overrides = Overrides {
            board_pixels: Some(0),
            color_scheme: Some(Palette::All),
            coordinates: Some(true),
            ..Overrides::default()
        };
        let effective = EffectiveSettings::merge(&settings, &overrides);
        assert_eq!(effective.board_pixels, None);
        assert_eq!(effective.color_schemes.len(), 6);
        assert!(effective.coordinates);
        assert_eq!(effective.bookkeeping_tag.as_deref(), Some("chess_puzzle"));
    }

    #[test]
    fn test_render_options() {
        let settings = Settings {
            color_scheme: Palette::Pink,
            bookkeeping_tag: String::new(),
            ..Settings::default()
        };
        let options =
            EffectiveSettings::merge(&settings, &Overrides::default()).render_options("Tactics");
        assert_eq!(options.base_deck, "Tactics");
        assert_eq!(options.board_pixels, Some(380));
        assert_eq!(options.color_schemes, vec![ColorScheme::Pink]);
        assert_eq!(options.bookkeeping_tag, None);
    }
}
