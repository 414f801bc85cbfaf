//! Settings infrastructure for spansel.
//!
//! This module provides support for loading and parsing settings.toml files
//! to configure which matchers participate in span selection.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Root settings structure loaded from settings.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Selection configuration.
    pub select: Option<SelectSettings>,
}

/// Selection settings controlling which matchers run.
#[derive(Debug, Default, Deserialize)]
pub struct SelectSettings {
    /// Whether the bracket matcher runs (default: true).
    pub brackets: Option<bool>,

    /// Whether the tag matcher runs (default: true).
    pub tags: Option<bool>,
}

/// Resolved matcher configuration handed to the engine.
///
/// The bracket kinds themselves are fixed; configuration only decides which
/// matchers contribute candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    pub brackets: bool,
    pub tags: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            brackets: true,
            tags: true,
        }
    }
}

impl MatcherConfig {
    /// Resolve settings into a concrete configuration, applying defaults for
    /// anything left unset.
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        match &settings.select {
            Some(select) => Self {
                brackets: select.brackets.unwrap_or(defaults.brackets),
                tags: select.tags.unwrap_or(defaults.tags),
            },
            None => defaults,
        }
    }
}

/// Load settings from a settings.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: failed to parse settings.toml: {}", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover settings.toml by walking up the directory tree from `start_dir`.
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found settings.toml. If not found, returns
/// `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("settings.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    (Settings::default(), start_dir.to_path_buf())
}
