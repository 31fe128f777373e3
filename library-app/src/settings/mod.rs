// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub(crate) const FILE_NAME: &str = "songlib_settings";

pub(crate) const FILE_SUFFIX: &str = "ron";

pub(crate) const DEFAULT_SONGS_FILE_NAME: &str = "songs";

pub(crate) const DEFAULT_SONGS_FILE_SUFFIX: &str = "txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Settings {
    /// The song list that is loaded on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) songs_file: Option<PathBuf>,
}

impl Settings {
    /// Load the saved settings and fill in defaults.
    ///
    /// Unreadable settings are logged and replaced by defaults.
    #[must_use]
    pub(crate) fn restore(config_dir: &Path, data_dir: &Path) -> Self {
        log::info!("Loading saved settings from: {}", config_dir.display());
        let mut settings = Self::load(config_dir)
            .map_err(|err| {
                log::warn!("Failed to load saved settings: {err}");
            })
            .unwrap_or_default();
        if settings.songs_file.is_none() {
            let songs_file = default_songs_file_path(data_dir.to_path_buf());
            log::info!("Using default song list: {}", songs_file.display());
            settings.songs_file = Some(songs_file);
        }
        debug_assert!(settings.songs_file.is_some());
        settings
    }

    pub(crate) fn load(parent_dir: &Path) -> anyhow::Result<Self> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => ron::from_str(&text).map_err(Into::into),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub(crate) fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Saving current settings into file: {}", file_path.display());
        let text = ron::ser::to_string_pretty(self, Default::default())?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }

    pub(crate) fn update_songs_file(&mut self, new_songs_file: Option<&Path>) -> bool {
        if self.songs_file.as_deref() == new_songs_file {
            return false;
        }
        if let Some(new_songs_file) = new_songs_file {
            log::info!("Updating song list: {}", new_songs_file.display());
        } else {
            log::info!("Resetting song list");
        }
        self.songs_file = new_songs_file.map(Path::to_path_buf);
        true
    }
}

#[must_use]
fn new_settings_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}

#[must_use]
fn default_songs_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(DEFAULT_SONGS_FILE_NAME);
    path_buf.set_extension(DEFAULT_SONGS_FILE_SUFFIX);
    path_buf
}

#[cfg(test)]
mod tests;
