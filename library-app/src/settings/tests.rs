// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn load_missing_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Settings::default(), Settings::load(dir.path()).unwrap());
}

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        songs_file: Some(PathBuf::from("/music/songs.txt")),
    };
    settings.save(dir.path()).unwrap();
    assert_eq!(settings, Settings::load(dir.path()).unwrap());
}

#[test]
fn restore_with_default_songs_file() {
    let config_dir = tempfile::tempdir().unwrap();
    let data_dir = tempfile::tempdir().unwrap();
    let settings = Settings::restore(config_dir.path(), data_dir.path());
    assert_eq!(
        Some(data_dir.path().join("songs.txt")),
        settings.songs_file
    );
}

#[test]
fn restore_ignores_corrupt_settings_file() {
    let config_dir = tempfile::tempdir().unwrap();
    let data_dir = tempfile::tempdir().unwrap();
    fs::write(
        new_settings_file_path(config_dir.path().to_path_buf()),
        "][",
    )
    .unwrap();
    let settings = Settings::restore(config_dir.path(), data_dir.path());
    assert_eq!(
        Some(data_dir.path().join("songs.txt")),
        settings.songs_file
    );
}

#[test]
fn update_songs_file() {
    let mut settings = Settings::default();
    assert!(settings.update_songs_file(Some(Path::new("a.txt"))));
    assert!(!settings.update_songs_file(Some(Path::new("a.txt"))));
    assert!(settings.update_songs_file(None));
    assert_eq!(None, settings.songs_file);
}
