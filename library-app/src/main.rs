// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{io, path::Path};

use anyhow::Context as _;
use clap::Parser as _;
use directories::ProjectDirs;
use log::LevelFilter;

use songlib::{
    repo_memory::SongStore,
    usecases::song::{command::execute, load::load_songs_from_file},
};

mod cli;
use self::cli::{Args, CliCommand};

mod menu;
use self::menu::Session;

mod settings;
use self::settings::Settings;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let Args {
        songs_file,
        config_dir,
        command,
    } = Args::parse();

    let app_dirs = app_dirs().context("application directories are unavailable")?;
    let config_dir = config_dir.unwrap_or_else(|| app_dirs.config_local_dir().to_path_buf());
    init_app_dir(&config_dir);
    let data_dir = app_dirs.data_local_dir();
    init_app_dir(data_dir);

    let mut settings = Settings::restore(&config_dir, data_dir);
    if let Some(songs_file) = songs_file.as_deref() {
        settings.update_songs_file(Some(songs_file));
    }
    if let Err(err) = settings.save(&config_dir) {
        log::warn!("Failed to save settings: {err}");
    }

    let mut store = SongStore::new();
    if let Some(songs_file) = settings.songs_file.as_deref() {
        load_library(&mut store, songs_file);
    }

    match command.and_then(CliCommand::into_command) {
        Some(command) => {
            let outcome = execute(&mut store, command).to_string();
            if outcome.ends_with('\n') {
                print!("{outcome}");
            } else {
                println!("{outcome}");
            }
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&mut store, stdin.lock(), stdout.lock())
                .run()
                .context("interactive session")?;
        }
    }
    Ok(())
}

fn load_library(store: &mut SongStore, songs_file: &Path) {
    match load_songs_from_file(store, songs_file) {
        Ok(summary) => {
            if !summary.skipped.is_empty() {
                log::warn!(
                    "Skipped {count} malformed line(s) in {path}",
                    count = summary.skipped.len(),
                    path = songs_file.display()
                );
            }
        }
        Err(err) => {
            log::error!("Failed to load songs: {err}");
        }
    }
}

#[must_use]
const fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

#[must_use]
fn app_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", app_name())
}

fn init_app_dir(app_dir: &Path) {
    if let Err(err) = std::fs::create_dir_all(app_dir) {
        log::error!(
            "Failed to create app directory '{dir}': {err}",
            dir = app_dir.display(),
        );
    } else {
        debug_assert!(app_dir.exists());
    }
}
