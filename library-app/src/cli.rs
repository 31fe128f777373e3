// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use songlib::{SongId, usecases::song::command::Command};

#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Args {
    /// Song list to load instead of the one from the settings
    #[arg(long, value_name = "PATH")]
    pub(crate) songs_file: Option<PathBuf>,

    /// Directory of the settings file
    #[arg(long, value_name = "DIR")]
    pub(crate) config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Option<CliCommand>,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum CliCommand {
    /// Search a song by its name
    SearchName { name: String },
    /// Search a song by its artist
    SearchArtist { artist: String },
    /// Search a song by its id
    SearchId {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// Display all songs of a genre
    Genre { genre: String },
    /// Display all songs with ids between LOW and HIGH (inclusive)
    IdRange {
        #[arg(allow_negative_numbers = true)]
        low: i32,
        #[arg(allow_negative_numbers = true)]
        high: i32,
    },
    /// Interactive menu (default)
    Menu,
}

impl CliCommand {
    /// The corresponding library command, `None` for the interactive menu.
    #[must_use]
    pub(crate) fn into_command(self) -> Option<Command> {
        let command = match self {
            Self::SearchName { name } => Command::SearchByName(name),
            Self::SearchArtist { artist } => Command::SearchByArtist(artist),
            Self::SearchId { id } => Command::SearchById(SongId::new(id)),
            Self::Genre { genre } => Command::DisplayByGenre(genre),
            Self::IdRange { low, high } => Command::DisplayByIdRange {
                low: SongId::new(low),
                high: SongId::new(high),
            },
            Self::Menu => return None,
        };
        Some(command)
    }
}
