// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use anyhow::anyhow;

use songlib_core::{Song, SongId, Year};
use songlib_repo::{prelude::*, song::SongRepo};

use crate::{InputError, InputResult};

/// A validated request against the song library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SearchByName(String),
    SearchByArtist(String),
    SearchById(SongId),
    DisplayByGenre(String),
    DisplayByIdRange { low: SongId, high: SongId },
    Insert(Song),
    DeleteById(SongId),
    Exit,
}

pub fn parse_song_id(input: &str) -> InputResult<SongId> {
    input
        .parse()
        .map_err(|err| InputError(anyhow!("invalid song id {input:?}: {err}")))
}

pub fn parse_year(input: &str) -> InputResult<Year> {
    input
        .parse()
        .map_err(|err| InputError(anyhow!("invalid year {input:?}: {err}")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Name(String),
    Artist(String),
    Id(SongId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Genre,
    IdRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Song),
    NotFound(Missing),
    Listed { listing: Listing, songs: Vec<Song> },
    Inserted,
    Deleted(SongId),
    NotDeleted(SongId),
    Exit,
}

impl Outcome {
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(song) => write!(f, "{song}"),
            Self::NotFound(Missing::Name(_)) => f.write_str("Song not found."),
            Self::NotFound(Missing::Artist(_)) => f.write_str("Artist not found."),
            Self::NotFound(Missing::Id(id)) => write!(f, "Song with ID {id} not found."),
            Self::Listed { listing, songs } if songs.is_empty() => match listing {
                Listing::Genre => f.write_str("No songs found in the given genre."),
                Listing::IdRange => f.write_str("No songs found in the given ID range."),
            },
            Self::Listed { songs, .. } => songs.iter().try_for_each(|song| writeln!(f, "{song}")),
            Self::Inserted => f.write_str("New song inserted successfully.\n"),
            Self::Deleted(id) => writeln!(f, "Song with ID {id} deleted successfully."),
            Self::NotDeleted(id) => writeln!(f, "Song with ID {id} not found."),
            Self::Exit => f.write_str("Exiting...\n"),
        }
    }
}

fn found_or_missing(song: RepoResult<&Song>, missing: impl FnOnce() -> Missing) -> Outcome {
    song.ok()
        .cloned()
        .map_or_else(|| Outcome::NotFound(missing()), Outcome::Found)
}

fn listed(listing: Listing, songs: Vec<&Song>) -> Outcome {
    let songs = songs.into_iter().cloned().collect();
    Outcome::Listed { listing, songs }
}

pub fn execute<Repo>(repo: &mut Repo, command: Command) -> Outcome
where
    Repo: SongRepo + ?Sized,
{
    log::debug!("Executing {command:?}");
    match command {
        Command::SearchByName(name) => {
            let song = repo.lookup_song_by_name(&name);
            found_or_missing(song, || Missing::Name(name))
        }
        Command::SearchByArtist(artist) => {
            let song = repo.lookup_song_by_artist(&artist);
            found_or_missing(song, || Missing::Artist(artist))
        }
        Command::SearchById(id) => {
            let song = repo.lookup_song_by_id(id);
            found_or_missing(song, || Missing::Id(id))
        }
        Command::DisplayByGenre(genre) => {
            listed(Listing::Genre, repo.filter_songs_by_genre(&genre))
        }
        Command::DisplayByIdRange { low, high } => {
            listed(Listing::IdRange, repo.filter_songs_by_id_range(low, high))
        }
        Command::Insert(song) => {
            log::info!("Inserting {song}");
            repo.insert_song(song);
            Outcome::Inserted
        }
        Command::DeleteById(id) => {
            if repo.delete_song_by_id(id) {
                log::info!("Deleted song with id {id}");
                Outcome::Deleted(id)
            } else {
                Outcome::NotDeleted(id)
            }
        }
        Command::Exit => Outcome::Exit,
    }
}
