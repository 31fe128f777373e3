// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Song list files contain one song per line with the fields
//! `name;artist;id;genre;year`.
//!
//! Malformed lines are reported and skipped. Only I/O errors abort
//! loading, in which case the library remains untouched.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use derive_more::Display;
use thiserror::Error;

use songlib_core::{Song, SongId, Year};
use songlib_repo::song::SongRepo;

pub const FIELD_SEPARATOR: char = ';';

pub const FIELD_COUNT: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum IntegerField {
    #[display("id")]
    Id,
    #[display("year")]
    Year,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("expected {expected} fields, found {actual}", expected = FIELD_COUNT)]
    FieldCount { actual: usize },

    #[error("{field} is not an integer: {value:?}")]
    Integer { field: IntegerField, value: String },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open song list {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
}

/// A skipped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// 1-based
    pub line_number: usize,
    pub line: String,
    pub malformed: MalformedRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub songs: Vec<Song>,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: Vec<Issue>,
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split a line into fields, discarding trailing empty fields.
fn split_fields(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return vec![line];
    }
    let mut fields: Vec<_> = line.split(FIELD_SEPARATOR).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

fn parse_integer<T: std::str::FromStr>(
    field: IntegerField,
    value: &str,
) -> Result<T, MalformedRecord> {
    value.parse().map_err(|_| MalformedRecord::Integer {
        field,
        value: value.to_owned(),
    })
}

pub fn parse_line(line: &str) -> Result<Song, MalformedRecord> {
    let fields = split_fields(line);
    let &[name, artist, id, genre, year] = fields.as_slice() else {
        return Err(MalformedRecord::FieldCount {
            actual: fields.len(),
        });
    };
    debug_assert_eq!(FIELD_COUNT, fields.len());
    let id: SongId = parse_integer(IntegerField::Id, id)?;
    let year: Year = parse_integer(IntegerField::Year, year)?;
    Ok(Song::new(name, artist, id, genre, year))
}

/// Parse all lines, collecting songs and malformed lines separately.
///
/// Invalid UTF-8 is replaced instead of being rejected.
pub fn parse_songs(mut reader: impl BufRead) -> Result<Parsed, LoadError> {
    let mut parsed = Parsed::default();
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        line_number += 1;
        buf.clear();
        let num_bytes = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Read {
                line_number,
                source,
            })?;
        if num_bytes == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = trim_line_ending(&line);
        match parse_line(line) {
            Ok(song) => parsed.songs.push(song),
            Err(malformed) => {
                log::warn!("Skipping malformed line {line_number}: {malformed}");
                parsed.issues.push(Issue {
                    line_number,
                    line: line.to_owned(),
                    malformed,
                });
            }
        }
    }
    Ok(parsed)
}

pub fn load_songs_from_reader<Repo>(
    repo: &mut Repo,
    reader: impl BufRead,
) -> Result<LoadSummary, LoadError>
where
    Repo: SongRepo + ?Sized,
{
    let Parsed { songs, issues } = parse_songs(reader)?;
    let loaded = songs.len();
    for song in songs {
        repo.insert_song(song);
    }
    log::info!(
        "Loaded {loaded} song(s), skipped {skipped} malformed line(s)",
        skipped = issues.len()
    );
    Ok(LoadSummary {
        loaded,
        skipped: issues,
    })
}

pub fn load_songs_from_file<Repo>(
    repo: &mut Repo,
    path: &Path,
) -> Result<LoadSummary, LoadError>
where
    Repo: SongRepo + ?Sized,
{
    log::info!("Loading songs from file: {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_songs_from_reader(repo, BufReader::new(file))
}

#[cfg(test)]
mod tests;
