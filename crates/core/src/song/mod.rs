// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use derive_more::{Display, From, FromStr};

///////////////////////////////////////////////////////////////////////
// SongId
///////////////////////////////////////////////////////////////////////

/// Numeric song identifier.
///
/// Serves as the primary lookup key of a song, although uniqueness
/// is not enforced: a library may contain multiple songs with the
/// same id of which only the most recently added one is reachable
/// through the id index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, FromStr)]
#[repr(transparent)]
pub struct SongId(i32);

impl SongId {
    #[must_use]
    pub const fn new(inner: i32) -> Self {
        Self(inner)
    }

    #[must_use]
    pub const fn to_inner(self) -> i32 {
        let Self(inner) = self;
        inner
    }
}

impl From<SongId> for i32 {
    fn from(from: SongId) -> Self {
        from.to_inner()
    }
}

pub type Year = i32;

///////////////////////////////////////////////////////////////////////
// Song
///////////////////////////////////////////////////////////////////////

/// A single entry of the music library.
///
/// Songs are immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    name: String,
    artist: String,
    id: SongId,
    genre: String,
    year: Year,
}

impl Song {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        id: impl Into<SongId>,
        genre: impl Into<String>,
        year: Year,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            id: id.into(),
            genre: genre.into(),
            year,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub const fn id(&self) -> SongId {
        self.id
    }

    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn is_in_id_range(&self, low: SongId, high: SongId) -> bool {
        low <= self.id && self.id <= high
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            artist,
            id,
            genre,
            year,
        } = self;
        write!(
            f,
            "Song{{songName='{name}', artist='{artist}', id={id}, genre='{genre}', year={year}}}"
        )
    }
}
