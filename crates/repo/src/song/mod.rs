// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use songlib_core::{Song, SongId};

use crate::prelude::*;

/// Indexed access to the songs of a library.
///
/// Songs are kept in insertion order. Each of the keys name, artist,
/// and id is indexed with a single value per key: only the most recently
/// inserted song with a given key is reachable through the corresponding
/// lookup. Songs that have been shadowed by a newer insertion remain
/// in the library and are still returned by the filter operations.
pub trait SongRepo {
    fn lookup_song_by_name(&self, name: &str) -> RepoResult<&Song>;

    fn lookup_song_by_artist(&self, artist: &str) -> RepoResult<&Song>;

    fn lookup_song_by_id(&self, id: SongId) -> RepoResult<&Song>;

    /// All songs with exactly the given genre (case-sensitive)
    /// in insertion order.
    fn filter_songs_by_genre(&self, genre: &str) -> Vec<&Song>;

    /// All songs with `low <= id <= high` in insertion order.
    ///
    /// The result is empty if `low > high`.
    fn filter_songs_by_id_range(&self, low: SongId, high: SongId) -> Vec<&Song>;

    /// Append a song and make it reachable through all indexes.
    ///
    /// Duplicate keys are not rejected. The index entries of a previously
    /// inserted song with the same key are replaced silently.
    fn insert_song(&mut self, song: Song);

    /// Delete the song that is currently indexed by `id`.
    ///
    /// Returns `false` without any modification if no song is
    /// indexed by `id`.
    fn delete_song_by_id(&mut self, id: SongId) -> bool;

    fn count_songs(&self) -> usize;

    /// All songs in insertion order.
    fn load_all_songs(&self) -> Vec<&Song>;
}
