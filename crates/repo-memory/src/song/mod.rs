// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeMap;

use hashbrown::HashMap;

use songlib_core::{Song, SongId};
use songlib_repo::{prelude::*, song::SongRepo};

/// Stable, opaque handle of a stored song.
///
/// Slots are allocated from a monotonically increasing counter and
/// never reused. Their order is the insertion order of the songs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Slot(u64);

impl Slot {
    const fn next(self) -> Self {
        let Self(inner) = self;
        Self(inner + 1)
    }
}

/// In-memory song library with single-valued indexes on name, artist, and id.
///
/// Index entries refer to slots instead of positions. Deleting a song
/// removes the entries for its name, artist, and id. All other entries
/// stay valid without being rewritten.
#[derive(Debug, Default)]
pub struct SongStore {
    songs: BTreeMap<Slot, Song>,
    next_slot: Slot,
    name_index: HashMap<String, Slot>,
    artist_index: HashMap<String, Slot>,
    id_index: HashMap<SongId, Slot>,
}

impl SongStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Iterate over all songs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.values()
    }

    fn allocate_slot(&mut self) -> Slot {
        let slot = self.next_slot;
        self.next_slot = slot.next();
        slot
    }

    fn resolve(&self, slot: Option<&Slot>) -> RepoResult<&Song> {
        let slot = slot.ok_or(RepoError::NotFound)?;
        let song = self.songs.get(slot);
        debug_assert!(song.is_some(), "dangling index entry {slot:?}");
        song.ok_or(RepoError::NotFound)
    }
}

fn link(index: &mut HashMap<String, Slot>, key: &str, slot: Slot) {
    if let Some(shadowed) = index.insert(key.to_owned(), slot) {
        log::debug!("Index entry {key:?} moved from {shadowed:?} to {slot:?}");
    }
}

/// Remove the entry for `key`, even if it refers to a newer song.
fn unlink(index: &mut HashMap<String, Slot>, key: &str, slot: Slot) {
    match index.remove(key) {
        Some(unlinked) if unlinked != slot => {
            log::debug!("Index entry {key:?} of {unlinked:?} removed with {slot:?}");
        }
        _ => (),
    }
}

impl SongRepo for SongStore {
    fn lookup_song_by_name(&self, name: &str) -> RepoResult<&Song> {
        self.resolve(self.name_index.get(name))
    }

    fn lookup_song_by_artist(&self, artist: &str) -> RepoResult<&Song> {
        self.resolve(self.artist_index.get(artist))
    }

    fn lookup_song_by_id(&self, id: SongId) -> RepoResult<&Song> {
        self.resolve(self.id_index.get(&id))
    }

    fn filter_songs_by_genre(&self, genre: &str) -> Vec<&Song> {
        self.iter().filter(|song| song.genre() == genre).collect()
    }

    fn filter_songs_by_id_range(&self, low: SongId, high: SongId) -> Vec<&Song> {
        if low > high {
            return Vec::new();
        }
        self.iter()
            .filter(|song| song.is_in_id_range(low, high))
            .collect()
    }

    fn insert_song(&mut self, song: Song) {
        let slot = self.allocate_slot();
        link(&mut self.name_index, song.name(), slot);
        link(&mut self.artist_index, song.artist(), slot);
        if let Some(shadowed) = self.id_index.insert(song.id(), slot) {
            log::debug!(
                "Song id {id} moved from {shadowed:?} to {slot:?}",
                id = song.id()
            );
        }
        self.songs.insert(slot, song);
    }

    fn delete_song_by_id(&mut self, id: SongId) -> bool {
        let Some(slot) = self.id_index.remove(&id) else {
            return false;
        };
        let Some(song) = self.songs.remove(&slot) else {
            unreachable!("dangling id index entry {slot:?}");
        };
        unlink(&mut self.name_index, song.name(), slot);
        unlink(&mut self.artist_index, song.artist(), slot);
        log::debug!("Deleted song {song} from {slot:?}");
        true
    }

    fn count_songs(&self) -> usize {
        self.len()
    }

    fn load_all_songs(&self) -> Vec<&Song> {
        self.iter().collect()
    }
}

impl Extend<Song> for SongStore {
    fn extend<T: IntoIterator<Item = Song>>(&mut self, iter: T) {
        for song in iter {
            self.insert_song(song);
        }
    }
}

impl FromIterator<Song> for SongStore {
    fn from_iter<T: IntoIterator<Item = Song>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
