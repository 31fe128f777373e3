// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use songlib_repo::prelude::RepoError;
use songlib_repo_memory::SongStore;

use super::*;

#[test]
fn parse_valid_line() {
    assert_eq!(
        Ok(Song::new("A", "X", 1, "Rock", 2000)),
        parse_line("A;X;1;Rock;2000")
    );
}

#[test]
fn parse_line_with_too_few_fields() {
    assert_eq!(
        Err(MalformedRecord::FieldCount { actual: 3 }),
        parse_line("OnlyThreeFields;X;1")
    );
}

#[test]
fn field_count_message() {
    assert_eq!(
        "expected 5 fields, found 3",
        MalformedRecord::FieldCount { actual: 3 }.to_string()
    );
}

#[test]
fn parse_line_with_too_many_fields() {
    assert_eq!(
        Err(MalformedRecord::FieldCount { actual: 6 }),
        parse_line("A;X;1;Rock;2000;extra")
    );
}

#[test]
fn trailing_empty_fields_are_discarded() {
    assert_eq!(
        Ok(Song::new("A", "X", 1, "Rock", 2000)),
        parse_line("A;X;1;Rock;2000;;")
    );
    assert_eq!(
        Err(MalformedRecord::FieldCount { actual: 3 }),
        parse_line("A;X;1;;")
    );
    assert_eq!(
        Err(MalformedRecord::FieldCount { actual: 1 }),
        parse_line("")
    );
}

#[test]
fn inner_empty_fields_are_kept() {
    assert_eq!(
        Ok(Song::new("", "X", 1, "", 2000)),
        parse_line(";X;1;;2000")
    );
}

#[test]
fn parse_line_with_invalid_integers() {
    assert_eq!(
        Err(MalformedRecord::Integer {
            field: IntegerField::Id,
            value: "one".to_owned(),
        }),
        parse_line("A;X;one;Rock;2000")
    );
    assert_eq!(
        Err(MalformedRecord::Integer {
            field: IntegerField::Year,
            value: " 2000".to_owned(),
        }),
        parse_line("A;X;1;Rock; 2000")
    );
}

#[test]
fn malformed_lines_do_not_abort_parsing() {
    let input = "A;X;1;Rock;2000\nOnlyThreeFields;X;1\nB;Y;2;Pop;2001\r\nC;Z;x;Pop;2002\n";
    let Parsed { songs, issues } = parse_songs(input.as_bytes()).unwrap();
    assert_eq!(
        vec![
            Song::new("A", "X", 1, "Rock", 2000),
            Song::new("B", "Y", 2, "Pop", 2001),
        ],
        songs
    );
    assert_eq!(
        vec![2, 4],
        issues
            .iter()
            .map(|issue| issue.line_number)
            .collect::<Vec<_>>()
    );
    assert_eq!("OnlyThreeFields;X;1", issues[0].line);
}

#[test]
fn last_line_without_line_ending() {
    let Parsed { songs, issues } = parse_songs("A;X;1;Rock;2000\nB;Y;2;Pop;2001".as_bytes()).unwrap();
    assert_eq!(2, songs.len());
    assert!(issues.is_empty());
}

#[test]
fn load_into_repo() {
    let mut store = SongStore::new();
    let summary =
        load_songs_from_reader(&mut store, "A;X;1;Rock;2000\nB;Y;2;Pop;2001\n\n".as_bytes())
            .unwrap();
    assert_eq!(2, summary.loaded);
    assert_eq!(1, summary.skipped.len());
    assert_eq!(3, summary.skipped[0].line_number);
    assert_eq!("A", store.lookup_song_by_id(SongId::new(1)).unwrap().name());
    assert_eq!(
        Err(RepoError::NotFound),
        store.lookup_song_by_id(SongId::new(3))
    );
}
