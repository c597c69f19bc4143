// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::Write as _;

use riptag_core::{Link, SiblingTrack};
use tempfile::NamedTempFile;

use super::*;

const TRACK_JSON: &str = r#"{
    "track": {
        "name": "Test",
        "artists": [{ "name": "Artist", "link": "spotify:artist:artist-id" }],
        "index": 2,
        "disc": 1
    },
    "album": {
        "name": "Album",
        "year": 2020,
        "link": "spotify:album:album-id",
        "tracks": [
            { "disc": 1, "index": 1 },
            { "disc": 1, "index": 2 },
            { "disc": 1, "index": 4 }
        ]
    }
}"#;

fn write_temp_file(contents: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn read_track_file_with_album() {
    let temp_file = write_temp_file(TRACK_JSON.as_bytes());
    let TrackFile { track, album } = read_track_file(temp_file.path()).unwrap();
    assert_eq!("Test", track.name);
    assert_eq!(Some("artist-id"), track.artists[0].link.id());
    assert_eq!(Link::default(), track.link);
    assert_eq!(2020, album.year);
    assert_eq!(Some("album-id"), album.link.id());
    assert_eq!(SiblingTrack { disc: 1, index: 4 }, album.tracks[2]);
    assert!(album.cover.is_none());
}

#[test]
fn read_malformed_track_file_fails() {
    let temp_file = write_temp_file(br#"{ "track": {} }"#);
    let err = read_track_file(temp_file.path()).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse track file"));
}

#[test]
fn read_missing_track_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(read_track_file(&temp_dir.path().join("missing.json")).is_err());
}

#[test]
fn read_cover_image() {
    let temp_file = write_temp_file(&[0xFF, 0xD8, 0xFF, 0xE0]);
    let image_data = read_cover_file(temp_file.path()).unwrap();
    assert_eq!(&[0xFF, 0xD8, 0xFF, 0xE0][..], &image_data[..]);
}
