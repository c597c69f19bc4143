// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bytes::Bytes;
use riptag_core::{
    Index, Indexes,
    text::{AsciiFallback, FoldedText},
};

use super::*;

#[derive(Default)]
struct RecordingStage {
    fields: Vec<String>,
}

impl StageTag for RecordingStage {
    fn stage(&mut self, field: TagField<'_>) -> Result<()> {
        self.fields.push(format!("{field:?}"));
        Ok(())
    }
}

fn new_metadata() -> ResolvedMetadata {
    let fallback = AsciiFallback::Replace;
    ResolvedMetadata {
        album: FoldedText::new("Björk Album", fallback),
        artist: FoldedText::new("Björk", fallback),
        title: FoldedText::new("Jóga", fallback),
        indexes: Indexes {
            disc: Index::new(1, 1),
            track: Index::new(2, 4),
        },
        year: 1997,
        genres: ResolvedMetadata::fold_genres(
            ["Art Pop".to_owned(), "Électronique".to_owned()],
            fallback,
        ),
        cover: None,
    }
}

#[test]
fn tag_format_from_str() {
    assert_eq!(TagFormat::Id3v2, "id3v2".parse::<TagFormat>().unwrap());
    assert_eq!(TagFormat::VorbisComments, "vorbis".parse::<TagFormat>().unwrap());
    assert_eq!(TagFormat::Id3v2, TagFormat::default());
}

#[test]
fn stage_all_fields_in_original_variant() {
    let mut stage = RecordingStage::default();
    stage_metadata(&mut stage, &new_metadata(), TextVariant::Original).unwrap();
    assert_eq!(
        vec![
            r#"Album("Björk Album")"#,
            r#"Title("Jóga")"#,
            r#"Artist("Björk")"#,
            "ReleaseYear(1997)",
            "Disc(Index { number: 1, total: 1 })",
            "Track(Index { number: 2, total: 4 })",
            r#"Genres(["Art Pop", "Électronique"])"#,
        ],
        stage.fields
    );
}

#[test]
fn stage_ascii_variant_only_ascii() {
    let mut stage = RecordingStage::default();
    stage_metadata(&mut stage, &new_metadata(), TextVariant::Ascii).unwrap();
    assert!(stage.fields.iter().all(|field| field.is_ascii()));
    assert!(stage.fields.contains(&r#"Artist("Bj?rk")"#.to_owned()));
    assert!(
        stage
            .fields
            .contains(&r#"Genres(["Art Pop", "?lectronique"])"#.to_owned())
    );
}

#[test]
fn stage_without_genres() {
    let mut metadata = new_metadata();
    metadata.genres.clear();
    let mut stage = RecordingStage::default();
    stage_metadata(&mut stage, &metadata, TextVariant::Original).unwrap();
    assert_eq!(6, stage.fields.len());
    assert!(!stage.fields.iter().any(|field| field.starts_with("Genres")));
}

#[test]
fn stage_front_cover_first() {
    let mut metadata = new_metadata();
    metadata.cover = Some(Bytes::from_static(&[0xFF, 0xD8]));
    let mut stage = RecordingStage::default();
    stage_metadata(&mut stage, &metadata, TextVariant::Original).unwrap();
    assert_eq!(8, stage.fields.len());
    assert!(stage.fields[0].starts_with("FrontCover"));
}
