// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    ogg::OggPictureStorage as _,
    picture::{MimeType, Picture, PictureType},
};
use riptag_core::Index;

use super::*;

#[test]
fn stage_positions_in_separate_fields() {
    let mut stage = VorbisCommentStage::default();
    stage.stage(TagField::Disc(Index::new(1, 1))).unwrap();
    stage.stage(TagField::Track(Index::new(2, 4))).unwrap();
    let comments = stage.comments();
    assert_eq!(Some("1"), comments.get(DISC_NUMBER_KEY));
    assert_eq!(Some("1"), comments.get(DISC_TOTAL_KEY));
    assert_eq!(Some("2"), comments.get(TRACK_NUMBER_KEY));
    assert_eq!(Some("4"), comments.get(TRACK_TOTAL_KEY));
}

#[test]
fn stage_unknown_totals_as_zero() {
    let mut stage = VorbisCommentStage::default();
    stage.stage(TagField::Track(Index::new(9, 0))).unwrap();
    assert_eq!(Some("9"), stage.comments().get(TRACK_NUMBER_KEY));
    assert_eq!(Some("0"), stage.comments().get(TRACK_TOTAL_KEY));
}

#[test]
fn stage_text_fields() {
    let mut stage = VorbisCommentStage::default();
    stage.stage(TagField::Album("Album")).unwrap();
    stage.stage(TagField::Title("Test")).unwrap();
    stage.stage(TagField::Artist("Artist")).unwrap();
    stage.stage(TagField::ReleaseYear(2020)).unwrap();
    let comments = stage.comments();
    assert_eq!(Some("Album"), comments.get(ALBUM_KEY));
    assert_eq!(Some("Test"), comments.get(TITLE_KEY));
    assert_eq!(Some("Artist"), comments.get(ARTIST_KEY));
    assert_eq!(Some("2020"), comments.get(YEAR_KEY));
}

#[test]
fn stage_replaces_existing_values() {
    let mut comments = VorbisComments::default();
    comments.push(TITLE_KEY.to_owned(), "Old".to_owned());
    comments.push(TITLE_KEY.to_owned(), "Older".to_owned());
    let mut stage = VorbisCommentStage::new(comments);
    stage.stage(TagField::Title("New")).unwrap();
    assert_eq!(
        vec!["New"],
        stage.comments().get_all(TITLE_KEY).collect::<Vec<_>>()
    );
}

#[test]
fn stage_genres_joined() {
    let mut stage = VorbisCommentStage::default();
    stage
        .stage(TagField::Genres(vec!["Rock", "Pop", "Jazz"]))
        .unwrap();
    assert_eq!(Some("Rock, Pop, Jazz"), stage.comments().get(GENRE_KEY));
    assert_eq!(1, stage.comments().get_all(GENRE_KEY).count());
}

#[test]
fn stage_front_cover() {
    let image_data = [0xFF, 0xD8, 0xFF, 0xE0];
    let mut stage = VorbisCommentStage::default();
    stage.stage(TagField::FrontCover(&image_data)).unwrap();
    let pictures = stage.comments().pictures();
    assert_eq!(1, pictures.len());
    let (picture, _) = &pictures[0];
    assert_eq!(PictureType::CoverFront, picture.pic_type());
    assert_eq!(Some(&MimeType::Jpeg), picture.mime_type());
    assert_eq!(Some("Front Cover"), picture.description());
    assert_eq!(&image_data, picture.data());
}

#[test]
fn stage_front_cover_replaces_only_front_cover() {
    let mut comments = VorbisComments::default();
    let back_cover = Picture::new_unchecked(
        PictureType::CoverBack,
        Some(MimeType::Jpeg),
        None,
        vec![0xFF, 0xD8, 0xFF, 0xE1],
    );
    comments
        .insert_picture(back_cover, Some(PictureInformation::default()))
        .unwrap();
    let mut stage = VorbisCommentStage::new(comments);
    stage
        .stage(TagField::FrontCover(&[0xFF, 0xD8, 0xFF, 0xE0]))
        .unwrap();
    stage
        .stage(TagField::FrontCover(&[0xFF, 0xD8, 0xFF, 0xDB]))
        .unwrap();
    let pictures = stage.comments().pictures();
    assert_eq!(2, pictures.len());
    assert_eq!(PictureType::CoverBack, pictures[0].0.pic_type());
    assert_eq!(PictureType::CoverFront, pictures[1].0.pic_type());
    assert_eq!(&[0xFF, 0xD8, 0xFF, 0xDB], pictures[1].0.data());
}

#[test]
fn summary_of_new_comments_without_vendor() {
    let mut stage = VorbisCommentStage::default();
    stage.stage(TagField::Title("Test")).unwrap();
    assert_eq!("Vorbis comments", stage.summary());
}

#[test]
fn summary_with_vendor() {
    let mut comments = VorbisComments::default();
    comments.set_vendor("reference libFLAC 1.4.3 20230623".to_owned());
    let stage = VorbisCommentStage::new(comments);
    assert_eq!(
        "Vorbis comments - reference libFLAC 1.4.3 20230623",
        stage.summary()
    );
}
