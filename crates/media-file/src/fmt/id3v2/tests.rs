// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    picture::{MimeType, PictureType},
    tag::TagExt as _,
};
use riptag_core::Index;

use super::*;

fn text<'a>(tag: &'a Id3v2Tag, id: &'static str) -> Option<&'a str> {
    tag.get_text(&frame_id(id))
}

#[test]
fn stage_positions_combined_with_totals() {
    let mut stage = Id3v2FrameStage::default();
    stage.stage(TagField::Disc(Index::new(1, 0))).unwrap();
    stage.stage(TagField::Track(Index::new(2, 4))).unwrap();
    let tag = stage.into_tag();
    assert_eq!(Some("1"), text(&tag, DISC_FRAME_ID));
    assert_eq!(Some("2/4"), text(&tag, TRACK_FRAME_ID));
}

#[test]
fn stage_text_frames() {
    let mut stage = Id3v2FrameStage::default();
    stage.stage(TagField::Album("Album")).unwrap();
    stage.stage(TagField::Title("Titel über")).unwrap();
    stage.stage(TagField::Artist("Artist")).unwrap();
    stage.stage(TagField::ReleaseYear(2020)).unwrap();
    let tag = stage.tag();
    assert_eq!(Some("Album"), text(tag, ALBUM_FRAME_ID));
    assert_eq!(Some("Titel über"), text(tag, TITLE_FRAME_ID));
    assert_eq!(Some("Artist"), text(tag, ARTIST_FRAME_ID));
    assert_eq!(Some("2020"), text(tag, RELEASE_TIME_FRAME_ID));
    assert_eq!(4, tag.len());
    assert_eq!("ID3v2.4: 4 frames", stage.summary());
}

#[test]
fn stage_replaces_existing_frames() {
    let mut stage = Id3v2FrameStage::default();
    stage.stage(TagField::Title("Old")).unwrap();
    stage.stage(TagField::Title("New")).unwrap();
    assert_eq!(Some("New"), text(stage.tag(), TITLE_FRAME_ID));
    assert_eq!(1, stage.tag().len());
}

#[test]
fn stage_multiple_genres_in_single_frame() {
    let mut stage = Id3v2FrameStage::default();
    stage.stage(TagField::Genres(vec!["Rock", "Pop"])).unwrap();
    assert_eq!(Some("Rock\0Pop"), text(stage.tag(), GENRE_FRAME_ID));
    assert_eq!(1, stage.tag().len());
}

#[test]
fn stage_front_cover() {
    let image_data = [0xFF, 0xD8, 0xFF, 0xE0];
    let mut stage = Id3v2FrameStage::default();
    stage.stage(TagField::FrontCover(&image_data)).unwrap();
    let Some(Frame::Picture(frame)) = stage.tag().get(&frame_id(PICTURE_FRAME_ID)) else {
        panic!("missing picture frame");
    };
    assert_eq!(PictureType::CoverFront, frame.picture.pic_type());
    assert_eq!(Some(&MimeType::Jpeg), frame.picture.mime_type());
    assert_eq!(Some("Front Cover"), frame.picture.description());
    assert_eq!(&image_data, frame.picture.data());
}
