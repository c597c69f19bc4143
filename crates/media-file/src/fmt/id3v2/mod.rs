// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use lofty::{
    TextEncoding,
    id3::v2::{AttachedPictureFrame, Frame, FrameId, Id3v2Tag, TextInformationFrame},
    tag::TagExt as _,
};

use super::{StageTag, TagField, front_cover_picture};
use crate::Result;

pub const ALBUM_FRAME_ID: &str = "TALB";
pub const TITLE_FRAME_ID: &str = "TIT2";
pub const ARTIST_FRAME_ID: &str = "TPE1";
/// Written as a text frame, but read back as a timestamp frame.
pub const RELEASE_TIME_FRAME_ID: &str = "TDRL";
pub const DISC_FRAME_ID: &str = "TPOS";
pub const TRACK_FRAME_ID: &str = "TRCK";
pub const GENRE_FRAME_ID: &str = "TCON";
pub const PICTURE_FRAME_ID: &str = "APIC";

/// Multiple values of a text frame are separated by a null character
/// since ID3v2.4.
const MULTI_VALUE_SEPARATOR: &str = "\0";

#[must_use]
pub const fn frame_id(id: &'static str) -> FrameId<'static> {
    FrameId::Valid(Cow::Borrowed(id))
}

fn text_frame(id: &'static str, text: String) -> Frame<'static> {
    Frame::Text(TextInformationFrame::new(
        frame_id(id),
        TextEncoding::UTF8,
        text,
    ))
}

/// Stages fields as typed ID3v2 frames.
///
/// Existing frames with the same identifier are replaced, all other
/// frames are preserved.
#[derive(Debug, Default)]
pub struct Id3v2FrameStage {
    tag: Id3v2Tag,
}

impl Id3v2FrameStage {
    #[must_use]
    pub fn new(tag: Id3v2Tag) -> Self {
        Self { tag }
    }

    #[must_use]
    pub fn tag(&self) -> &Id3v2Tag {
        &self.tag
    }

    #[must_use]
    pub fn into_tag(self) -> Id3v2Tag {
        self.tag
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!("ID3v2.4: {count} frames", count = self.tag.len())
    }

    fn insert_text(&mut self, id: &'static str, text: String) {
        if let Some(replaced) = self.tag.insert(text_frame(id, text)) {
            log::debug!("Replaced frame {replaced:?}");
        }
    }
}

impl StageTag for Id3v2FrameStage {
    fn stage(&mut self, field: TagField<'_>) -> Result<()> {
        match field {
            TagField::Album(album) => self.insert_text(ALBUM_FRAME_ID, album.to_owned()),
            TagField::Title(title) => self.insert_text(TITLE_FRAME_ID, title.to_owned()),
            TagField::Artist(artist) => self.insert_text(ARTIST_FRAME_ID, artist.to_owned()),
            TagField::ReleaseYear(year) => {
                self.insert_text(RELEASE_TIME_FRAME_ID, year.to_string());
            }
            // Number and total are combined into a single frame
            TagField::Disc(index) => self.insert_text(DISC_FRAME_ID, index.to_string()),
            TagField::Track(index) => self.insert_text(TRACK_FRAME_ID, index.to_string()),
            TagField::Genres(genres) => {
                self.insert_text(GENRE_FRAME_ID, genres.join(MULTI_VALUE_SEPARATOR));
            }
            TagField::FrontCover(image_data) => {
                let frame = AttachedPictureFrame::new(
                    TextEncoding::UTF8,
                    front_cover_picture(image_data),
                );
                // Replaces a previous front cover
                self.tag.insert(Frame::Picture(frame));
            }
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
