// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    ogg::{OggPictureStorage as _, VorbisComments},
    picture::{PictureInformation, PictureType},
};

use super::{StageTag, TagField, front_cover_picture};
use crate::Result;

pub const ALBUM_KEY: &str = "ALBUM";
pub const TITLE_KEY: &str = "TITLE";
pub const ARTIST_KEY: &str = "ARTIST";
pub const YEAR_KEY: &str = "YEAR";
pub const DISC_NUMBER_KEY: &str = "DISCNUMBER";
pub const DISC_TOTAL_KEY: &str = "DISCTOTAL";
pub const TRACK_NUMBER_KEY: &str = "TRACKNUMBER";
pub const TRACK_TOTAL_KEY: &str = "TRACKTOTAL";
pub const GENRE_KEY: &str = "GENRE";

const GENRE_SEPARATOR: &str = ", ";

/// Stages fields as plain key/value comments.
#[derive(Debug, Default)]
pub struct VorbisCommentStage {
    comments: VorbisComments,
}

impl VorbisCommentStage {
    #[must_use]
    pub fn new(comments: VorbisComments) -> Self {
        Self { comments }
    }

    #[must_use]
    pub fn comments(&self) -> &VorbisComments {
        &self.comments
    }

    #[must_use]
    pub fn into_comments(self) -> VorbisComments {
        self.comments
    }

    /// The vendor is omitted if empty, e.g. for newly created comments.
    #[must_use]
    pub fn summary(&self) -> String {
        let vendor = self.comments.vendor();
        if vendor.is_empty() {
            return "Vorbis comments".to_owned();
        }
        format!("Vorbis comments - {vendor}")
    }

    fn insert(&mut self, key: &str, value: String) {
        self.comments.insert(key.to_owned(), value);
    }
}

impl StageTag for VorbisCommentStage {
    fn stage(&mut self, field: TagField<'_>) -> Result<()> {
        match field {
            TagField::Album(album) => self.insert(ALBUM_KEY, album.to_owned()),
            TagField::Title(title) => self.insert(TITLE_KEY, title.to_owned()),
            TagField::Artist(artist) => self.insert(ARTIST_KEY, artist.to_owned()),
            TagField::ReleaseYear(year) => self.insert(YEAR_KEY, year.to_string()),
            // Number and total are stored in separate fields
            TagField::Disc(index) => {
                self.insert(DISC_NUMBER_KEY, index.number.to_string());
                self.insert(DISC_TOTAL_KEY, index.total.to_string());
            }
            TagField::Track(index) => {
                self.insert(TRACK_NUMBER_KEY, index.number.to_string());
                self.insert(TRACK_TOTAL_KEY, index.total.to_string());
            }
            TagField::Genres(genres) => self.insert(GENRE_KEY, genres.join(GENRE_SEPARATOR)),
            TagField::FrontCover(image_data) => {
                let picture = front_cover_picture(image_data);
                let info = PictureInformation::from_picture(&picture).unwrap_or_else(|err| {
                    log::debug!("Failed to infer picture information: {err}");
                    PictureInformation::default()
                });
                // Replaces any front cover, other pictures are kept
                self.comments.remove_picture_type(PictureType::CoverFront);
                self.comments.insert_picture(picture, Some(info))?;
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
