// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Duration;

use lofty::{
    config::ParseOptions,
    picture::{MimeType, Picture, PictureType},
    properties::FileProperties,
};

use riptag_core::Index;

use crate::Result;

pub mod flac;

pub mod id3v2;

pub mod mpeg;

pub mod vorbis;

pub(crate) const FRONT_COVER_DESCRIPTION: &str = "Front Cover";

/// A single metadata field with the value that is written.
///
/// All text values are already in their final representation,
/// i.e. the writers do not apply any text conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagField<'a> {
    Album(&'a str),
    Title(&'a str),
    Artist(&'a str),
    ReleaseYear(u16),
    Disc(Index),
    Track(Index),
    Genres(Vec<&'a str>),
    FrontCover(&'a [u8]),
}

/// Stage metadata fields in the native representation of a tag format.
pub trait StageTag {
    fn stage(&mut self, field: TagField<'_>) -> Result<()>;
}

/// Stage metadata fields and persist them in a file.
pub trait TagWriter: StageTag {
    /// Persist all staged fields at once.
    fn persist(self) -> Result<SavedFile>;
}

/// Front cover artwork as expected by all tag formats.
#[must_use]
pub fn front_cover_picture(image_data: &[u8]) -> Picture {
    Picture::new_unchecked(
        PictureType::CoverFront,
        Some(MimeType::Jpeg),
        Some(FRONT_COVER_DESCRIPTION.to_owned()),
        image_data.to_vec(),
    )
}

pub(crate) fn parse_options() -> ParseOptions {
    ParseOptions::new().read_properties(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Codec {
    #[strum(to_string = "MPEG")]
    Mpeg,

    #[strum(to_string = "Free Lossless Audio Codec")]
    Flac,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioProperties {
    pub duration: Duration,
    pub bitrate_kbps: Option<u32>,
    pub sample_rate_hz: Option<u32>,
    pub channels: Option<u8>,
}

impl From<FileProperties> for AudioProperties {
    fn from(from: FileProperties) -> Self {
        Self {
            duration: from.duration(),
            bitrate_kbps: from.audio_bitrate(),
            sample_rate_hz: from.sample_rate(),
            channels: from.channels(),
        }
    }
}

/// Outcome of persisting the tags of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub codec: Codec,
    pub properties: AudioProperties,

    /// Describes the tag that has been written, e.g. the version
    /// and number of frames.
    pub tag_summary: String,
}
