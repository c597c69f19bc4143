// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, fs::File, io::Seek as _};

use lofty::{
    config::WriteOptions,
    file::AudioFile as _,
    flac::FlacFile,
    ogg::{OggPictureStorage as _, VorbisComments},
    picture::PictureType,
    properties::FileProperties,
};

use super::{
    Codec, SavedFile, StageTag, TagField, TagWriter, parse_options, vorbis::VorbisCommentStage,
};
use crate::Result;

/// Writes Vorbis comments and pictures into a FLAC file.
pub struct FlacTagWriter<'f> {
    file: &'f mut File,
    flac_file: FlacFile,
    stage: VorbisCommentStage,
}

impl<'f> FlacTagWriter<'f> {
    /// Read the file and take its Vorbis comments for staging.
    pub fn open(file: &'f mut File) -> Result<Self> {
        file.rewind()?;
        let mut flac_file = FlacFile::read_from(file, parse_options())?;
        let vorbis_comments = if let Some(vorbis_comments) = flac_file.vorbis_comments_mut() {
            std::mem::take(vorbis_comments)
        } else {
            log::debug!("Adding missing Vorbis comments");
            VorbisComments::default()
        };
        Ok(Self {
            file,
            flac_file,
            stage: VorbisCommentStage::new(vorbis_comments),
        })
    }
}

impl fmt::Debug for FlacTagWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlacTagWriter")
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

impl StageTag for FlacTagWriter<'_> {
    fn stage(&mut self, field: TagField<'_>) -> Result<()> {
        if matches!(field, TagField::FrontCover(_)) {
            // Picture blocks are read into the file, not into the comments
            self.flac_file.remove_picture_type(PictureType::CoverFront);
        }
        self.stage.stage(field)
    }
}

impl TagWriter for FlacTagWriter<'_> {
    fn persist(self) -> Result<SavedFile> {
        let Self {
            file,
            mut flac_file,
            stage,
        } = self;
        let tag_summary = stage.summary();
        // Pictures of the comments are moved into separate metadata blocks
        flac_file.set_vorbis_comments(stage.into_comments());
        file.rewind()?;
        flac_file.save_to(file, WriteOptions::default())?;
        let properties = FileProperties::from(flac_file.properties().clone());
        Ok(SavedFile {
            codec: Codec::Flac,
            properties: properties.into(),
            tag_summary,
        })
    }
}
