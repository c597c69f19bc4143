// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, fs::File, io::Seek as _};

use lofty::{
    config::WriteOptions, file::AudioFile as _, mpeg::MpegFile, properties::FileProperties,
};

use super::{
    Codec, SavedFile, StageTag, TagField, TagWriter, id3v2::Id3v2FrameStage, parse_options,
};
use crate::Result;

/// Writes ID3v2 frames into an MPEG file.
pub struct MpegTagWriter<'f> {
    file: &'f mut File,
    mpeg_file: MpegFile,
    stage: Id3v2FrameStage,
}

impl<'f> MpegTagWriter<'f> {
    /// Read the file and take its ID3v2 tag for staging.
    ///
    /// A new tag is created if the file has none.
    pub fn open(file: &'f mut File) -> Result<Self> {
        file.rewind()?;
        let mut mpeg_file = MpegFile::read_from(file, parse_options())?;
        let id3v2 = mpeg_file
            .id3v2_mut()
            .map(std::mem::take)
            .unwrap_or_default();
        Ok(Self {
            file,
            mpeg_file,
            stage: Id3v2FrameStage::new(id3v2),
        })
    }
}

impl fmt::Debug for MpegTagWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MpegTagWriter")
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

impl StageTag for MpegTagWriter<'_> {
    fn stage(&mut self, field: TagField<'_>) -> Result<()> {
        self.stage.stage(field)
    }
}

impl TagWriter for MpegTagWriter<'_> {
    fn persist(self) -> Result<SavedFile> {
        let Self {
            file,
            mut mpeg_file,
            stage,
        } = self;
        let tag_summary = stage.summary();
        mpeg_file.set_id3v2(stage.into_tag());
        file.rewind()?;
        mpeg_file.save_to(file, WriteOptions::default())?;
        let properties = FileProperties::from(mpeg_file.properties().clone());
        Ok(SavedFile {
            codec: Codec::Mpeg,
            properties: properties.into(),
            tag_summary,
        })
    }
}
