// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs::{File, OpenOptions},
    path::Path,
};

use riptag_core::{ResolvedMetadata, text::TextVariant};

use crate::{
    Result,
    fmt::{SavedFile, StageTag, TagField, TagWriter, flac::FlacTagWriter, mpeg::MpegTagWriter},
};

/// The tag format that is written.
///
/// Selected explicitly and never derived from the file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TagFormat {
    /// ID3v2 frames in an MPEG file
    #[default]
    Id3v2,

    /// Vorbis comments in a FLAC file
    #[strum(serialize = "vorbis")]
    VorbisComments,
}

/// Stage all fields of the metadata.
///
/// The same text variant is selected for every text field.
pub fn stage_metadata<S>(
    stage: &mut S,
    metadata: &ResolvedMetadata,
    text_variant: TextVariant,
) -> Result<()>
where
    S: StageTag + ?Sized,
{
    let ResolvedMetadata {
        album,
        artist,
        title,
        indexes,
        year,
        genres: _,
        cover,
    } = metadata;
    if let Some(cover) = cover {
        stage.stage(TagField::FrontCover(cover))?;
    }
    stage.stage(TagField::Album(album.select(text_variant)))?;
    stage.stage(TagField::Title(title.select(text_variant)))?;
    stage.stage(TagField::Artist(artist.select(text_variant)))?;
    stage.stage(TagField::ReleaseYear(*year))?;
    stage.stage(TagField::Disc(indexes.disc))?;
    stage.stage(TagField::Track(indexes.track))?;
    if metadata.has_genres() {
        let genres = metadata.selected_genres(text_variant).collect();
        stage.stage(TagField::Genres(genres))?;
    }
    Ok(())
}

fn stage_and_persist<W>(
    mut writer: W,
    metadata: &ResolvedMetadata,
    text_variant: TextVariant,
) -> Result<SavedFile>
where
    W: TagWriter,
{
    stage_metadata(&mut writer, metadata, text_variant)?;
    writer.persist()
}

pub fn export_metadata_to_file(
    file: &mut File,
    format: TagFormat,
    metadata: &ResolvedMetadata,
    text_variant: TextVariant,
) -> Result<SavedFile> {
    match format {
        TagFormat::Id3v2 => {
            stage_and_persist(MpegTagWriter::open(file)?, metadata, text_variant)
        }
        TagFormat::VorbisComments => {
            stage_and_persist(FlacTagWriter::open(file)?, metadata, text_variant)
        }
    }
}

pub fn export_metadata_to_file_path(
    path: &Path,
    format: TagFormat,
    metadata: &ResolvedMetadata,
    text_variant: TextVariant,
) -> Result<SavedFile> {
    log::debug!("Writing {format} tags into {path}", path = path.display());
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    export_metadata_to_file(&mut file, format, metadata, text_variant)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
