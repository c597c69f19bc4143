// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use riptag_core::{
    GenreLookup, GenreSource, ResolvedMetadata, SourceAlbum, SourceTrack,
    text::{AsciiFallback, TextVariant},
};
use riptag_media_file::{
    fmt::SavedFile,
    io::export::{TagFormat, export_metadata_to_file_path},
};

use crate::{
    Result,
    report::{ReportConfig, WriteReport},
    resolve::{GenreRequest, resolve_metadata},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteTagsConfig {
    pub format: TagFormat,

    /// The text variant that is written for all text fields.
    pub text_variant: TextVariant,

    pub ascii_fallback: AsciiFallback,

    /// Genres are only looked up if a source is configured.
    pub genre_source: Option<GenreSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTags {
    pub metadata: ResolvedMetadata,
    pub saved_file: SavedFile,
}

/// Resolve the metadata of a track and write it into an audio file.
///
/// Fails if the track or album could not be loaded. In this case
/// the file is not touched.
///
/// Failures while writing the tags are only logged and result in
/// `Ok(None)`.
pub fn write_tags_to_file_path<T, A, L>(
    file_path: &Path,
    track: &mut T,
    album: &mut A,
    genre_lookup: L,
    config: &WriteTagsConfig,
    report_config: ReportConfig,
) -> Result<Option<WrittenTags>>
where
    T: SourceTrack + ?Sized,
    A: SourceAlbum + ?Sized,
    L: GenreLookup,
{
    let WriteTagsConfig {
        format,
        text_variant,
        ascii_fallback,
        genre_source,
    } = *config;
    let genre_request = genre_source.map(|source| GenreRequest {
        source,
        lookup: genre_lookup,
    });
    let metadata = resolve_metadata(track, album, genre_request.as_ref(), ascii_fallback)?;
    let saved_file =
        match export_metadata_to_file_path(file_path, format, &metadata, text_variant) {
            Ok(saved_file) => saved_file,
            Err(err) => {
                log::warn!(
                    "Failed to write {format} tags into {file_path}: {err}",
                    file_path = file_path.display(),
                );
                return Ok(None);
            }
        };
    let file_name = file_path
        .file_name()
        .map(|file_name| file_name.to_string_lossy())
        .unwrap_or_default();
    let file_size = match file_path.metadata() {
        Ok(file_metadata) => Some(file_metadata.len()),
        Err(err) => {
            log::debug!("Failed to query the size of the written file: {err}");
            None
        }
    };
    WriteReport {
        file_name: &file_name,
        file_size,
        metadata: &metadata,
        text_variant,
        saved_file: &saved_file,
        config: report_config,
    }
    .log();
    Ok(Some(WrittenTags {
        metadata,
        saved_file,
    }))
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
