// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fs, io::BufReader, path::Path};

use anyhow::Context as _;
use bytes::Bytes;
use riptag_core::source::{AlbumDescription, TrackDescription};
use serde::Deserialize;

/// A track together with its album, as stored in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct TrackFile {
    pub(crate) track: TrackDescription,
    pub(crate) album: AlbumDescription,
}

pub(crate) fn read_track_file(path: &Path) -> anyhow::Result<TrackFile> {
    let file = fs::File::open(path)
        .with_context(|| format!("failed to open track file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse track file {}", path.display()))
}

/// Read a JPEG image that is used as the front cover.
pub(crate) fn read_cover_file(path: &Path) -> anyhow::Result<Bytes> {
    let image_data = fs::read(path)
        .with_context(|| format!("failed to read cover image {}", path.display()))?;
    Ok(image_data.into())
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
