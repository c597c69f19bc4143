// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bytes::Bytes;

use super::{Artist, Link, Load, LoadError, LoadState, SiblingTrack, SourceAlbum, SourceTrack};

/// A track that has already been loaded completely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackDescription {
    pub name: String,

    pub artists: Vec<Artist>,

    pub index: u16,

    pub disc: u16,

    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Link,
}

impl Load for TrackDescription {
    fn load_state(&self) -> LoadState {
        LoadState::Loaded
    }

    fn load(&mut self) -> Result<(), LoadError> {
        Ok(())
    }
}

impl SourceTrack for TrackDescription {
    fn name(&self) -> &str {
        &self.name
    }

    fn artists(&self) -> &[Artist] {
        &self.artists
    }

    fn index(&self) -> u16 {
        self.index
    }

    fn disc(&self) -> u16 {
        self.disc
    }
}

/// An album that has already been loaded completely, including
/// its track listing and cover image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumDescription {
    pub name: String,

    pub year: u16,

    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Link,

    #[cfg_attr(feature = "serde", serde(default))]
    pub tracks: Vec<SiblingTrack>,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub cover: Option<Bytes>,
}

impl Load for AlbumDescription {
    fn load_state(&self) -> LoadState {
        LoadState::Loaded
    }

    fn load(&mut self) -> Result<(), LoadError> {
        Ok(())
    }
}

impl SourceAlbum for AlbumDescription {
    fn name(&self) -> &str {
        &self.name
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn link(&self) -> &Link {
        &self.link
    }

    fn browse(&mut self) -> Result<Vec<SiblingTrack>, LoadError> {
        Ok(self.tracks.clone())
    }

    fn cover(&mut self) -> Result<Option<Bytes>, LoadError> {
        Ok(self.cover.clone())
    }
}
