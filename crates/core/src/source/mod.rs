// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Boundary to the streaming source that provides tracks and albums.
//!
//! Entities of the source are loaded lazily. Their fields must not be
//! accessed before they have been forced into [`LoadState::Loaded`],
//! see [`force_load()`].

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

mod description;
pub use self::description::{AlbumDescription, TrackDescription};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
}

impl LoadState {
    #[must_use]
    pub const fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Track,
    Album,
    #[strum(serialize = "album listing")]
    AlbumBrowse,
    Cover,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{0} could not be loaded")]
    NotLoaded(EntityKind),

    #[error("{kind} could not be loaded: {source}")]
    Source {
        kind: EntityKind,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// A lazily loaded entity of the source.
pub trait Load {
    fn load_state(&self) -> LoadState;

    /// Request the entity to be loaded.
    ///
    /// Implementations may block until the entity is available.
    fn load(&mut self) -> Result<(), LoadError>;
}

/// Drive an entity into [`LoadState::Loaded`].
///
/// Fails if loading fails or if the entity is still not loaded
/// afterwards.
pub fn force_load<T>(entity: &mut T, kind: EntityKind) -> Result<(), LoadError>
where
    T: Load + ?Sized,
{
    if entity.load_state().is_loaded() {
        return Ok(());
    }
    entity.load()?;
    if !entity.load_state().is_loaded() {
        return Err(LoadError::NotLoaded(kind));
    }
    Ok(())
}

/// URI of a source entity, e.g. `spotify:artist:<id>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Link {
    pub uri: String,
}

impl Link {
    pub const URI_SEPARATOR: char = ':';

    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// The stable identifier of the linked entity.
    ///
    /// Only URIs that consist of exactly three tokens, i.e.
    /// `<scheme>:<kind>:<id>`, with a non-empty last token have
    /// an identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        let mut tokens = self.uri.split(Self::URI_SEPARATOR);
        let (Some(_scheme), Some(_kind), Some(id), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return None;
        };
        (!id.is_empty()).then_some(id)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artist {
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Link,
}

/// Position of a track within its album.
///
/// An album listing consists of these positions for all tracks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiblingTrack {
    /// 1-based disc number
    pub disc: u16,

    /// 1-based position on the disc
    pub index: u16,
}

pub trait SourceTrack: Load {
    fn name(&self) -> &str;

    /// The artists of this track, the first one is the primary artist.
    fn artists(&self) -> &[Artist];

    fn index(&self) -> u16;

    fn disc(&self) -> u16;

    fn position(&self) -> SiblingTrack {
        SiblingTrack {
            disc: self.disc(),
            index: self.index(),
        }
    }
}

pub trait SourceAlbum: Load {
    fn name(&self) -> &str;

    fn year(&self) -> u16;

    fn link(&self) -> &Link;

    /// Browse all tracks of this album.
    ///
    /// The listing is loaded before it is returned.
    fn browse(&mut self) -> Result<Vec<SiblingTrack>, LoadError>;

    /// The image data of the cover artwork, if available.
    ///
    /// The image is loaded before it is returned.
    fn cover(&mut self) -> Result<Option<Bytes>, LoadError>;
}
