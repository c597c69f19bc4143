// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::source::{Link, SourceAlbum, SourceTrack};

/// The entity whose genres are looked up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GenreSource {
    Artist,
    Album,
}

impl GenreSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
        }
    }

    /// Select the link of the entity that is queried.
    ///
    /// For [`GenreSource::Artist`] this is the primary artist of
    /// the track.
    #[must_use]
    pub fn select_link<'a, T, A>(self, track: &'a T, album: &'a A) -> Option<&'a Link>
    where
        T: SourceTrack + ?Sized,
        A: SourceAlbum + ?Sized,
    {
        match self {
            Self::Artist => track.artists().first().map(|artist| &artist.link),
            Self::Album => Some(album.link()),
        }
    }
}

/// Best-effort lookup of genres from a remote service.
pub trait GenreLookup {
    /// Look up the genres of the entity with the given identifier.
    ///
    /// Returns `None` on any failure. Failures are expected to be
    /// reported by the implementation.
    fn lookup_genres(&self, source: GenreSource, id: &str) -> Option<Vec<String>>;
}

impl<T> GenreLookup for &T
where
    T: GenreLookup + ?Sized,
{
    fn lookup_genres(&self, source: GenreSource, id: &str) -> Option<Vec<String>> {
        (**self).lookup_genres(source, id)
    }
}
