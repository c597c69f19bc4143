// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use riptag_core::{
    EntityKind, GenreLookup, GenreSource, Indexes, ResolvedMetadata, SourceAlbum, SourceTrack,
    force_load,
    text::{AsciiFallback, FoldedText},
};

use crate::Result;

/// Genres are only looked up on request.
#[derive(Debug, Clone, Copy)]
pub struct GenreRequest<L> {
    pub source: GenreSource,
    pub lookup: L,
}

impl<L> GenreRequest<L>
where
    L: GenreLookup,
{
    /// Look up the genres of either the primary artist or the album.
    ///
    /// Never fails. All failures are logged and result in an empty list.
    pub fn lookup<T, A>(&self, track: &T, album: &A) -> Vec<String>
    where
        T: SourceTrack + ?Sized,
        A: SourceAlbum + ?Sized,
    {
        let Self { source, lookup } = self;
        let Some(link) = source.select_link(track, album) else {
            log::warn!("Unable to look up genres: track has no {source}");
            return Vec::new();
        };
        let Some(id) = link.id() else {
            log::warn!("Unable to look up genres: malformed {source} link \"{link}\"");
            return Vec::new();
        };
        log::info!("Looking up genres of {source} {id}");
        let genres = lookup.lookup_genres(*source, id).unwrap_or_default();
        if genres.is_empty() {
            log::debug!("No genres found for {source} {id}");
        }
        genres
    }
}

/// Resolve the metadata of a track that is about to be written.
///
/// Both the track and the album are loaded if needed. The sibling
/// positions are taken from the track listing of the album.
pub fn resolve_metadata<T, A, L>(
    track: &mut T,
    album: &mut A,
    genre_request: Option<&GenreRequest<L>>,
    ascii_fallback: AsciiFallback,
) -> Result<ResolvedMetadata>
where
    T: SourceTrack + ?Sized,
    A: SourceAlbum + ?Sized,
    L: GenreLookup,
{
    force_load(track, EntityKind::Track)?;
    force_load(album, EntityKind::Album)?;

    let siblings = album.browse()?;
    let indexes = Indexes::from_siblings(track.position(), &siblings);
    log::debug!(
        "Resolved disc {disc} and track {track} from {count} sibling(s)",
        disc = indexes.disc,
        track = indexes.track,
        count = siblings.len(),
    );

    // Only the primary artist is written
    let artist = track
        .artists()
        .first()
        .map(|artist| artist.name.as_str())
        .unwrap_or_default();

    let genres = genre_request
        .map(|request| request.lookup(track, album))
        .unwrap_or_default();

    let cover = album.cover()?;
    if cover.is_none() {
        log::debug!("Album \"{album}\" has no cover", album = album.name());
    }

    Ok(ResolvedMetadata {
        album: FoldedText::new(album.name(), ascii_fallback),
        artist: FoldedText::new(artist, ascii_fallback),
        title: FoldedText::new(track.name(), ascii_fallback),
        indexes,
        year: album.year(),
        genres: ResolvedMetadata::fold_genres(genres, ascii_fallback),
        cover,
    })
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
