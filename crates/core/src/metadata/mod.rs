// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bytes::Bytes;

use crate::{
    text::{AsciiFallback, FoldedText, TextVariant},
    track::index::Indexes,
};

/// Metadata of a single track, ready for being written into a file.
///
/// The disc and track totals are derived from the album listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub album: FoldedText,
    pub artist: FoldedText,
    pub title: FoldedText,
    pub indexes: Indexes,
    pub year: u16,

    /// Empty if no genres are available.
    pub genres: Vec<FoldedText>,

    /// JPEG image data of the front cover.
    pub cover: Option<Bytes>,
}

impl ResolvedMetadata {
    /// Fold each genre with the given fallback.
    #[must_use]
    pub fn fold_genres(
        genres: impl IntoIterator<Item = String>,
        fallback: AsciiFallback,
    ) -> Vec<FoldedText> {
        genres
            .into_iter()
            .map(|genre| FoldedText::new(genre, fallback))
            .collect()
    }

    #[must_use]
    pub fn has_genres(&self) -> bool {
        !self.genres.is_empty()
    }

    pub fn selected_genres(&self, variant: TextVariant) -> impl Iterator<Item = &str> + '_ {
        self.genres.iter().map(move |genre| genre.select(variant))
    }
}
