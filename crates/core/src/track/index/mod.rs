// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::source::SiblingTrack;

/// A 1-based position together with an optional total.
///
/// A `total` of 0 means unknown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Index {
    pub number: u16,
    pub total: u16,
}

impl Index {
    #[must_use]
    pub const fn new(number: u16, total: u16) -> Self {
        Self { number, total }
    }

    #[must_use]
    pub const fn has_total(&self) -> bool {
        self.total > 0
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { number, total } = self;
        if self.has_total() {
            write!(f, "{number}/{total}")
        } else {
            write!(f, "{number}")
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Indexes {
    pub disc: Index,
    pub track: Index,
}

impl Indexes {
    /// Derive the disc and track positions of a track from the
    /// listing of its album.
    ///
    /// See [`disc_total()`] and [`track_total()`] for how the totals
    /// are calculated.
    #[must_use]
    pub fn from_siblings(track: SiblingTrack, siblings: &[SiblingTrack]) -> Self {
        Self {
            disc: Index::new(track.disc, disc_total(siblings)),
            track: Index::new(track.index, track_total(track, siblings)),
        }
    }
}

/// The highest disc number in the listing.
#[must_use]
pub fn disc_total(siblings: &[SiblingTrack]) -> u16 {
    siblings
        .iter()
        .map(|sibling| sibling.disc)
        .max()
        .unwrap_or_default()
}

/// The highest index among the following tracks on the same disc.
///
/// Returns 0 if the given track is the last one on its disc! The
/// total is only known from the tracks that come after it.
#[must_use]
pub fn track_total(track: SiblingTrack, siblings: &[SiblingTrack]) -> u16 {
    siblings
        .iter()
        .filter(|sibling| sibling.disc == track.disc && sibling.index > track.index)
        .map(|sibling| sibling.index)
        .max()
        .unwrap_or_default()
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
