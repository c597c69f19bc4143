// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Writes the metadata of downloaded tracks into the tags of their
//! audio files.
//!
//! The sub-crates are re-exported behind features of the same name.

pub use riptag_core as core;

#[cfg(feature = "media-file")]
pub use riptag_media_file as media_file;

#[cfg(feature = "usecases")]
pub use riptag_usecases as usecases;

#[cfg(feature = "webapi-client")]
pub use riptag_webapi_client as webapi_client;
