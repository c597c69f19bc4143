// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(clippy::pedantic)]
// Additional restrictions
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::self_named_module_files)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Repeating the type name in `Default::default()` expressions is not needed
// as long as the context is obvious.
#![allow(clippy::default_trait_access)]
// Using wildcard imports consciously is acceptable.
#![allow(clippy::wildcard_imports)]
// Importing all enum variants into a narrow, local scope is acceptable.
#![allow(clippy::enum_glob_use)]
#![allow(clippy::missing_errors_doc)]

pub mod genre;
pub mod metadata;
pub mod source;
pub mod text;
pub mod track;

pub use self::{
    genre::{GenreLookup, GenreSource},
    metadata::ResolvedMetadata,
    source::{
        Artist, EntityKind, Link, Load, LoadError, LoadState, SiblingTrack, SourceAlbum,
        SourceTrack, force_load,
    },
    track::index::{Index, Indexes},
};

pub mod prelude {
    pub use crate::{
        source::{Load as _, SourceAlbum as _, SourceTrack as _},
        text::{AsciiFallback, FoldedText, TextVariant},
    };
}
