// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

/// Policy for characters that have no ASCII representation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AsciiFallback {
    /// Substitute [`REPLACEMENT_CHAR`].
    Replace,

    /// Drop the character.
    #[default]
    Ignore,
}

pub const REPLACEMENT_CHAR: char = '?';

/// Selects which variant of a [`FoldedText`] is written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextVariant {
    #[default]
    Original,
    Ascii,
}

#[must_use]
pub fn fold_to_ascii(text: &str, fallback: AsciiFallback) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let folded = match fallback {
        AsciiFallback::Replace => text
            .chars()
            .map(|c| if c.is_ascii() { c } else { REPLACEMENT_CHAR })
            .collect(),
        AsciiFallback::Ignore => text.chars().filter(char::is_ascii).collect(),
    };
    Cow::Owned(folded)
}

/// A text with its ASCII-folded counterpart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoldedText {
    pub original: String,
    pub ascii: String,
}

impl FoldedText {
    #[must_use]
    pub fn new(original: impl Into<String>, fallback: AsciiFallback) -> Self {
        let original = original.into();
        let ascii = fold_to_ascii(&original, fallback).into_owned();
        Self { original, ascii }
    }

    #[must_use]
    pub fn select(&self, variant: TextVariant) -> &str {
        match variant {
            TextVariant::Original => &self.original,
            TextVariant::Ascii => &self.ascii,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
