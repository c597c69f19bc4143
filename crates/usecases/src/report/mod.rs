// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Duration;

use riptag_core::{ResolvedMetadata, text::TextVariant};
use riptag_media_file::fmt::{AudioProperties, SavedFile};

const SEPARATOR_WIDTH: usize = 79;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// The stream is encoded with a constant bitrate.
    pub cbr: bool,
}

/// Human-readable summary of a file after its tags have been written.
#[derive(Debug)]
pub struct WriteReport<'a> {
    pub file_name: &'a str,
    pub file_size: Option<u64>,
    pub metadata: &'a ResolvedMetadata,
    pub text_variant: TextVariant,
    pub saved_file: &'a SavedFile,
    pub config: ReportConfig,
}

impl WriteReport<'_> {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let Self {
            file_name,
            file_size,
            metadata,
            text_variant,
            saved_file,
            config,
        } = self;
        let separator = "-".repeat(SEPARATOR_WIDTH);
        let file_size = file_size.map_or_else(|| "?".to_owned(), format_size);
        let mut lines = vec![
            format!("{file_name}\t[ {file_size} ]"),
            separator.clone(),
            format!("Setting artist: {}", metadata.artist.select(*text_variant)),
            format!("Setting album: {}", metadata.album.select(*text_variant)),
            format!("Setting title: {}", metadata.title.select(*text_variant)),
            format!(
                "Setting track info: ({number}, {total})",
                number = metadata.indexes.track.number,
                total = metadata.indexes.track.total,
            ),
            format!(
                "Setting disc info: ({number}, {total})",
                number = metadata.indexes.disc.number,
                total = metadata.indexes.disc.total,
            ),
            format!("Setting release year: {}", metadata.year),
        ];
        if metadata.has_genres() {
            let genres = metadata
                .selected_genres(*text_variant)
                .collect::<Vec<_>>()
                .join(" / ");
            lines.push(format!("Setting genres: {genres}"));
        }
        if metadata.cover.is_some() {
            lines.push("Adding cover image".to_owned());
        }
        lines.push(format!(
            "Time: {duration}\t{codec}\t[ {audio} ]",
            duration = format_duration(saved_file.properties.duration),
            codec = saved_file.codec,
            audio = format_audio_properties(&saved_file.properties, *config),
        ));
        lines.push(separator.clone());
        lines.push(format!("Writing {}", saved_file.tag_summary));
        lines.push(separator);
        lines
    }

    pub fn log(&self) {
        for line in self.lines() {
            log::info!("{line}");
        }
    }
}

#[must_use]
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if size < 1024 {
        return format!("{size} B");
    }
    let mut value = size as f64 / 1024.0;
    let mut unit = UNITS[0];
    for &next_unit in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next_unit;
    }
    format!("{value:.2} {unit}")
}

/// Format as `m:ss`, truncating fractional seconds.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Bitrates of variable-rate streams are marked as approximate.
#[must_use]
pub fn format_bitrate(bitrate_kbps: Option<u32>, config: ReportConfig) -> String {
    let bitrate = bitrate_kbps.map_or_else(|| "?".to_owned(), |kbps| kbps.to_string());
    if config.cbr {
        format!("{bitrate} kb/s")
    } else {
        format!("~{bitrate} kb/s")
    }
}

#[must_use]
pub fn format_channels(channels: Option<u8>) -> &'static str {
    match channels {
        Some(1) => "Mono",
        Some(2) => "Stereo",
        _ => "",
    }
}

fn format_audio_properties(properties: &AudioProperties, config: ReportConfig) -> String {
    let sample_rate = properties
        .sample_rate_hz
        .map_or_else(|| "?".to_owned(), |hz| hz.to_string());
    format!(
        "{bitrate} @ {sample_rate} Hz - {channels}",
        bitrate = format_bitrate(properties.bitrate_kbps, config),
        channels = format_channels(properties.channels),
    )
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
