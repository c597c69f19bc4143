// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, path::PathBuf};

use anyhow::Context as _;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use riptag_core::{
    GenreSource,
    text::{AsciiFallback, TextVariant},
};
use riptag_media_file::io::export::TagFormat;
use riptag_usecases::{
    report::ReportConfig,
    write_tags::{WriteTagsConfig, write_tags_to_file_path},
};
use riptag_webapi_client::{
    WebApiGenreLookup,
    web::{DEFAULT_BASE_URL, WebApiEnvironment},
};
use url::Url;

mod track_file;
use self::track_file::{TrackFile, read_cover_file, read_track_file};

const DEFAULT_LOG_FILTER: &str = "info";

const WEBAPI_URL_ENV: &str = "RIPTAG_WEBAPI_URL";

const AUDIO_FILE_ARG: &str = "audio-file";

const TRACK_FILE_ARG: &str = "track";

const COVER_FILE_ARG: &str = "cover";

const FLAC_ARG: &str = "flac";

const ASCII_ARG: &str = "ascii";

const ASCII_FALLBACK_ARG: &str = "ascii-fallback";

const GENRES_ARG: &str = "genres";

const CBR_ARG: &str = "cbr";

const WEBAPI_URL_ARG: &str = "webapi-url";

fn new_command() -> Command {
    Command::new("riptag")
        .about("Writes the metadata of a downloaded track into its audio file")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(AUDIO_FILE_ARG)
                .help("The MPEG or FLAC file")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new(TRACK_FILE_ARG)
                .long(TRACK_FILE_ARG)
                .help("JSON file with the descriptions of the track and its album")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new(COVER_FILE_ARG)
                .long(COVER_FILE_ARG)
                .help("JPEG image of the album cover")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            Arg::new(FLAC_ARG)
                .long(FLAC_ARG)
                .help("Write Vorbis comments into a FLAC file instead of ID3v2 frames")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ASCII_ARG)
                .long(ASCII_ARG)
                .help("Write only ASCII characters")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ASCII_FALLBACK_ARG)
                .long(ASCII_FALLBACK_ARG)
                .help("How to treat characters that have no ASCII representation")
                .num_args(1)
                .value_parser(["replace", "ignore"])
                .default_value("ignore"),
        )
        .arg(
            Arg::new(GENRES_ARG)
                .long(GENRES_ARG)
                .help("Look up the genres of either the primary artist or the album")
                .num_args(1)
                .value_parser(["artist", "album"])
                .required(false),
        )
        .arg(
            Arg::new(CBR_ARG)
                .long(CBR_ARG)
                .help("The stream is encoded with a constant bitrate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(WEBAPI_URL_ARG)
                .long(WEBAPI_URL_ARG)
                .help(format!(
                    "Base URL of the Web API [env: {WEBAPI_URL_ENV}] [default: {DEFAULT_BASE_URL}]"
                ))
                .num_args(1)
                .required(false),
        )
}

fn write_tags_config(matches: &ArgMatches) -> anyhow::Result<WriteTagsConfig> {
    let format = if matches.get_flag(FLAC_ARG) {
        TagFormat::VorbisComments
    } else {
        TagFormat::Id3v2
    };
    let text_variant = if matches.get_flag(ASCII_ARG) {
        TextVariant::Ascii
    } else {
        TextVariant::Original
    };
    let ascii_fallback = matches
        .get_one::<String>(ASCII_FALLBACK_ARG)
        .map(|arg| arg.parse::<AsciiFallback>())
        .transpose()?
        .unwrap_or_default();
    let genre_source = matches
        .get_one::<String>(GENRES_ARG)
        .map(|arg| arg.parse::<GenreSource>())
        .transpose()?;
    Ok(WriteTagsConfig {
        format,
        text_variant,
        ascii_fallback,
        genre_source,
    })
}

fn webapi_url(matches: &ArgMatches) -> anyhow::Result<Url> {
    let webapi_url = matches
        .get_one::<String>(WEBAPI_URL_ARG)
        .cloned()
        .or_else(|| env::var(WEBAPI_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
    webapi_url
        .parse()
        .with_context(|| format!("invalid Web API URL \"{webapi_url}\""))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let matches = new_command().get_matches();
    let config = write_tags_config(&matches)?;
    let report_config = ReportConfig {
        cbr: matches.get_flag(CBR_ARG),
    };
    let genre_lookup = WebApiGenreLookup::new(WebApiEnvironment::new(webapi_url(&matches)?));

    let Some(audio_file) = matches.get_one::<PathBuf>(AUDIO_FILE_ARG) else {
        anyhow::bail!("missing audio file");
    };
    let Some(track_file) = matches.get_one::<PathBuf>(TRACK_FILE_ARG) else {
        anyhow::bail!("missing track file");
    };
    let TrackFile {
        mut track,
        mut album,
    } = read_track_file(track_file)?;
    if let Some(cover_file) = matches.get_one::<PathBuf>(COVER_FILE_ARG) {
        album.cover = Some(read_cover_file(cover_file)?);
    }

    log::debug!("Writing tags with {config:?}");
    let written = write_tags_to_file_path(
        audio_file,
        &mut track,
        &mut album,
        &genre_lookup,
        &config,
        report_config,
    )?;
    if written.is_none() {
        log::warn!("No tags have been written into {}", audio_file.display());
    }
    Ok(())
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
