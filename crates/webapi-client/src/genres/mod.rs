// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use riptag_core::{GenreLookup, GenreSource};
use serde::Deserialize;

use crate::web::{ClientEnvironment, WebApiEnvironment, receive_response_body};

/// The relevant part of an artist or album object.
#[derive(Debug, Deserialize)]
struct GenresResponseBody {
    #[serde(default)]
    genres: Vec<String>,
}

#[must_use]
pub fn genres_path(source: GenreSource, id: &str) -> String {
    format!("v1/{source}s/{id}", source = source.as_str())
}

/// Extract the genres from the JSON body of an artist or album.
///
/// A missing `genres` field is treated like an empty array.
pub fn parse_genres(body: &[u8]) -> anyhow::Result<Vec<String>> {
    let GenresResponseBody { genres } = serde_json::from_slice(body)?;
    Ok(genres)
}

pub fn fetch_genres<E>(env: &E, source: GenreSource, id: &str) -> anyhow::Result<Vec<String>>
where
    E: ClientEnvironment + ?Sized,
{
    let url = env.join_api_url(&genres_path(source, id))?;
    log::info!("Retrieving genres from {url}");
    let response = env.client().get(url).send()?;
    let body = receive_response_body(response)?;
    parse_genres(&body)
}

/// Looks up genres with a single, unauthenticated request.
///
/// No retries.
#[derive(Debug, Clone)]
pub struct WebApiGenreLookup<E = WebApiEnvironment> {
    env: E,
}

impl<E> WebApiGenreLookup<E> {
    #[must_use]
    pub const fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E> GenreLookup for WebApiGenreLookup<E>
where
    E: ClientEnvironment,
{
    fn lookup_genres(&self, source: GenreSource, id: &str) -> Option<Vec<String>> {
        match fetch_genres(&self.env, source, id) {
            Ok(genres) => Some(genres),
            Err(err) => {
                log::warn!("Failed to retrieve genres of {source} {id}: {err:#}");
                None
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
