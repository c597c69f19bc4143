// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bytes::Bytes;
use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com";

pub trait ClientEnvironment {
    fn client(&self) -> &Client;
    fn join_api_url(&self, path: &str) -> anyhow::Result<Url>;
}

/// Blocking HTTP client with the base URL of the Web API.
#[derive(Debug, Clone)]
pub struct WebApiEnvironment {
    client: Client,
    base_url: Url,
}

impl WebApiEnvironment {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url: with_trailing_slash(base_url),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl ClientEnvironment for WebApiEnvironment {
    fn client(&self) -> &Client {
        &self.client
    }

    fn join_api_url(&self, path: &str) -> anyhow::Result<Url> {
        let url = self.base_url.join(path)?;
        Ok(url)
    }
}

// Otherwise the last path segment would be replaced when joining
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

pub fn receive_response_body(response: Response) -> anyhow::Result<Bytes> {
    let response_status = response.status();
    let bytes = response.bytes()?;
    accept_response_body(response_status, bytes)
}

/// Only [`StatusCode::OK`] is accepted.
pub fn accept_response_body(response_status: StatusCode, bytes: Bytes) -> anyhow::Result<Bytes> {
    if response_status != StatusCode::OK {
        let json = serde_json::from_slice::<serde_json::Value>(&bytes).unwrap_or_default();
        let err = if json.is_null() {
            anyhow::anyhow!("{response_status}")
        } else {
            anyhow::anyhow!("{response_status}").context(json)
        };
        return Err(err);
    }
    Ok(bytes)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
