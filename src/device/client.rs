// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! High-level LB112x device API client

use reqwest::cookie::Jar;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::config::defaults;
use crate::error::{AppError, Result};

use super::types::{SessionInfo, StatusSnapshot};

const STATUS_PATH: &str = "/api/model.json?internalapi=1";
const LOGIN_PATH: &str = "/Forms/config";

/// Construction options for [`Lb112xClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    timeout: Duration,
    accept_invalid_certs: bool,
    cookie_jar: Option<Arc<Jar>>,
    http_client: Option<reqwest::Client>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: defaults::CLIENT_TIMEOUT,
            accept_invalid_certs: true,
            cookie_jar: None,
            http_client: None,
        }
    }
}

impl ClientOptions {
    /// Connect and whole-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skip TLS certificate verification. The modem serves a self-signed
    /// certificate, so this is on unless turned off explicitly.
    #[must_use]
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Cookie jar holding the session cookie issued on login
    #[must_use]
    pub fn cookie_jar(mut self, jar: Arc<Jar>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    /// Prebuilt HTTP client. Overrides every other transport option.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    #[must_use]
    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn get_accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    fn build(self) -> Result<reqwest::Client> {
        if let Some(client) = self.http_client {
            return Ok(client);
        }

        let builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .connect_timeout(self.timeout)
            .timeout(self.timeout);

        let builder = match self.cookie_jar {
            Some(jar) => builder.cookie_provider(jar),
            None => builder.cookie_store(true),
        };

        Ok(builder.build()?)
    }
}

/// LB112x device API client
///
/// Polls the status endpoint and performs the token-based login flow.
/// The session cookie returned by a successful login is kept in the
/// client's cookie store and sent with every later request.
pub struct Lb112xClient {
    http: reqwest::Client,
    base_url: String,
    password: String,
    authenticated: AtomicBool,
}

impl std::fmt::Debug for Lb112xClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lb112xClient")
            .field("base_url", &self.base_url)
            .field("password", &"<redacted>")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Lb112xClient {
    /// Creates a new client for the device at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built.
    pub fn new(base_url: &str, password: &str, options: ClientOptions) -> Result<Self> {
        Ok(Self {
            http: options.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            password: password.to_string(),
            authenticated: AtomicBool::new(false),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the most recent login attempt succeeded
    ///
    /// Session expiry is not detected; a stale session still reports `true`
    /// until the next call to [`Self::authenticate`].
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Fetches and decodes the device status
    ///
    /// Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// `AppError::Transport` if the device cannot be reached,
    /// `AppError::Decode` if the body is not a status document.
    pub async fn poll(&self) -> Result<StatusSnapshot> {
        let url = format!("{}{}", self.base_url, STATUS_PATH);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let body = response.bytes().await?;
        let snapshot = serde_json::from_slice(&body)?;
        Ok(snapshot)
    }

    /// Fetches a fresh session, including the login token
    ///
    /// # Errors
    ///
    /// Same as [`Self::poll`].
    pub async fn session(&self) -> Result<SessionInfo> {
        Ok(self.poll().await?.session)
    }

    /// Logs in with the configured password
    ///
    /// Performs one GET for the token followed by one form POST.
    ///
    /// # Errors
    ///
    /// Propagates poll errors, `AppError::Transport` if the POST fails to
    /// complete, and `AppError::AuthenticationFailed` for a non-2xx answer.
    pub async fn authenticate(&self) -> Result<()> {
        let session = match self.session().await {
            Ok(session) => session,
            Err(e) => {
                self.authenticated.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        tracing::debug!("POST {}", url);

        let form = [
            ("token", session.security_token.as_str()),
            ("session.password", self.password.as_str()),
        ];
        let result = self.http.post(&url).form(&form).send().await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.authenticated.store(false, Ordering::SeqCst);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            self.authenticated.store(false, Ordering::SeqCst);
            tracing::warn!("Login to {} rejected: {}", self.base_url, status);
            return Err(AppError::AuthenticationFailed { status });
        }

        self.authenticated.store(true, Ordering::SeqCst);
        tracing::debug!("Authenticated with {}", self.base_url);
        Ok(())
    }
}
