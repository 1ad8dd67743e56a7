//! Scenario configuration.
//!
//! One configuration structure selects between the generator variants:
//! a fully templated host (bound by hurl at run time) or a hard-coded
//! local endpoint, each with or without an `Authorization` header.

use std::env;

/// Base URL used when the host is not templated.
pub const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding [`DEFAULT_LOCAL_BASE_URL`].
pub const LOCAL_BASE_URL_ENV: &str = "DATAHOST_LOCAL_URL";

/// Release every generated scenario publishes into.
pub const RELEASE_SLUG: &str = "release-1";

/// Hurl variable holding the dataset series identifier.
pub const SERIES_VAR: &str = "series";

/// Hurl variable holding the URL scheme.
pub const SCHEME_VAR: &str = "scheme";

/// Hurl variable holding the host (and port).
pub const HOST_NAME_VAR: &str = "host_name";

/// Hurl variable holding the authorization token.
pub const AUTH_TOKEN_VAR: &str = "auth_token";

/// Rendering options for a generated scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Use `{{scheme}}://{{host_name}}` instead of `local_base_url`.
    pub use_variable_host: bool,
    /// Send `Authorization: {{auth_token}}` with every request.
    pub include_auth_header: bool,
    /// Base URL when `use_variable_host` is off.
    pub local_base_url: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::templated()
    }
}

impl ScenarioConfig {
    /// Host and credentials bound by hurl variables.
    pub fn templated() -> Self {
        Self {
            use_variable_host: true,
            include_auth_header: true,
            local_base_url: DEFAULT_LOCAL_BASE_URL.to_string(),
        }
    }

    /// Hard-coded local endpoint, no credentials.
    pub fn local() -> Self {
        Self {
            use_variable_host: false,
            include_auth_header: false,
            local_base_url: DEFAULT_LOCAL_BASE_URL.to_string(),
        }
    }

    /// Local endpoint, with the base URL taken from `DATAHOST_LOCAL_URL`
    /// when set. The binary loads `.env` before this is read.
    pub fn from_env() -> Self {
        let config = Self::local();
        match env::var(LOCAL_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_local_base_url(url.trim()),
            _ => config,
        }
    }

    /// Toggle the `Authorization` header.
    pub fn with_auth_header(mut self, include: bool) -> Self {
        self.include_auth_header = include;
        self
    }

    /// Set the base URL used when the host is not templated.
    pub fn with_local_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.local_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Prefix for every absolute request URL.
    pub fn base_url(&self) -> String {
        if self.use_variable_host {
            format!("{{{{{}}}}}://{{{{{}}}}}", SCHEME_VAR, HOST_NAME_VAR)
        } else {
            self.local_base_url.clone()
        }
    }
}
