//! Client configuration
//!
//! Endpoint templates are relative, the way a page served from the LMS would
//! use them. `base_url` is the origin they are resolved against when the
//! transport is not a browser.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ErrorKind, Result};
use crate::model::dtos::EnrollmentUrls;

pub const DEFAULT_CREDENTIAL_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_CREDENTIAL_COOKIE: &str = "csrftoken";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    pub base_url: Url,
    pub urls: EnrollmentUrls,
    pub credential_header: String,
    pub credential_cookie: String,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8000/").expect("static url is valid"),
            urls: EnrollmentUrls::default(),
            credential_header: DEFAULT_CREDENTIAL_HEADER.to_string(),
            credential_cookie: DEFAULT_CREDENTIAL_COOKIE.to_string(),
        }
    }
}

impl EnrollmentConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::default().with_base_url(Url::parse(base_url)?))
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_urls(mut self, urls: EnrollmentUrls) -> Self {
        self.urls = urls;
        self
    }

    pub fn with_credential_header(mut self, header: impl Into<String>) -> Self {
        self.credential_header = header.into();
        self
    }

    pub fn with_credential_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.credential_cookie = cookie.into();
        self
    }

    /// Resolves an endpoint path (absolute or relative) against `base_url`.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.cannot_be_a_base() {
            return Err(ErrorKind::ConfigError(format!(
                "base url {} cannot resolve relative paths",
                self.base_url
            ))
            .into());
        }
        if self.credential_header.trim().is_empty() {
            return Err(ErrorKind::ConfigError("credential header name is empty".to_string()).into());
        }
        Ok(())
    }
}
