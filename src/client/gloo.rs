//! WASM HTTP client implementation using gloo_net
//!
//! Requests go through the browser's fetch API, so relative endpoint paths are
//! resolved against the current page and the session cookies ride along.

use crate::config::EnrollmentConfig;
use crate::error::{ErrorKind, Result};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use web_sys::RequestCredentials;

use crate::interface::{EnrollmentApi, HttpClient};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct GlooClient {
    config: EnrollmentConfig,
}

impl HttpClient for GlooClient {
    async fn new(config: EnrollmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl GlooClient {
    pub fn config(&self) -> &EnrollmentConfig {
        &self.config
    }

    /// Add the headers and settings every enrollment request carries
    fn prepare(&self, builder: RequestBuilder, credential: Option<&str>) -> RequestBuilder {
        let builder = builder
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json");

        match credential {
            Some(token) => builder.header(&self.config.credential_header, token),
            None => {
                log::debug!(
                    "No credential available, sending request without {}",
                    self.config.credential_header
                );
                builder
            }
        }
    }

    /// Read the body of a response, failing on a non-2xx status
    async fn read_success(resp: Response) -> Result<String> {
        let status = resp.status();
        let body = resp.text().await?;

        if !resp.ok() {
            log::debug!("Request failed with status {status}: {body}");
            return Err(ErrorKind::RequestFailed { status, body }.into());
        }

        Ok(body)
    }
}

impl EnrollmentApi for GlooClient {
    async fn get_json(&self, url: &str, credential: Option<&str>) -> Result<Value> {
        log::debug!("GET {url}");

        let resp = self.prepare(Request::get(url), credential).send().await?;

        let body = Self::read_success(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json(&self, url: &str, body: &Value, credential: Option<&str>) -> Result<Value> {
        log::debug!("POST {url}");

        let resp = self
            .prepare(Request::post(url), credential)
            .header("Content-Type", "application/json; charset=utf-8")
            .body(serde_json::to_string(body)?)?
            .send()
            .await?;

        let body = Self::read_success(resp).await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }
}
