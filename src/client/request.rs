//! No-WASM HTTP client implementation using reqwest
//!
//! Endpoint paths are resolved against the configured origin, and the client
//! keeps a cookie jar so the server's CSRF cookie can be read back as the
//! request credential.

use crate::config::EnrollmentConfig;
use crate::error::{ErrorKind, Result};
use reqwest::{
    cookie::Jar,
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Response,
};
use serde_json::Value;
use std::sync::Arc;

use crate::interface::{EnrollmentApi, HttpClient};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
    config: EnrollmentConfig,
    jar: Arc<Jar>,
}

impl HttpClient for ReqwestClient {
    async fn new(config: EnrollmentConfig) -> Result<Self> {
        config.validate()?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self { client, config, jar })
    }
}

impl ReqwestClient {
    pub fn config(&self) -> &EnrollmentConfig {
        &self.config
    }

    /// The cookie jar shared with the underlying client. Cookies the server
    /// sets are visible here on the next read.
    pub fn cookie_jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    fn credential_headers(&self, credential: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match credential {
            Some(token) => {
                headers.insert(
                    HeaderName::from_bytes(self.config.credential_header.as_bytes())?,
                    HeaderValue::from_str(token)?,
                );
            }
            None => log::debug!(
                "No credential available, sending request without {}",
                self.config.credential_header
            ),
        }
        Ok(headers)
    }

    /// Read the body of a response, failing on a non-2xx status
    async fn read_success(resp: Response) -> Result<String> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            log::debug!("Request failed with status {}: {}", status.as_u16(), body);
            return Err(ErrorKind::RequestFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(body)
    }
}

impl EnrollmentApi for ReqwestClient {
    async fn get_json(&self, url: &str, credential: Option<&str>) -> Result<Value> {
        let url = self.config.resolve(url)?;
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .headers(self.credential_headers(credential)?)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let body = Self::read_success(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json(&self, url: &str, body: &Value, credential: Option<&str>) -> Result<Value> {
        let url = self.config.resolve(url)?;
        log::debug!("POST {url}");

        let resp = self
            .client
            .post(url)
            .headers(self.credential_headers(credential)?)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;

        let body = Self::read_success(resp).await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }
}
