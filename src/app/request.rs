//! No-WASM application assembly
//!
//! Builds an [`EnrollmentInterface`] on reqwest. The CSRF token is read from
//! the client's own cookie jar unless the caller supplies one.

use super::EnrollmentInterface;
use crate::client::ReqwestClient;
use crate::config::EnrollmentConfig;
use crate::credential::CookieJarCredential;
use crate::error::Result;
use crate::interface::{HttpClient, Navigator};

pub type ReqwestEnrollment<N> = EnrollmentInterface<ReqwestClient, CookieJarCredential, N>;

impl<N: Navigator> EnrollmentInterface<ReqwestClient, CookieJarCredential, N> {
    /// Connect to the LMS at `config.base_url`, taking the credential from
    /// the cookie the server sets.
    pub async fn connect(config: EnrollmentConfig, navigator: N) -> Result<Self> {
        let client = ReqwestClient::new(config.clone()).await?;
        let credentials = CookieJarCredential::new(
            client.cookie_jar(),
            config.base_url.clone(),
            config.credential_cookie.clone(),
        );
        Ok(Self::new(client, credentials, navigator, config.urls))
    }

    pub fn client(&self) -> &ReqwestClient {
        &self.api
    }
}
