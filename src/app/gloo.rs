//! WASM application assembly
//!
//! Builds an [`EnrollmentInterface`] that runs inside the LMS page: fetch for
//! requests, `document.cookie` for the CSRF token, `window.location` for
//! redirects.

use super::EnrollmentInterface;
use crate::client::GlooClient;
use crate::config::EnrollmentConfig;
use crate::credential::DocumentCookieCredential;
use crate::error::Result;
use crate::interface::HttpClient;
use crate::navigate::WindowNavigator;

pub type BrowserEnrollment =
    EnrollmentInterface<GlooClient, DocumentCookieCredential, WindowNavigator>;

impl EnrollmentInterface<GlooClient, DocumentCookieCredential, WindowNavigator> {
    pub async fn in_browser(config: EnrollmentConfig) -> Result<Self> {
        let client = GlooClient::new(config.clone()).await?;
        let credentials = DocumentCookieCredential::new(config.credential_cookie.clone());
        Ok(Self::new(client, credentials, WindowNavigator, config.urls))
    }
}
