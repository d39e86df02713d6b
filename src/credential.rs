//! Credential sources for the anti-forgery header

use crate::interface::CredentialSource;

/// A fixed token, e.g. passed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredential(pub String);

impl CredentialSource for StaticCredential {
    fn credential(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredential;

impl CredentialSource for NoCredential {
    fn credential(&self) -> Option<String> {
        None
    }
}

/// Look up `name` in a `Cookie` header style string (`a=1; b=2`)
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(feature = "no-wasm")]
pub use jar::CookieJarCredential;

#[cfg(feature = "no-wasm")]
mod jar {
    use super::cookie_value;
    use crate::interface::CredentialSource;
    use reqwest::cookie::{CookieStore, Jar};
    use std::sync::Arc;
    use url::Url;

    /// Reads a cookie from the jar the reqwest client stores server cookies in
    #[derive(Debug, Clone)]
    pub struct CookieJarCredential {
        jar: Arc<Jar>,
        url: Url,
        name: String,
    }

    impl CookieJarCredential {
        pub fn new(jar: Arc<Jar>, url: Url, name: impl Into<String>) -> Self {
            Self {
                jar,
                url,
                name: name.into(),
            }
        }
    }

    impl CredentialSource for CookieJarCredential {
        fn credential(&self) -> Option<String> {
            let header = self.jar.cookies(&self.url)?;
            cookie_value(header.to_str().ok()?, &self.name)
        }
    }
}

#[cfg(feature = "wasm")]
pub use document::DocumentCookieCredential;

#[cfg(feature = "wasm")]
mod document {
    use super::cookie_value;
    use crate::interface::CredentialSource;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    /// Reads a cookie from `document.cookie`
    #[derive(Debug, Clone)]
    pub struct DocumentCookieCredential {
        name: String,
    }

    impl DocumentCookieCredential {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }
    }

    impl CredentialSource for DocumentCookieCredential {
        fn credential(&self) -> Option<String> {
            let document = web_sys::window()?
                .document()?
                .dyn_into::<HtmlDocument>()
                .ok()?;
            cookie_value(&document.cookie().ok()?, &self.name)
        }
    }
}
