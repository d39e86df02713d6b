#![allow(async_fn_in_trait)] // the traits are only used through generics inside this crate

use crate::config::EnrollmentConfig;
use crate::error::Result;
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new(config: EnrollmentConfig) -> Result<Self>
    where
        Self: Sized;
}

/// Transport for the enrollment API.
///
/// `url` is an endpoint path as the page would use it; backends resolve it
/// however their platform does. Both calls fail with
/// [`ErrorKind::RequestFailed`](crate::error::ErrorKind::RequestFailed) when
/// the server answers with a non-2xx status.
pub trait EnrollmentApi {
    /// GET a JSON document
    async fn get_json(&self, url: &str, credential: Option<&str>) -> Result<Value>;

    /// POST a JSON body. The success body is returned as `Value::Null` when
    /// it is empty or not JSON.
    async fn post_json(&self, url: &str, body: &Value, credential: Option<&str>) -> Result<Value>;
}

/// Supplies the anti-forgery token. Called once per outbound request so a
/// rotated token is picked up on the next call.
pub trait CredentialSource {
    fn credential(&self) -> Option<String>;
}

/// Where the user is sent after an enrollment attempt
pub trait Navigator {
    fn navigate(&self, url: &str);
}

impl<F> CredentialSource for F
where
    F: Fn() -> Option<String>,
{
    fn credential(&self) -> Option<String> {
        self()
    }
}

impl<T: Navigator + ?Sized> Navigator for std::sync::Arc<T> {
    fn navigate(&self, url: &str) {
        (**self).navigate(url)
    }
}
