pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }

    /// HTTP status of a request the server answered with a non-2xx code.
    pub fn status(&self) -> Option<u16> {
        match *self.inner {
            ErrorKind::RequestFailed { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Raw response body of a request the server answered with a non-2xx code.
    pub fn body(&self) -> Option<&str> {
        match *self.inner {
            ErrorKind::RequestFailed { ref body, .. } => Some(body),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Error {
        Error::new(ErrorKind::InvalidHeader(e.to_string()))
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::header::InvalidHeaderName> for Error {
    fn from(e: reqwest::header::InvalidHeaderName) -> Error {
        Error::new(ErrorKind::InvalidHeader(e.to_string()))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::new(ErrorKind::UrlError(e.to_string()))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    /// The server answered with a non-2xx status.
    RequestFailed { status: u16, body: String },
    InvalidHeader(String),
    UrlError(String),
    ConfigError(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::RequestFailed { status, ref body } => {
                write!(f, "RequestFailed: status {status}, body {body:?}")
            }
            ErrorKind::InvalidHeader(ref e) => write!(f, "InvalidHeader: {e:?}"),
            ErrorKind::UrlError(ref e) => write!(f, "UrlError: {e:?}"),
            ErrorKind::ConfigError(ref e) => write!(f, "ConfigError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "request error: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "request error: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "invalid json: {e}"),
            ErrorKind::RequestFailed { status, ref body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            ErrorKind::InvalidHeader(ref e) => write!(f, "invalid header: {e}"),
            ErrorKind::UrlError(ref e) => write!(f, "invalid url: {e}"),
            ErrorKind::ConfigError(ref e) => write!(f, "invalid config: {e}"),
        }
    }
}
