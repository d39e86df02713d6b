use serde::{Deserialize, Serialize};

/// Error body returned by the enrollment endpoint. Only the redirect hint is
/// read; everything else the server sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnrollmentErrorResponse {
    #[serde(default)]
    pub user_message_url: Option<String>,
}

impl EnrollmentErrorResponse {
    /// Parses an error body. Anything that is not a JSON object is treated as
    /// carrying no message url.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("Enrollment error body is not valid JSON ({e}), ignoring it");
                Self::default()
            }
        }
    }

    pub fn message_url(&self) -> Option<&str> {
        self.user_message_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// How an enrollment attempt ended, and where the user was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnrollmentOutcome {
    /// The server accepted the enrollment.
    Enrolled { redirect_url: String },
    /// Access was denied (403) and the server named a page explaining why,
    /// e.g. a country block.
    Blocked { redirect_url: String },
    /// Any other failure, such as a course without a free mode. `status` is
    /// `None` when no response arrived at all.
    NotCompleted {
        status: Option<u16>,
        redirect_url: String,
    },
}

impl EnrollmentOutcome {
    pub fn redirect_url(&self) -> &str {
        match self {
            EnrollmentOutcome::Enrolled { redirect_url }
            | EnrollmentOutcome::Blocked { redirect_url }
            | EnrollmentOutcome::NotCompleted { redirect_url, .. } => redirect_url,
        }
    }
}
