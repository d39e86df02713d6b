//! Application module - the enrollment flow
//!
//! [`EnrollmentInterface`] ties a transport, a credential source and a
//! navigator together. It fetches course enrollment info, enrolls the user in
//! a course and sends them to the page that fits the outcome. The
//! platform-specific modules only assemble it from their own backends.

use crate::error::{ErrorKind, Result};
use crate::interface::{CredentialSource, EnrollmentApi, Navigator};
use crate::model::dtos::{EnrollmentRequest, EnrollmentUrls};
use crate::model::structs::{EnrollmentErrorResponse, EnrollmentOutcome};
use serde_json::Value;

// Platform-specific modules
#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

const HTTP_FORBIDDEN: u16 = 403;

#[derive(Debug, Clone)]
pub struct EnrollmentInterface<A, C, N> {
    api: A,
    credentials: C,
    navigator: N,
    urls: EnrollmentUrls,
}

impl<A, C, N> EnrollmentInterface<A, C, N>
where
    A: EnrollmentApi,
    C: CredentialSource,
    N: Navigator,
{
    pub fn new(api: A, credentials: C, navigator: N, urls: EnrollmentUrls) -> Self {
        Self {
            api,
            credentials,
            navigator,
            urls,
        }
    }

    pub fn urls(&self) -> &EnrollmentUrls {
        &self.urls
    }

    /// Get the enrollment info for a course: available course modes, start
    /// and end dates, SKUs and so on. The document is returned as the server
    /// sent it.
    ///
    /// A non-2xx answer fails with [`ErrorKind::RequestFailed`] carrying the
    /// status and the raw body.
    pub async fn enrollment_info(&self, course_key: &str) -> Result<Value> {
        let url = self.enrollment_info_url(course_key);
        let credential = self.credentials.credential();
        self.api.get_json(&url, credential.as_deref()).await
    }

    /// Enroll the user in a course, then redirect them.
    ///
    /// A 403 naming a `user_message_url` sends the user to that page.
    /// Everything else, success included, ends on the track selection page,
    /// where a paid mode can be picked when no free one exists. Exactly one
    /// redirect happens per call, after the request has settled.
    pub async fn enroll(&self, course_key: &str) -> EnrollmentOutcome {
        let outcome = self.submit_enrollment(course_key).await;
        self.redirect(outcome.redirect_url());
        outcome
    }

    async fn submit_enrollment(&self, course_key: &str) -> EnrollmentOutcome {
        let payload = match serde_json::to_value(EnrollmentRequest::new(course_key)) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to encode enrollment request for {course_key}: {e}");
                return self.not_completed(course_key, None);
            }
        };
        let credential = self.credentials.credential();

        match self
            .api
            .post_json(&self.urls.enrollment, &payload, credential.as_deref())
            .await
        {
            Ok(_) => {
                log::info!("Enrolled in {course_key}");
                EnrollmentOutcome::Enrolled {
                    redirect_url: self.track_selection_url(course_key),
                }
            }
            Err(e) => self.classify_failure(course_key, e.kind()),
        }
    }

    fn classify_failure(&self, course_key: &str, kind: &ErrorKind) -> EnrollmentOutcome {
        match kind {
            ErrorKind::RequestFailed { status, body } => {
                let response = EnrollmentErrorResponse::from_body(body);
                match response.message_url() {
                    Some(message_url) if *status == HTTP_FORBIDDEN => {
                        log::warn!("Enrollment in {course_key} blocked, see {message_url}");
                        EnrollmentOutcome::Blocked {
                            redirect_url: message_url.to_string(),
                        }
                    }
                    _ => {
                        log::info!("Enrollment in {course_key} not completed (status {status})");
                        self.not_completed(course_key, Some(*status))
                    }
                }
            }
            other => {
                log::warn!("Enrollment request for {course_key} failed: {other}");
                self.not_completed(course_key, None)
            }
        }
    }

    fn not_completed(&self, course_key: &str, status: Option<u16>) -> EnrollmentOutcome {
        EnrollmentOutcome::NotCompleted {
            status,
            redirect_url: self.track_selection_url(course_key),
        }
    }

    /// URL of the enrollment info endpoint for a course
    pub fn enrollment_info_url(&self, course_key: &str) -> String {
        format!("{}{}", self.urls.enrollment_info, course_key)
    }

    /// URL of the track selection page for a course
    pub fn track_selection_url(&self, course_key: &str) -> String {
        format!("{}{}/", self.urls.track_selection, course_key)
    }

    pub fn redirect(&self, url: &str) {
        self.navigator.navigate(url);
    }
}
