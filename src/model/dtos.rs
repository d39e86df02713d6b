use serde::{Deserialize, Serialize};

/// Payload posted to the enrollment endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub course_details: CourseDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub course_id: String,
}

impl EnrollmentRequest {
    pub fn new(course_key: &str) -> Self {
        Self {
            course_details: CourseDetails {
                course_id: course_key.to_string(),
            },
        }
    }
}

/// Endpoint templates. Course keys are appended verbatim, so the keys are
/// expected to carry any path segment they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentUrls {
    pub enrollment: String,
    pub enrollment_info: String,
    pub track_selection: String,
}

impl Default for EnrollmentUrls {
    fn default() -> Self {
        Self {
            enrollment: "/api/enrollment/v1/enrollment".to_string(),
            enrollment_info: "api/enrollment/v1/course".to_string(),
            track_selection: "/course_modes/choose/".to_string(),
        }
    }
}
