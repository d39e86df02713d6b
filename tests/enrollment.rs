use enrollment_interface::app::EnrollmentInterface;
use enrollment_interface::client::ReqwestClient;
use enrollment_interface::config::EnrollmentConfig;
use enrollment_interface::credential::{NoCredential, StaticCredential};
use enrollment_interface::interface::{CredentialSource, HttpClient};
use enrollment_interface::navigate::RecordingNavigator;
use enrollment_interface::EnrollmentOutcome;
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COURSE_KEY: &str = "edX/DemoX/Demo_Course";
const TRACK_SELECTION: &str = "/course_modes/choose/edX/DemoX/Demo_Course/";

async fn interface<C: CredentialSource>(
    server: &MockServer,
    credentials: C,
) -> (
    EnrollmentInterface<ReqwestClient, C, RecordingNavigator>,
    RecordingNavigator,
) {
    let config = EnrollmentConfig::new(&server.uri()).unwrap();
    let client = ReqwestClient::new(config.clone()).await.unwrap();
    let navigator = RecordingNavigator::new();
    let interface = EnrollmentInterface::new(client, credentials, navigator.clone(), config.urls);
    (interface, navigator)
}

async fn mount_enrollment(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/enrollment/v1/enrollment"))
        .and(header("X-CSRFToken", "token"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(body_json(json!({ "course_details": { "course_id": COURSE_KEY } })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn accepted_enrollment_redirects_to_track_selection() {
    let server = MockServer::start().await;
    mount_enrollment(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "mode": "audit", "is_active": true })),
    )
    .await;
    let (interface, navigator) = interface(&server, StaticCredential("token".into())).await;

    let outcome = interface.enroll(COURSE_KEY).await;

    assert_eq!(
        outcome,
        EnrollmentOutcome::Enrolled {
            redirect_url: TRACK_SELECTION.to_string()
        }
    );
    assert_eq!(navigator.visited(), vec![TRACK_SELECTION]);
}

#[tokio::test]
async fn blocked_enrollment_redirects_to_message_page() {
    let server = MockServer::start().await;
    mount_enrollment(
        &server,
        ResponseTemplate::new(403).set_body_json(json!({ "user_message_url": "/blocked" })),
    )
    .await;
    let (interface, navigator) = interface(&server, StaticCredential("token".into())).await;

    let outcome = interface.enroll(COURSE_KEY).await;

    assert_eq!(
        outcome,
        EnrollmentOutcome::Blocked {
            redirect_url: "/blocked".to_string()
        }
    );
    assert_eq!(navigator.visited(), vec!["/blocked"]);
}

#[tokio::test]
async fn missing_free_mode_redirects_to_track_selection() {
    let server = MockServer::start().await;
    mount_enrollment(&server, ResponseTemplate::new(400).set_body_json(json!({}))).await;
    let (interface, navigator) = interface(&server, StaticCredential("token".into())).await;

    let outcome = interface.enroll(COURSE_KEY).await;

    assert_eq!(
        outcome,
        EnrollmentOutcome::NotCompleted {
            status: Some(400),
            redirect_url: TRACK_SELECTION.to_string()
        }
    );
    assert_eq!(navigator.visited(), vec![TRACK_SELECTION]);
}

#[tokio::test]
async fn forbidden_without_message_url_is_not_a_block() {
    let server = MockServer::start().await;
    mount_enrollment(&server, ResponseTemplate::new(403).set_body_json(json!({}))).await;
    let (interface, navigator) = interface(&server, StaticCredential("token".into())).await;

    let outcome = interface.enroll(COURSE_KEY).await;

    assert_eq!(
        outcome,
        EnrollmentOutcome::NotCompleted {
            status: Some(403),
            redirect_url: TRACK_SELECTION.to_string()
        }
    );
    assert_eq!(navigator.visited(), vec![TRACK_SELECTION]);
}

#[tokio::test]
async fn html_error_body_falls_back_to_track_selection() {
    let server = MockServer::start().await;
    mount_enrollment(
        &server,
        ResponseTemplate::new(403).set_body_string("<html><body>Forbidden</body></html>"),
    )
    .await;
    let (interface, navigator) = interface(&server, StaticCredential("token".into())).await;

    interface.enroll(COURSE_KEY).await;

    assert_eq!(navigator.visited(), vec![TRACK_SELECTION]);
}

#[tokio::test]
async fn unreachable_server_still_redirects_once() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let config = EnrollmentConfig::new(&format!("http://{address}/")).unwrap();
    let client = ReqwestClient::new(config.clone()).await.unwrap();
    let navigator = RecordingNavigator::new();
    let interface = EnrollmentInterface::new(
        client,
        StaticCredential("token".into()),
        navigator.clone(),
        config.urls,
    );

    let outcome = interface.enroll(COURSE_KEY).await;

    assert_eq!(
        outcome,
        EnrollmentOutcome::NotCompleted {
            status: None,
            redirect_url: TRACK_SELECTION.to_string()
        }
    );
    assert_eq!(navigator.visited(), vec![TRACK_SELECTION]);
}

#[tokio::test]
async fn enrollment_info_returns_body_unchanged() {
    let server = MockServer::start().await;
    let info = json!({
        "course_id": "edX/DemoX/Demo_Course",
        "invite_only": false,
        "course_modes": [
            { "slug": "audit", "min_price": 0, "currency": "usd" },
            { "slug": "verified", "min_price": 49, "currency": "usd" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/api/enrollment/v1/course/edX/DemoX/Demo_Course"))
        .and(header("X-CSRFToken", "token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info.clone()))
        .expect(1)
        .mount(&server)
        .await;
    let (interface, navigator) = interface(&server, StaticCredential("token".into())).await;

    let fetched = interface.enrollment_info("/edX/DemoX/Demo_Course").await.unwrap();

    assert_eq!(fetched, info);
    assert!(navigator.visited().is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn enrollment_info_failure_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/enrollment/v1/course/edX/Missing/Course"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"message":"No course found"}"#),
        )
        .mount(&server)
        .await;
    let (interface, _) = interface(&server, StaticCredential("token".into())).await;

    let err = interface
        .enrollment_info("/edX/Missing/Course")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body(), Some(r#"{"message":"No course found"}"#));
}

#[tokio::test]
async fn credential_is_read_on_every_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/enrollment/v1/enrollment"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let current = Arc::new(Mutex::new("first".to_string()));
    let source = {
        let current = Arc::clone(&current);
        move || Some(current.lock().unwrap().clone())
    };
    let (interface, navigator) = interface(&server, source).await;

    interface.enroll(COURSE_KEY).await;
    *current.lock().unwrap() = "second".to_string();
    interface.enroll(COURSE_KEY).await;

    let tokens: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| {
            request.headers.get("x-csrftoken").unwrap().to_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(tokens, vec!["first", "second"]);
    assert_eq!(navigator.visited().len(), 2);
}

#[tokio::test]
async fn missing_credential_omits_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/enrollment/v1/enrollment"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let (interface, _) = interface(&server, NoCredential).await;

    interface.enroll(COURSE_KEY).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-csrftoken").is_none());
}

#[tokio::test]
async fn connected_client_sends_cookie_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/enrollment/v1/course/edX/DemoX/Demo_Course"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "csrftoken=from-cookie; Path=/")
                .set_body_json(json!({ "course_modes": [] })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/enrollment/v1/enrollment"))
        .and(header("X-CSRFToken", "from-cookie"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = EnrollmentConfig::new(&server.uri()).unwrap();
    let navigator = RecordingNavigator::new();
    let interface = EnrollmentInterface::connect(config, navigator.clone())
        .await
        .unwrap();

    interface.enrollment_info("/edX/DemoX/Demo_Course").await.unwrap();
    let outcome = interface.enroll(COURSE_KEY).await;

    assert_eq!(outcome.redirect_url(), TRACK_SELECTION);
    assert_eq!(navigator.visited(), vec![TRACK_SELECTION]);
}

#[tokio::test]
async fn concurrent_enrollments_redirect_independently() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "course_details": { "course_id": "edX/A/1" } })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "course_details": { "course_id": "edX/B/2" } })))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "user_message_url": "/embargo/blocked-message/enrollment/default/"
        })))
        .mount(&server)
        .await;
    let (interface, navigator) = interface(&server, StaticCredential("token".into())).await;

    let (first, second) = tokio::join!(interface.enroll("edX/A/1"), interface.enroll("edX/B/2"));

    assert_eq!(first.redirect_url(), "/course_modes/choose/edX/A/1/");
    assert_eq!(
        second.redirect_url(),
        "/embargo/blocked-message/enrollment/default/"
    );

    let mut visited = navigator.visited();
    visited.sort();
    assert_eq!(
        visited,
        vec![
            "/course_modes/choose/edX/A/1/",
            "/embargo/blocked-message/enrollment/default/",
        ]
    );
}
