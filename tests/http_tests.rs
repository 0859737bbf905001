mod common;
use common::{request_body, serve_once};
use rpresence::api::wire::ClockRequest;
use rpresence::api::{AttendanceService, AuthService, HttpClient};
use rpresence::core::AttendanceStore;
use rpresence::models::user::User;
use rpresence::errors::AppError;
use rpresence::models::clock_type::ClockType;
use rpresence::models::location::Coordinates;
use std::time::Duration;

fn client(login_url: &str, attendance_url: &str) -> HttpClient {
    HttpClient::new(login_url, attendance_url, Duration::from_secs(5)).expect("client")
}

fn clock_in_request() -> ClockRequest {
    ClockRequest::new("42", ClockType::ClockIn, Coordinates::new(45.5, 9.2))
}

#[test]
fn test_login_posts_credentials_and_parses_user() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":{"id":17,"name":"Alice","email":"alice@example.com"}}"#,
    );
    let login_url = format!("{}/api/employee/login", url);

    let user = client(&login_url, &url)
        .authenticate("alice@example.com", "secret")
        .expect("login");

    assert_eq!(user.id, "17");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    let raw = server.join().expect("server");
    assert!(raw.starts_with("POST /api/employee/login"));
    let body = request_body(&raw);
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["password"], "secret");
}

#[test]
fn test_login_copies_sparse_fields() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":{"id":1.5,"name":null}}"#,
    );

    let user = client(&url, &url).authenticate("a@b", "x").expect("login");

    assert_eq!(user.id, "1.5");
    assert_eq!(user.name, "");
    assert_eq!(user.email, "");
    server.join().expect("server");
}

#[test]
fn test_login_accepts_ids_beyond_i64() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":{"id":18446744073709551615,"name":"Big","email":"big@example.com"}}"#,
    );

    let user = client(&url, &url).authenticate("a@b", "x").expect("login");

    assert_eq!(user.id, "18446744073709551615");
    server.join().expect("server");
}

#[test]
fn test_login_non_200_is_rejected() {
    let (url, server) = serve_once(
        "201 Created",
        r#"{"data":{"id":"1","name":"A","email":"a@b"}}"#,
    );

    let err = client(&url, &url).authenticate("a@b", "x").unwrap_err();

    assert!(matches!(err, AppError::Rejected(_)));
    server.join().expect("server");
}

#[test]
fn test_login_malformed_body_is_parse_error() {
    let (url, server) = serve_once("200 OK", r#"{"user":{}}"#);

    let err = client(&url, &url).authenticate("a@b", "x").unwrap_err();

    assert!(matches!(err, AppError::Parse(_)));
    server.join().expect("server");
}

#[test]
fn test_status_sends_employee_id_query() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"status":200,"message":"Employee is currently clocked in"}"#,
    );
    let attendance_url = format!("{}/api/attendance", url);

    let reply = client(&url, &attendance_url).status("42").expect("status");

    assert!(reply.is_clocked_in());
    let raw = server.join().expect("server");
    assert!(raw.starts_with("GET /api/attendance/status?employee_id=42 "));
}

#[test]
fn test_status_body_decides_even_on_error_code() {
    let (url, server) = serve_once(
        "404 Not Found",
        r#"{"status":404,"message":"Employee not found"}"#,
    );

    let reply = client(&url, &url).status("99").expect("status");

    assert!(!reply.is_clocked_in());
    assert_eq!(reply.message.as_str(), Some("Employee not found"));
    server.join().expect("server");
}

#[test]
fn test_status_with_text_status_is_not_clocked_in() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"status":"error","message":"Employee is not clocked in"}"#,
    );
    let mut store = AttendanceStore::new(client(&url, &url));
    let user = User {
        id: "42".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
    };

    store.check_status(Some(&user)).expect("status");

    assert!(store.current_session().is_none());
    server.join().expect("server");
}

#[test]
fn test_status_with_float_code_is_clocked_in() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"status":200.0,"message":"Employee is currently clocked in"}"#,
    );

    let reply = client(&url, &url).status("42").expect("status");

    assert!(reply.is_clocked_in());
    server.join().expect("server");
}

#[test]
fn test_status_non_json_body_is_parse_error() {
    let (url, server) = serve_once("502 Bad Gateway", "<html>upstream down</html>");

    let err = client(&url, &url).status("42").unwrap_err();

    assert!(matches!(err, AppError::Parse(_)));
    server.join().expect("server");
}

#[test]
fn test_record_posts_clock_event() {
    let (url, server) = serve_once("201 Created", r#"{"message":"ok"}"#);
    let attendance_url = format!("{}/api/attendance", url);

    client(&url, &attendance_url)
        .record(&clock_in_request())
        .expect("record");

    let raw = server.join().expect("server");
    assert!(raw.starts_with("POST /api/attendance "));
    let body = request_body(&raw);
    assert_eq!(body["employee_id"], "42");
    assert_eq!(body["type"], "clock_in");
    assert_eq!(body["clock_in"], true);
    assert_eq!(body["latitude"], 45.5);
    assert_eq!(body["longitude"], 9.2);
}

#[test]
fn test_record_rejection_carries_server_message() {
    let (url, server) = serve_once("400 Bad Request", r#"{"message":"Already clocked in"}"#);

    let err = client(&url, &url).record(&clock_in_request()).unwrap_err();

    assert_eq!(err.to_string(), "Already clocked in");
    server.join().expect("server");
}

#[test]
fn test_record_rejection_falls_back_per_kind() {
    let (url, server) = serve_once("500 Internal Server Error", "oops");
    let err = client(&url, &url).record(&clock_in_request()).unwrap_err();
    assert_eq!(err.to_string(), "Failed to punch in");
    server.join().expect("server");

    let (url, server) = serve_once("400 Bad Request", "{}");
    let out = ClockRequest::new("42", ClockType::ClockOut, Coordinates::new(0.0, 0.0));
    let err = client(&url, &url).record(&out).unwrap_err();
    assert_eq!(err.to_string(), "Failed to punch out");
    server.join().expect("server");
}

#[test]
fn test_unreachable_service_is_transport_error() {
    // port 1 on loopback is not expected to be listening
    let c = client("http://127.0.0.1:1/login", "http://127.0.0.1:1/attendance");

    assert!(matches!(
        c.authenticate("a@b", "x"),
        Err(AppError::Transport(_))
    ));
    assert!(matches!(c.status("42"), Err(AppError::Transport(_))));
}
