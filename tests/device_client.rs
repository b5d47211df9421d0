// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use lb112x_exporter::{AppError, ClientOptions, Lb112xClient};
use mockito::{Matcher, Server};
use std::time::Duration;

const STATUS_BODY: &str = r#"{
    "general": {"model": "LB1120", "IMEI": "359999999999999", "devTemperature": 38},
    "power": {"deviceTempCritical": false, "resetRequired": "NoResetRequired"},
    "session": {"userRole": "Guest", "lang": "en", "secToken": "tok-1234"},
    "wwan": {"IP": "10.0.0.2", "registerNetworkDisplay": "Telekom.de",
             "signalStrength": {"rssi": -65, "bars": 4}}
}"#;

fn status_query() -> Matcher {
    Matcher::UrlEncoded("internalapi".into(), "1".into())
}

fn client_for(server: &Server, password: &str) -> Lb112xClient {
    Lb112xClient::new(&server.url(), password, ClientOptions::default()).unwrap()
}

// --- poll ---

#[tokio::test]
async fn poll_decodes_status_document() {
    let mut server = Server::new_async().await;
    let status = server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(STATUS_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, "pw");
    let snapshot = client.poll().await.unwrap();

    status.assert_async().await;
    assert_eq!(snapshot.general.model, "LB1120");
    assert_eq!(snapshot.general.temperature, 38);
    assert_eq!(snapshot.session.security_token, "tok-1234");
    assert_eq!(snapshot.wwan.signal_strength.rssi, -65);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn poll_with_trailing_slash_base_url() {
    let mut server = Server::new_async().await;
    let status = server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_body(STATUS_BODY)
        .expect(1)
        .create_async()
        .await;

    let url = format!("{}/", server.url());
    let client = Lb112xClient::new(&url, "pw", ClientOptions::default()).unwrap();
    client.poll().await.unwrap();

    status.assert_async().await;
}

#[tokio::test]
async fn poll_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_status(200)
        .with_body("<html>login required</html>")
        .create_async()
        .await;

    let client = client_for(&server, "pw");
    let err = client.poll().await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn poll_unreachable_device_is_transport_error() {
    let client = Lb112xClient::new(
        "http://127.0.0.1:1",
        "pw",
        ClientOptions::default().timeout(Duration::from_millis(500)),
    )
    .unwrap();

    let err = client.poll().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)), "got {err:?}");
}

// --- authenticate ---

#[tokio::test]
async fn authenticate_posts_token_from_status() {
    let mut server = Server::new_async().await;
    let status = server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_body(STATUS_BODY)
        .expect(1)
        .create_async()
        .await;
    let login = server
        .mock("POST", "/Forms/config")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "tok-1234".into()),
            Matcher::UrlEncoded("session.password".into(), "s3cret&pw".into()),
        ]))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, "s3cret&pw");
    client.authenticate().await.unwrap();

    status.assert_async().await;
    login.assert_async().await;
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn authenticate_rejected_login_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_body(STATUS_BODY)
        .create_async()
        .await;
    let login = server
        .mock("POST", "/Forms/config")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, "wrong");
    let err = client.authenticate().await.unwrap_err();

    login.assert_async().await;
    match err {
        AppError::AuthenticationFailed { status } => assert_eq!(status.as_u16(), 401),
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn authenticate_failure_after_success_clears_state() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_body(STATUS_BODY)
        .create_async()
        .await;
    let ok = server
        .mock("POST", "/Forms/config")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, "pw");
    client.authenticate().await.unwrap();
    assert!(client.is_authenticated());

    ok.remove_async().await;
    server
        .mock("POST", "/Forms/config")
        .with_status(500)
        .create_async()
        .await;

    assert!(client.authenticate().await.is_err());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn authenticate_skips_login_when_status_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_body("not json")
        .create_async()
        .await;
    let login = server
        .mock("POST", "/Forms/config")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, "pw");
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(err, AppError::Decode(_)));
    login.assert_async().await;
}

#[tokio::test]
async fn session_cookie_is_sent_after_login() {
    let mut server = Server::new_async().await;
    let anonymous = server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .match_header("cookie", Matcher::Missing)
        .with_body(STATUS_BODY)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("POST", "/Forms/config")
        .with_status(200)
        .with_header("set-cookie", "sessionId=abc123; Path=/")
        .create_async()
        .await;
    let with_session = server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .match_header("cookie", Matcher::Regex("sessionId=abc123".into()))
        .with_body(STATUS_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, "pw");
    client.authenticate().await.unwrap();
    client.poll().await.unwrap();

    anonymous.assert_async().await;
    with_session.assert_async().await;
}

#[tokio::test]
async fn custom_cookie_jar_receives_session_cookie() {
    use reqwest::cookie::CookieStore;
    use std::sync::Arc;

    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .with_body(STATUS_BODY)
        .create_async()
        .await;
    server
        .mock("POST", "/Forms/config")
        .with_status(200)
        .with_header("set-cookie", "sessionId=jar42; Path=/")
        .create_async()
        .await;

    let jar = Arc::new(reqwest::cookie::Jar::default());
    let client = Lb112xClient::new(
        &server.url(),
        "pw",
        ClientOptions::default().cookie_jar(jar.clone()),
    )
    .unwrap();
    client.authenticate().await.unwrap();

    let url: reqwest::Url = server.url().parse().unwrap();
    let cookies = jar.cookies(&url).expect("cookie stored");
    assert!(cookies.to_str().unwrap().contains("sessionId=jar42"));
}

#[tokio::test]
async fn prebuilt_http_client_is_used_as_is() {
    let mut server = Server::new_async().await;
    let status = server
        .mock("GET", "/api/model.json")
        .match_query(status_query())
        .match_header("x-client-marker", "custom")
        .with_body(STATUS_BODY)
        .expect(1)
        .create_async()
        .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        "x-client-marker",
        reqwest::header::HeaderValue::from_static("custom"),
    );
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    // The timeout would trip every request if it were applied to the prebuilt client
    let options = ClientOptions::default()
        .timeout(Duration::from_nanos(1))
        .http_client(http);
    let client = Lb112xClient::new(&server.url(), "pw", options).unwrap();
    let snapshot = client.poll().await.unwrap();

    status.assert_async().await;
    assert_eq!(snapshot.general.model, "LB1120");
}
