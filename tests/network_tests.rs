use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use slackweb::core::config::ApiConfig;
use slackweb::errors::SlackError;
use slackweb::slack::{
    Endpoint, HistoryOptions, HttpNetworkInterface, NetworkInterface, Parameters, SlackWebApi,
    UploadOptions,
};

const TOKEN: &str = "xoxb-test";

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig::new(TOKEN)
        .with_base_url(server.base_url())
        .with_timeout(Duration::from_secs(5))
        .with_max_retries(0)
}

fn channel_parameters(channel: &str) -> Parameters {
    let mut parameters = Parameters::new();
    parameters.insert("channel".into(), json!(channel));
    parameters.insert("inclusive".into(), json!(false));
    parameters
}

#[tokio::test]
async fn test_request_posts_form_with_bearer_token() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/channels.info")
                .header("authorization", "Bearer xoxb-test")
                .body_contains("channel=C123")
                .body_contains("inclusive=false");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(json!({"ok": true, "channel": {"id": "C123"}}).to_string());
        })
        .await;

    let network = HttpNetworkInterface::new(&config_for(&server)).unwrap();
    let response = network
        .request(Endpoint::ChannelsInfo, TOKEN, channel_parameters("C123"))
        .await
        .expect("request should succeed");

    mock.assert_async().await;
    assert_eq!(response["channel"]["id"], "C123");
}

#[tokio::test]
async fn test_request_maps_ok_false_to_api_error() {
    let server = MockServer::start_async().await;

    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels.info");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(json!({"ok": false, "error": "channel_not_found"}).to_string());
        })
        .await;

    let network = HttpNetworkInterface::new(&config_for(&server)).unwrap();
    let err = network
        .request(Endpoint::ChannelsInfo, TOKEN, channel_parameters("C404"))
        .await
        .expect_err("api error expected");

    assert_eq!(err.api_error_code(), Some("channel_not_found"));
}

#[tokio::test]
async fn test_request_maps_server_errors_to_http_error() {
    let server = MockServer::start_async().await;

    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth.test");
            then.status(503);
        })
        .await;

    let network = HttpNetworkInterface::new(&config_for(&server)).unwrap();
    let err = network
        .request(Endpoint::AuthTest, TOKEN, Parameters::new())
        .await
        .expect_err("http error expected");

    assert!(matches!(err, SlackError::HttpError(msg) if msg.contains("auth.test")));
}

#[tokio::test]
async fn test_request_rejects_non_json_body() {
    let server = MockServer::start_async().await;

    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth.test");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let network = HttpNetworkInterface::new(&config_for(&server)).unwrap();
    let err = network
        .request(Endpoint::AuthTest, TOKEN, Parameters::new())
        .await
        .expect_err("parse error expected");

    assert!(matches!(err, SlackError::ParseError(_)));
}

#[tokio::test]
async fn test_request_retries_http_429_until_exhausted() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/users.list");
            then.status(429).header("Retry-After", "0");
        })
        .await;

    let network = HttpNetworkInterface::new(&config_for(&server).with_max_retries(2)).unwrap();
    let err = network
        .request(Endpoint::UsersList, TOKEN, Parameters::new())
        .await
        .expect_err("rate limit expected");

    assert!(matches!(err, SlackError::RateLimited(d) if d == Duration::ZERO));
    assert_eq!(mock.hits_async().await, 3);
}

#[tokio::test]
async fn test_request_does_not_retry_when_retries_disabled() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/users.list");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(json!({"ok": false, "error": "ratelimited"}).to_string());
        })
        .await;

    let network = HttpNetworkInterface::new(&config_for(&server)).unwrap();
    let err = network
        .request(Endpoint::UsersList, TOKEN, Parameters::new())
        .await
        .expect_err("rate limit expected");

    assert!(matches!(err, SlackError::RateLimited(_)));
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_upload_sends_multipart_file_and_fields() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/files.upload")
                .header("authorization", "Bearer xoxb-test")
                .body_contains("filename=\"quarterly.csv\"")
                .body_contains("region,revenue")
                .body_contains("name=\"channels\"")
                .body_contains("C1,C2");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(
                    json!({
                        "ok": true,
                        "file": {"id": "F0S43PZDF", "name": "quarterly.csv", "filetype": "csv"}
                    })
                    .to_string(),
                );
        })
        .await;

    let api = SlackWebApi::from_config(&config_for(&server)).unwrap();
    let file = api
        .upload_file(
            b"region,revenue\nemea,42\n".to_vec(),
            "quarterly.csv",
            UploadOptions {
                channels: Some(vec!["C1".into(), "C2".into()]),
                ..UploadOptions::default()
            },
        )
        .await
        .expect("upload should succeed")
        .expect("file should be parsed");

    mock.assert_async().await;
    assert_eq!(file.id.as_deref(), Some("F0S43PZDF"));
    assert_eq!(file.filetype.as_deref(), Some("csv"));
}

#[tokio::test]
async fn test_web_api_history_over_http() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/im.history")
                .body_contains("channel=D1")
                .body_contains("count=100")
                .body_contains("oldest=0")
                .body_contains("unreads=false");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(
                    json!({
                        "ok": true,
                        "has_more": false,
                        "messages": [{"type": "message", "user": "U1", "text": "ping", "ts": "1.000001"}]
                    })
                    .to_string(),
                );
        })
        .await;

    let network: Arc<dyn NetworkInterface> =
        Arc::new(HttpNetworkInterface::new(&config_for(&server)).unwrap());
    let api = SlackWebApi::new(network, TOKEN);

    let history = api
        .im_history("D1", HistoryOptions::default())
        .await
        .expect("history should succeed")
        .expect("history should parse");

    mock.assert_async().await;
    assert_eq!(history.messages.len(), 1);
    assert_eq!(history.messages[0].text.as_deref(), Some("ping"));
}

#[tokio::test]
async fn test_request_retries_ratelimited_body_then_succeeds() {
    let server = MockServer::start_async().await;

    let mut limited = server
        .mock_async(|when, then| {
            when.method(POST).path("/users.list");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(json!({"ok": false, "error": "ratelimited"}).to_string());
        })
        .await;

    let network = HttpNetworkInterface::new(&config_for(&server).with_max_retries(1)).unwrap();
    let pending = tokio::spawn(async move {
        network
            .request(Endpoint::UsersList, TOKEN, Parameters::new())
            .await
    });

    // The transport waits a second before retrying; swap the answer meanwhile.
    while limited.hits_async().await == 0 {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    limited.delete_async().await;
    let accepted = server
        .mock_async(|when, then| {
            when.method(POST).path("/users.list");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(json!({"ok": true, "members": [{"id": "U1"}]}).to_string());
        })
        .await;

    let response = pending
        .await
        .expect("request task panicked")
        .expect("retry should succeed");

    assert_eq!(response["members"][0]["id"], "U1");
    assert_eq!(accepted.hits_async().await, 1);
}
