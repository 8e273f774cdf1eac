//! End-to-end tests over a real socket.

use reqwest::header::LOCATION;
use reqwest::StatusCode;
use urlshort::routing::PayloadSources;

mod common;

fn yaml(rules: &str) -> PayloadSources {
    PayloadSources {
        yaml: Some(rules.as_bytes().to_vec()),
        json: None,
    }
}

#[tokio::test]
async fn test_yaml_rule_overrides_builtin_route() {
    let server = common::start_server(yaml(
        "- path: /urlshort-godoc\n  url: https://override.example.com\n",
    ))
    .await;

    let res = common::client()
        .get(server.url("/urlshort-godoc"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "https://override.example.com");

    server.stop().await;
}

#[tokio::test]
async fn test_builtin_route_without_rules() {
    let server = common::start_server(PayloadSources::default()).await;

    let res = common::client().get(server.url("/yaml-godoc")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "https://godoc.org/gopkg.in/yaml.v2");

    server.stop().await;
}

#[tokio::test]
async fn test_greeting_for_unknown_path() {
    let server = common::start_server(PayloadSources::default()).await;

    let res = common::client().get(server.url("/unknown")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "Hello, world!\n");

    server.stop().await;
}

#[tokio::test]
async fn test_json_rules_first_match_wins() {
    let server = common::start_server(PayloadSources {
        yaml: None,
        json: Some(
            br#"[
                {"path": "/dup", "url": "https://first.example"},
                {"path": "/dup", "url": "https://second.example"}
            ]"#
            .to_vec(),
        ),
    })
    .await;

    let client = common::client();
    let res = client.get(server.url("/dup")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "https://first.example");

    // Unmatched paths still reach the built-in layer.
    let res = client.get(server.url("/yaml-godoc")).send().await.unwrap();
    assert_eq!(res.headers()[LOCATION], "https://godoc.org/gopkg.in/yaml.v2");

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_requests_share_rules() {
    let server = common::start_server(yaml(
        "- path: /a\n  url: https://a.example\n- path: /b\n  url: https://b.example\n",
    ))
    .await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..32 {
        let (path, expected) = if i % 2 == 0 {
            ("/a", "https://a.example")
        } else {
            ("/b", "https://b.example")
        };
        let url = server.url(path);
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let res = client.get(url).send().await.unwrap();
            assert_eq!(res.headers()[LOCATION], expected);
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    server.stop().await;
}
