//! End-to-end checks of the HTTP surface over a real socket.

use std::time::Duration;

use quizap_backend::http::Greeting;
use reqwest::{Method, StatusCode};

mod common;

const CORS: [(&str, &str); 5] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-credentials", "true"),
    (
        "access-control-allow-headers",
        "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, accept, origin, Cache-Control, X-Requested-With",
    ),
    ("access-control-allow-methods", "POST, OPTIONS, GET, PUT, DELETE"),
    ("access-control-max-age", "86400"),
];

fn assert_cors(res: &reqwest::Response) {
    for (name, value) in CORS {
        assert_eq!(
            res.headers().get(name).and_then(|v| v.to_str().ok()),
            Some(value),
            "header {name}"
        );
    }
}

#[tokio::test]
async fn get_hello_over_tcp() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .get(server.url("/hello"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );
    assert_cors(&res);
    let greeting: Greeting = res.json().await.unwrap();
    assert_eq!(greeting, quizap_backend::http::greeting());

    server.shutdown.trigger();
}

#[tokio::test]
async fn preflight_over_tcp() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .request(Method::OPTIONS, server.url("/anything"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_cors(&res);
    assert_eq!(res.text().await.unwrap(), "");

    server.shutdown.trigger();
}

#[tokio::test]
async fn unregistered_method_is_not_found() {
    let server = common::start_server().await;
    let client = common::client();

    for method in [Method::HEAD, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let res = client
            .request(method.clone(), server.url("/hello"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} /hello");
        assert_cors(&res);
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let server = common::start_server().await;
    let client = common::client();

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let client = client.clone();
        let url = server.url("/hello");
        tasks.push(tokio::spawn(async move {
            client.get(url).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn server_stops_on_shutdown_trigger() {
    let server = common::start_server().await;
    let client = common::client();

    let url = server.url("/hello");
    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(server.shutdown.trigger(), 1);
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .expect("server task panicked");
    assert!(result.is_ok());

    assert!(client.get(&url).send().await.is_err());
}
