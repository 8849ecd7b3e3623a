use httpmock::{Method::POST, MockServer};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::lector;

fn page(ids: &[&str], end_cursor: Option<&str>, has_next_page: bool) -> Value {
    let edges: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "node": {
                    "timestamp": "2024-03-02T10:00:00.000Z",
                    "timestampDb": "2024-03-02 10:00:00.123456+00",
                    "post": {
                        "id": id,
                        "title": format!("Post {id}"),
                        "permalink": format!("https://example.com/r/{id}"),
                        "commentsPermalink": format!("https://example.com/posts/{id}")
                    }
                }
            })
        })
        .collect();
    json!({
        "data": {
            "readHistory": {
                "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next_page },
                "edges": edges
            }
        }
    })
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn it_lists_a_single_page_as_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("authorization", "Bearer secret")
            .header("x-client-name", "lector")
            .json_body_includes(r#"{"operationName":"ReadHistory","variables":{"first":2}}"#);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(page(&["p1", "p2"], Some("c2"), true));
    });

    let output = lector()
        .args(["--endpoint", &server.url("/graphql"), "--token", "secret"])
        .args(["--format", "json", "history", "list", "--first", "2"])
        .output()
        .unwrap();

    mock.assert_calls(1);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["data"]["success"], json!(true));
    assert_eq!(json["data"]["next_cursor"], json!("c2"));
    assert_eq!(json["data"]["entries"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["data"]["entries"][1]["timestamp_db"],
        json!("2024-03-02 10:00:00.123456+00")
    );
}

#[test]
fn it_follows_the_cursor_with_all() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .json_body_includes(r#"{"variables":{"first":2,"after":"c0"}}"#);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(page(&["p1", "p2"], Some("c2"), true));
    });
    let second = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .json_body_includes(r#"{"variables":{"first":2,"after":"c2"}}"#);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(page(&["p3"], Some("c3"), false));
    });

    let output = lector()
        .env("LECTOR_ENDPOINT", server.url("/graphql"))
        .env("LECTOR_ACCESS_TOKEN", "secret")
        .args(["--format", "json", "history", "list", "--first", "2", "--all"])
        .args(["--after", "c0"])
        .output()
        .unwrap();

    first.assert_calls(1);
    second.assert_calls(1);
    let json = stdout_json(&output);
    let ids: Vec<&str> = json["data"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["post"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
    assert_eq!(json["data"]["next_cursor"], Value::Null);
}

#[test]
fn it_hides_an_entry() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body_includes(
            r#"{"operationName":"HideReadHistory","variables":{"postId":"p1","timestamp":"2024-03-02 10:00:00.123456+00"}}"#,
        );
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "data": { "hideReadHistory": { "_": true } } }));
    });

    lector()
        .args(["--endpoint", &server.url("/graphql"), "--token", "secret"])
        .args(["history", "hide", "--post-id", "p1"])
        .args(["--timestamp", "2024-03-02 10:00:00.123456+00"])
        .assert()
        .success()
        .stderr(predicates::str::contains("p1"));

    mock.assert_calls(1);
}
