use httpmock::{Method::POST, MockServer};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::lector;

#[test]
fn an_inverted_date_range_is_rejected_before_any_request() {
    let output = lector()
        .args(["--endpoint", "http://127.0.0.1:1/graphql", "--format", "json"])
        .args(["history", "stats", "u1", "--after", "2024-03-10", "--before", "2024-03-01"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["json_version"], json!("1"));
    assert_eq!(json["data"], json!({ "success": false }));
    assert_eq!(json["error"]["code"], json!("E007"));
}

#[test]
fn own_data_needs_a_token() {
    lector()
        .args(["history", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E009]"))
        .stderr(predicate::str::contains("LECTOR_ACCESS_TOKEN"));
}

#[test]
fn an_unreachable_endpoint_is_a_transport_failure() {
    lector()
        .env("LECTOR_RETRIES", "0")
        .env("LECTOR_TIMEOUT_SECS", "5")
        .args(["--endpoint", "http://127.0.0.1:1/graphql", "--token", "secret"])
        .args(["digest", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E001]"))
        .stderr(predicate::str::contains("PersonalizedDigest"));
}

#[test]
fn graphql_errors_are_reported_with_the_operation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "data": null, "errors": [{ "message": "user not found" }] }));
    });

    let output = lector()
        .args(["--endpoint", &server.url("/graphql"), "--format", "json"])
        .args(["profile", "show", "missing"])
        .output()
        .unwrap();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"]["code"], json!("E003"));
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("User"), "{message}");
    assert!(message.contains("user not found"), "{message}");
}

#[test]
fn a_rejected_token_is_reported_as_such() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "data": null,
                "errors": [{
                    "message": "Access denied!",
                    "extensions": { "code": "UNAUTHENTICATED" }
                }]
            }));
    });

    lector()
        .args(["--endpoint", &server.url("/graphql"), "--token", "expired"])
        .args(["profile", "referral", "generic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E002]"));
}

#[test]
fn a_bad_env_value_is_named() {
    lector()
        .env("LECTOR_TIMEOUT_SECS", "soon")
        .args(["profile", "show", "u1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E010]"))
        .stderr(predicate::str::contains("LECTOR_TIMEOUT_SECS"));
}
