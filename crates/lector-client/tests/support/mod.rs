//! An in-process GraphQL server holding a fixed reading history.
//!
//! It speaks the same wire format as the real API, so requests go through
//! the full client stack: headers, the GraphQL layer and response decoding.

#![allow(dead_code)]

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use bytes::Bytes;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use lector_client::LectorClient;
use lector_http::{body::body_to_bytes, HttpRequest, HttpResponse, HttpService, HttpServiceError};
use serde_json::{json, Value};
use tower::ServiceExt;
use url::Url;

const DEFAULT_PAGE_SIZE: usize = 30;

/// A request as the fake server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub operation_name: String,
    pub variables: Value,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
struct FakeEntry {
    post_id: String,
    title: String,
    timestamp: String,
    timestamp_db: String,
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<FakeEntry>,
    hidden: HashSet<(String, String)>,
    reads: Vec<(NaiveDate, i64)>,
    digest: Option<Value>,
    requests: Vec<RecordedRequest>,
    failures_left: usize,
}

/// Fake GraphQL server; cheap to clone, all clones share one dataset
#[derive(Clone, Default)]
pub struct FakeGraphQL {
    state: Arc<Mutex<State>>,
}

impl FakeGraphQL {
    /// `entries` reads, newest first, one hour apart. Every third post is about Rust.
    pub fn with_history(entries: usize) -> FakeGraphQL {
        let newest = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let entries = (0..entries)
            .map(|i| {
                let read_at = newest - Duration::hours(i as i64);
                FakeEntry {
                    post_id: format!("post-{i}"),
                    title: if i % 3 == 0 {
                        format!("Learning Rust, part {i}")
                    } else {
                        format!("Post number {i}")
                    },
                    timestamp: read_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                    timestamp_db: read_at.format("%Y-%m-%d %H:%M:%S%.6f+00").to_string(),
                }
            })
            .collect();
        let first_of_march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let reads = (0..31)
            .map(|day| (first_of_march + Duration::days(day), day % 4))
            .collect();
        FakeGraphQL {
            state: Arc::new(Mutex::new(State {
                entries,
                reads,
                ..Default::default()
            })),
        }
    }

    /// A client talking to this server
    pub fn client(&self) -> LectorClient {
        LectorClient::builder()
            .endpoint(Url::parse("http://fake.local/graphql").unwrap())
            .http_service(self.service())
            .access_token("secret")
            .build()
            .unwrap()
    }

    /// Makes the next `count` requests fail at the transport
    pub fn fail_next(&self, count: usize) {
        self.state.lock().unwrap().failures_left = count;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().unwrap()
    }

    /// Keys of the entries currently visible in the history
    pub fn visible_keys(&self) -> Vec<(String, String)> {
        let state = self.state.lock().unwrap();
        state
            .visible(None)
            .map(|entry| (entry.post_id.clone(), entry.timestamp_db.clone()))
            .collect()
    }

    pub fn service(&self) -> HttpService {
        let state = self.state.clone();
        tower::service_fn(move |mut req: HttpRequest| {
            let state = state.clone();
            async move {
                let authorization = req
                    .headers()
                    .get(http::header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                let body = body_to_bytes(req.body_mut()).await.unwrap_or_default();
                let request: Value = serde_json::from_slice(&body).unwrap_or_default();
                let mut state = state.lock().unwrap();
                state.respond(request, authorization)
            }
        })
        .boxed_clone()
    }
}

impl State {
    fn visible<'a>(&'a self, query: Option<&'a str>) -> impl Iterator<Item = &'a FakeEntry> {
        self.entries.iter().filter(move |entry| {
            !self
                .hidden
                .contains(&(entry.post_id.clone(), entry.timestamp_db.clone()))
                && query.map_or(true, |query| {
                    entry.title.to_lowercase().contains(&query.to_lowercase())
                })
        })
    }

    fn respond(
        &mut self,
        request: Value,
        authorization: Option<String>,
    ) -> Result<HttpResponse, HttpServiceError> {
        let operation_name = request["operationName"].as_str().unwrap_or_default().to_string();
        let variables = request["variables"].clone();
        self.requests.push(RecordedRequest {
            operation_name: operation_name.clone(),
            variables: variables.clone(),
            authorization,
        });
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(HttpServiceError::TimedOut);
        }

        let body = match operation_name.as_str() {
            "ReadHistory" => self.history_page(&variables, None),
            "SearchReadingHistory" => {
                let query = variables["query"].as_str().unwrap_or_default().to_string();
                self.history_page(&variables, Some(query.as_str()))
            }
            "SearchReadingHistorySuggestions" => {
                let query = variables["query"].as_str().unwrap_or_default();
                let hits: Vec<Value> = self
                    .visible(Some(query))
                    .take(5)
                    .map(|entry| json!({ "title": entry.title }))
                    .collect();
                json!({ "data": { "searchReadingHistorySuggestions": { "hits": hits } } })
            }
            "HideReadHistory" => {
                let key = (
                    variables["postId"].as_str().unwrap_or_default().to_string(),
                    variables["timestamp"].as_str().unwrap_or_default().to_string(),
                );
                self.hidden.insert(key);
                json!({ "data": { "hideReadHistory": { "_": true } } })
            }
            "UserReadingHistory" => self.aggregates(&variables),
            "UserStats" => json!({
                "data": { "userStats": {
                    "numCommentUpvotes": 7,
                    "numComments": 3,
                    "numPostUpvotes": 12,
                    "numPostViews": 1500,
                    "numPosts": 2
                } }
            }),
            "GenerateUniqueUsername" => {
                let name = variables["name"].as_str().unwrap_or_default();
                let username = name.to_lowercase().replace(' ', "");
                json!({ "data": { "generateUniqueUsername": format!("{username}42") } })
            }
            "PersonalizedDigest" => json!({ "data": { "personalizedDigest": self.digest } }),
            "SubscribePersonalizedDigest" => {
                let digest = json!({
                    "preferredDay": variables.get("day").cloned().unwrap_or(json!(1)),
                    "preferredHour": variables.get("hour").cloned().unwrap_or(json!(9)),
                    "preferredTimezone": variables
                        .get("timezone")
                        .cloned()
                        .unwrap_or(json!("Etc/UTC")),
                });
                self.digest = Some(digest.clone());
                json!({ "data": { "subscribePersonalizedDigest": digest } })
            }
            "UnsubscribePersonalizedDigest" => {
                self.digest = None;
                json!({ "data": { "unsubscribePersonalizedDigest": { "_": true } } })
            }
            other => json!({
                "data": null,
                "errors": [{ "message": format!("Unknown operation {other}") }]
            }),
        };
        Ok(http::Response::new(Bytes::from(body.to_string())))
    }

    fn history_page(&self, variables: &Value, query: Option<&str>) -> Value {
        let offset = match variables.get("after").and_then(Value::as_str) {
            None => 0,
            Some(cursor) => match decode_cursor(cursor) {
                Some(offset) => offset,
                None => {
                    return json!({ "data": null, "errors": [{ "message": "Invalid cursor" }] })
                }
            },
        };
        let first = variables
            .get("first")
            .and_then(Value::as_u64)
            .map_or(DEFAULT_PAGE_SIZE, |first| first as usize);
        let matching: Vec<&FakeEntry> = self.visible(query).collect();
        let end = (offset + first).min(matching.len());
        let edges: Vec<Value> = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|entry| {
                json!({
                    "node": {
                        "timestamp": entry.timestamp,
                        "timestampDb": entry.timestamp_db,
                        "post": {
                            "id": entry.post_id,
                            "title": entry.title,
                            "image": null,
                            "readTime": 4,
                            "permalink": format!("https://fake.local/r/{}", entry.post_id),
                            "commentsPermalink": format!("https://fake.local/posts/{}", entry.post_id),
                            "createdAt": "2024-01-01T00:00:00.000Z",
                            "type": "article",
                            "numUpvotes": 1,
                            "numComments": 0,
                            "tags": ["webdev"],
                            "source": { "id": "community", "name": "Community", "image": null, "handle": "community" },
                            "sharedPost": null
                        }
                    }
                })
            })
            .collect();
        let end_cursor = if edges.is_empty() {
            Value::Null
        } else {
            json!(encode_cursor(end))
        };
        json!({
            "data": {
                "readHistory": {
                    "pageInfo": { "endCursor": end_cursor, "hasNextPage": end < matching.len() },
                    "edges": edges
                }
            }
        })
    }

    fn aggregates(&self, variables: &Value) -> Value {
        let day = |name: &str| {
            variables[name]
                .as_str()
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        };
        let (Some(after), Some(before)) = (day("after"), day("before")) else {
            return json!({ "data": null, "errors": [{ "message": "after and before are required" }] });
        };
        let read_history: Vec<Value> = self
            .reads
            .iter()
            .filter(|(date, _)| after <= *date && *date <= before)
            .map(|(date, reads)| json!({ "date": format!("{date}T00:00:00.000Z"), "reads": reads }))
            .collect();
        let limit = variables
            .get("limit")
            .and_then(Value::as_u64)
            .map_or(usize::MAX, |limit| limit as usize);
        let tags: Vec<Value> = [("rust", 8), ("webdev", 5), ("tokio", 3)]
            .into_iter()
            .take(limit)
            .map(|(value, count)| {
                json!({ "value": value, "count": count, "total": 16, "percentage": count as f64 / 16.0 })
            })
            .collect();
        json!({
            "data": {
                "userReadingRankHistory": [{ "rank": 2, "count": 3 }, { "rank": 5, "count": 1 }],
                "userReadHistory": read_history,
                "userMostReadTags": tags
            }
        })
    }
}

fn encode_cursor(offset: usize) -> String {
    format!("YXJyYXljb25uZWN0aW9u:{offset}")
}

fn decode_cursor(cursor: &str) -> Option<usize> {
    cursor
        .strip_prefix("YXJyYXljb25uZWN0aW9u:")
        .and_then(|offset| offset.parse().ok())
}
