/* Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use iggy_partitions::prelude::{HttpClient, HttpClientConfigBuilder};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const ACCESS_TOKEN: &str = "secret";
pub const MISSING_STREAM: &str = "missing";
pub const UNAVAILABLE_STREAM: &str = "unavailable";
pub const MAX_PARTITIONS_COUNT: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub stream_id: String,
    pub topic_id: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
    pub authorization: Option<String>,
}

pub type RecordedRequests = Arc<Mutex<Vec<RecordedRequest>>>;

/// In-process broker exposing only the partitions endpoints and recording every request it receives.
pub struct StubBroker {
    pub api_url: String,
    requests: RecordedRequests,
}

impl StubBroker {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let requests = RecordedRequests::default();
        let router = Router::new()
            .route(
                "/streams/{stream_id}/topics/{topic_id}/partitions",
                post(create_partitions).delete(delete_partitions),
            )
            .with_state(requests.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            api_url: format!("http://{address}"),
            requests,
        }
    }

    pub async fn client(&self) -> Arc<HttpClient> {
        self.client_with_retries(0).await
    }

    pub async fn client_with_retries(&self, retries: u32) -> Arc<HttpClient> {
        let config = HttpClientConfigBuilder::new()
            .with_api_url(self.api_url.clone())
            .with_retries(retries)
            .build();
        let client = HttpClient::create(Arc::new(config)).unwrap();
        client.set_access_token(Some(ACCESS_TOKEN.to_string())).await;
        Arc::new(client)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn create_partitions(
    State(requests): State<RecordedRequests>,
    headers: HeaderMap,
    Path((stream_id, topic_id)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> (StatusCode, String) {
    let body: Option<Value> = serde_json::from_slice(&body).ok();
    let count = body
        .as_ref()
        .and_then(|body| body.get("partitionsCount"))
        .and_then(Value::as_u64);
    let request = record(&requests, "POST", &headers, stream_id, topic_id, query, body);
    respond(&request, count, StatusCode::CREATED)
}

async fn delete_partitions(
    State(requests): State<RecordedRequests>,
    headers: HeaderMap,
    Path((stream_id, topic_id)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> (StatusCode, String) {
    let body = (!body.is_empty()).then(|| serde_json::from_slice(&body).unwrap_or(Value::Null));
    let count = query
        .get("partitions_count")
        .and_then(|count| count.parse::<u64>().ok());
    let request = record(&requests, "DELETE", &headers, stream_id, topic_id, query, body);
    respond(&request, count, StatusCode::NO_CONTENT)
}

fn record(
    requests: &RecordedRequests,
    method: &'static str,
    headers: &HeaderMap,
    stream_id: String,
    topic_id: String,
    query: HashMap<String, String>,
    body: Option<Value>,
) -> RecordedRequest {
    let request = RecordedRequest {
        method,
        stream_id,
        topic_id,
        query,
        body,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    };
    requests.lock().unwrap().push(request.clone());
    request
}

fn respond(
    request: &RecordedRequest,
    count: Option<u64>,
    success: StatusCode,
) -> (StatusCode, String) {
    let expected_authorization = format!("Bearer {ACCESS_TOKEN}");
    if request.authorization.as_deref() != Some(expected_authorization.as_str()) {
        return (StatusCode::UNAUTHORIZED, "Unauthenticated".to_string());
    }

    if request.stream_id == MISSING_STREAM {
        return (
            StatusCode::NOT_FOUND,
            format!("Stream with ID: {MISSING_STREAM} was not found."),
        );
    }

    if request.stream_id == UNAVAILABLE_STREAM {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "Service unavailable".to_string(),
        );
    }

    match count {
        Some(count) if count > MAX_PARTITIONS_COUNT => {
            (StatusCode::BAD_REQUEST, "Too many partitions".to_string())
        }
        Some(0) | None => (
            StatusCode::BAD_REQUEST,
            "Invalid partitions count".to_string(),
        ),
        Some(_) => (success, String::new()),
    }
}
