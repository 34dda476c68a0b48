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

use crate::configuration::http_config::http_client_config::HttpClientConfig;
use crate::configuration::http_config::http_connection_string::HttpConnectionString;
use crate::error::IggyError;
use crate::http::http_request::{HttpRequest, HttpResponse};
use crate::http::http_transport::HttpTransport;
use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

const PUBLIC_PATHS: &[&str] = &[
    "/",
    "/metrics",
    "/ping",
    "/stats",
    "/users/login",
    "/users/refresh-token",
    "/personal-access-tokens/login",
];

/// HTTP client for interacting with the Iggy API.
/// It requires a valid API URL.
///
/// Transient failures (connection errors, timeouts, 5xx and 429 responses) of the safe
/// requests (e.g. GET) are retried with exponential backoff up to the configured number
/// of retries. Any other request is sent exactly once, as repeating a command such as
/// creating or deleting partitions would apply it more than once.
#[derive(Debug)]
pub struct HttpClient {
    /// The URL of the Iggy API.
    pub api_url: Url,
    client: ClientWithMiddleware,
    single_attempt_client: ClientWithMiddleware,
    access_token: RwLock<String>,
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, IggyError> {
        let url = self.get_url(&request.path)?;
        self.fail_if_not_authenticated(&request.path).await?;
        let token = self.access_token.read().await.clone();
        debug!("Sending HTTP {} request to: {url}", request.method);
        let client = if is_retryable(&request.method) {
            &self.client
        } else {
            &self.single_attempt_client
        };
        let mut builder = client.request(request.method, url).bearer_auth(token);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(|error| {
            error!("Failed to send HTTP request: {error}");
            IggyError::InvalidHttpRequest
        })?;
        Self::handle_response(response).await
    }
}

impl HttpClient {
    /// Create a new HTTP client for interacting with the Iggy API using the provided API URL.
    pub fn new(api_url: &str) -> Result<Self, IggyError> {
        Self::create(Arc::new(HttpClientConfig {
            api_url: api_url.to_string(),
            ..Default::default()
        }))
    }

    /// Create a new HTTP client for interacting with the Iggy API using the provided configuration.
    pub fn create(config: Arc<HttpClientConfig>) -> Result<Self, IggyError> {
        let api_url = Url::parse(&config.api_url).map_err(|_| IggyError::CannotParseUrl)?;
        let mut client = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            client = client.timeout(timeout);
        }
        let client = client
            .build()
            .map_err(|_| IggyError::InvalidConfiguration)?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        let single_attempt_client = ClientBuilder::new(client.clone()).build();
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            api_url,
            client,
            single_attempt_client,
            access_token: RwLock::new("".to_string()),
        })
    }

    /// Create a new HttpClient from a connection string.
    pub fn from_connection_string(connection_string: &str) -> Result<Self, IggyError> {
        Self::create(Arc::new(
            HttpConnectionString::from_str(connection_string)?.into(),
        ))
    }

    /// Get full URL for the provided path.
    pub fn get_url(&self, path: &str) -> Result<Url, IggyError> {
        self.api_url
            .join(path)
            .map_err(|_| IggyError::CannotParseUrl)
    }

    /// Returns true if the client is authenticated.
    pub async fn is_authenticated(&self) -> bool {
        let token = self.access_token.read().await;
        !token.is_empty()
    }

    /// Set the access token, `None` clears it.
    pub async fn set_access_token(&self, token: Option<String>) {
        let mut current_token = self.access_token.write().await;
        if let Some(token) = token {
            *current_token = token;
        } else {
            *current_token = "".to_string();
        }
    }

    async fn handle_response(response: Response) -> Result<HttpResponse, IggyError> {
        let status = response.status();
        match status.is_success() {
            true => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|_| IggyError::InvalidHttpRequest)?;
                Ok(HttpResponse::new(status, body))
            }
            false => {
                let reason = response.text().await.unwrap_or("error".to_string());
                debug!("Received HTTP response with status: {status}, reason: {reason}");
                match status {
                    StatusCode::UNAUTHORIZED => Err(IggyError::Unauthenticated),
                    StatusCode::FORBIDDEN => Err(IggyError::Unauthorized),
                    StatusCode::NOT_FOUND => Err(IggyError::ResourceNotFound(reason)),
                    _ => Err(IggyError::HttpResponseError(status.as_u16(), reason)),
                }
            }
        }
    }

    async fn fail_if_not_authenticated(&self, path: &str) -> Result<(), IggyError> {
        if is_public_path(path) {
            return Ok(());
        }
        if !self.is_authenticated().await {
            return Err(IggyError::Unauthenticated);
        }
        Ok(())
    }
}

fn is_retryable(method: &Method) -> bool {
    method.is_safe()
}

fn is_public_path(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    PUBLIC_PATHS
        .iter()
        .any(|public_path| public_path.trim_start_matches('/') == path)
}
