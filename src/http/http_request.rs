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

use crate::error::IggyError;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A request prepared for the Iggy API, not yet sent.
///
/// The path is relative to the API URL of the transport executing the request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Prepare HTTP GET request.
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Prepare HTTP GET request with query parameters.
    pub fn get_with_query<T: Serialize + ?Sized>(
        path: &str,
        query: &T,
    ) -> Result<Self, IggyError> {
        let mut request = Self::new(Method::GET, path);
        request.query = to_query(query)?;
        Ok(request)
    }

    /// Prepare HTTP POST request with the JSON payload.
    pub fn post<T: Serialize + ?Sized>(path: &str, payload: &T) -> Result<Self, IggyError> {
        let mut request = Self::new(Method::POST, path);
        request.body = Some(to_body(payload)?);
        Ok(request)
    }

    /// Prepare HTTP PUT request with the JSON payload.
    pub fn put<T: Serialize + ?Sized>(path: &str, payload: &T) -> Result<Self, IggyError> {
        let mut request = Self::new(Method::PUT, path);
        request.body = Some(to_body(payload)?);
        Ok(request)
    }

    /// Prepare HTTP DELETE request.
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Prepare HTTP DELETE request with query parameters.
    pub fn delete_with_query<T: Serialize + ?Sized>(
        path: &str,
        query: &T,
    ) -> Result<Self, IggyError> {
        let mut request = Self::new(Method::DELETE, path);
        request.query = to_query(query)?;
        Ok(request)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// The successful response of the Iggy API.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: Bytes) -> Self {
        Self { status, body }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, IggyError> {
        serde_json::from_slice(&self.body).map_err(|_| IggyError::InvalidJsonResponse)
    }
}

fn to_body<T: Serialize + ?Sized>(payload: &T) -> Result<Value, IggyError> {
    serde_json::to_value(payload).map_err(|_| IggyError::InvalidCommand)
}

fn to_query<T: Serialize + ?Sized>(query: &T) -> Result<Vec<(String, String)>, IggyError> {
    let Value::Object(fields) = serde_json::to_value(query).map_err(|_| IggyError::InvalidCommand)?
    else {
        return Err(IggyError::InvalidCommand);
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let value = match value {
            Value::Null => continue,
            Value::String(value) => value,
            Value::Number(value) => value.to_string(),
            Value::Bool(value) => value.to_string(),
            Value::Array(_) | Value::Object(_) => return Err(IggyError::InvalidCommand),
        };
        pairs.push((key, value));
    }
    Ok(pairs)
}
