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
use crate::http::http_request::{HttpRequest, HttpResponse};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Executes the prepared requests against the Iggy API.
///
/// A single transport is typically shared by many resource clients, so the implementations
/// must be safe for concurrent use. Authentication, retries and timeouts are the concern
/// of the transport, never of the resource clients.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the response if the server accepted it,
    /// otherwise an error describing the failure.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, IggyError>;
}
