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

//! Prelude module for the crate.
//!
//! This module re-exports the most common types, traits, and functions
//! needed to manage the partitions over HTTP.
//!
//! # Examples
//!
//! ```no_run
//! use iggy_partitions::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), IggyError> {
//! let transport = Arc::new(HttpClient::new("http://127.0.0.1:3000")?);
//! transport.set_access_token(Some("token".to_string())).await;
//! let partitions = HttpPartitionClient::new(transport);
//! let stream_id = Identifier::named("orders")?;
//! let topic_id = Identifier::named("events")?;
//! partitions.create_partitions(&stream_id, &topic_id, 3).await?;
//! # Ok(())
//! # }
//! ```

pub use crate::client::PartitionClient;
pub use crate::commands::partitions::create_partitions::CreatePartitions;
pub use crate::commands::partitions::delete_partitions::DeletePartitions;
pub use crate::configuration::http_config::http_client_config::HttpClientConfig;
pub use crate::configuration::http_config::http_client_config_builder::HttpClientConfigBuilder;
pub use crate::configuration::http_config::http_connection_string::HttpConnectionString;
pub use crate::error::IggyError;
pub use crate::http::http_client::HttpClient;
pub use crate::http::http_request::{HttpRequest, HttpResponse};
pub use crate::http::http_transport::HttpTransport;
pub use crate::http::partitions::HttpPartitionClient;
pub use crate::http::resource_path::ResourcePath;
pub use crate::identifier::{IdKind, Identifier};
pub use crate::validatable::Validatable;
