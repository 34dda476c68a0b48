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

use crate::client::PartitionClient;
use crate::commands::partitions::create_partitions::CreatePartitions;
use crate::commands::partitions::delete_partitions::DeletePartitions;
use crate::error::IggyError;
use crate::http::http_request::HttpRequest;
use crate::http::http_transport::HttpTransport;
use crate::http::resource_path::ResourcePath;
use crate::identifier::Identifier;
use crate::validatable::Validatable;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

/// Manages the partitions of a topic through the shared HTTP transport.
///
/// Holds no state other than the transport, every call builds its own path and request.
pub struct HttpPartitionClient<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> HttpPartitionClient<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }
}

impl<T: HttpTransport> Clone for HttpPartitionClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

#[async_trait]
impl<T: HttpTransport> PartitionClient for HttpPartitionClient<T> {
    async fn create_partitions(
        &self,
        stream_id: &Identifier,
        topic_id: &Identifier,
        partitions_count: u32,
    ) -> Result<(), IggyError> {
        let command = CreatePartitions {
            stream_id: stream_id.clone(),
            topic_id: topic_id.clone(),
            partitions_count,
        };
        command.validate()?;
        trace!("Creating partitions: {command}");
        let request = HttpRequest::post(get_path(stream_id, topic_id).as_str(), &command)?;
        self.transport.execute(request).await?;
        trace!("Created partitions: {command}");
        Ok(())
    }

    async fn delete_partitions(
        &self,
        stream_id: &Identifier,
        topic_id: &Identifier,
        partitions_count: u32,
    ) -> Result<(), IggyError> {
        let command = DeletePartitions {
            stream_id: stream_id.clone(),
            topic_id: topic_id.clone(),
            partitions_count,
        };
        command.validate()?;
        trace!("Deleting partitions: {command}");
        let request =
            HttpRequest::delete_with_query(get_path(stream_id, topic_id).as_str(), &command)?;
        self.transport.execute(request).await?;
        trace!("Deleted partitions: {command}");
        Ok(())
    }
}

fn get_path(stream_id: &Identifier, topic_id: &Identifier) -> ResourcePath {
    ResourcePath::stream(stream_id).topic(topic_id).partitions()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::http_request::HttpResponse;
    use crate::http::http_transport::MockHttpTransport;
    use bytes::Bytes;
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    fn created() -> Result<HttpResponse, IggyError> {
        Ok(HttpResponse::new(StatusCode::CREATED, Bytes::new()))
    }

    fn no_content() -> Result<HttpResponse, IggyError> {
        Ok(HttpResponse::new(StatusCode::NO_CONTENT, Bytes::new()))
    }

    fn named(value: &str) -> Identifier {
        Identifier::named(value).unwrap()
    }

    fn numeric(value: u32) -> Identifier {
        Identifier::numeric(value).unwrap()
    }

    #[tokio::test]
    async fn create_partitions_should_post_count_in_body() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::POST
                    && request.path == "streams/orders/topics/events/partitions"
                    && request.body == Some(json!({ "partitionsCount": 3 }))
                    && request.query.is_empty()
            })
            .times(1)
            .returning(|_| created());
        let client = HttpPartitionClient::new(Arc::new(transport));

        let result = client
            .create_partitions(&named("orders"), &named("events"), 3)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_partitions_should_send_count_as_query_without_body() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::DELETE
                    && request.path == "streams/1/topics/2/partitions"
                    && request.query == vec![("partitions_count".to_string(), "1".to_string())]
                    && request.body.is_none()
            })
            .times(1)
            .returning(|_| no_content());
        let client = HttpPartitionClient::new(Arc::new(transport));

        let result = client.delete_partitions(&numeric(1), &numeric(2), 1).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn identical_create_calls_should_not_be_deduplicated() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.body == Some(json!({ "partitionsCount": 2 })))
            .times(2)
            .returning(|_| created());
        let client = HttpPartitionClient::new(Arc::new(transport));
        let stream_id = named("orders");
        let topic_id = named("events");

        client
            .create_partitions(&stream_id, &topic_id, 2)
            .await
            .unwrap();
        client
            .create_partitions(&stream_id, &topic_id, 2)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_partitions_should_return_transport_error_unchanged() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().times(1).returning(|_| {
            Err(IggyError::HttpResponseError(
                400,
                "Too many partitions".to_string(),
            ))
        });
        let client = HttpPartitionClient::new(Arc::new(transport));

        let error = client
            .create_partitions(&numeric(1), &numeric(1), 1000)
            .await
            .unwrap_err();

        assert!(
            matches!(error, IggyError::HttpResponseError(400, ref reason) if reason == "Too many partitions")
        );
    }

    #[tokio::test]
    async fn delete_partitions_should_return_transport_error_unchanged() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .times(1)
            .returning(|_| Err(IggyError::ResourceNotFound("topic".to_string())));
        let client = HttpPartitionClient::new(Arc::new(transport));

        let error = client
            .delete_partitions(&named("orders"), &named("missing"), 1)
            .await
            .unwrap_err();

        assert!(matches!(error, IggyError::ResourceNotFound(ref key) if key == "topic"));
    }

    #[tokio::test]
    async fn zero_partitions_should_be_rejected_before_sending_request() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().never();
        let client = HttpPartitionClient::new(Arc::new(transport));

        let create = client.create_partitions(&numeric(1), &numeric(1), 0).await;
        let delete = client.delete_partitions(&numeric(1), &numeric(1), 0).await;

        assert_eq!(create, Err(IggyError::InvalidPartitionsCount));
        assert_eq!(delete, Err(IggyError::InvalidPartitionsCount));
    }

    #[tokio::test]
    async fn cloned_clients_should_share_transport() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().times(2).returning(|_| no_content());
        let client = HttpPartitionClient::new(Arc::new(transport));
        let cloned = client.clone();

        assert!(Arc::ptr_eq(client.transport(), cloned.transport()));
        client
            .delete_partitions(&numeric(1), &numeric(1), 1)
            .await
            .unwrap();
        cloned
            .delete_partitions(&numeric(1), &numeric(1), 1)
            .await
            .unwrap();
    }
}
