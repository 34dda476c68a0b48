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

use crate::identifier::Identifier;
use std::fmt::Display;

const STREAMS: &str = "streams";
const TOPICS: &str = "topics";
const PARTITIONS: &str = "partitions";

/// Path of a resource exposed by the Iggy API, relative to the API URL.
///
/// Built from the root resource down to the nested one, e.g.
/// `ResourcePath::stream(&stream_id).topic(&topic_id).partitions()` renders as
/// `streams/{stream_id}/topics/{topic_id}/partitions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    path: String,
}

impl ResourcePath {
    /// `streams`
    pub fn streams() -> Self {
        Self {
            path: STREAMS.to_string(),
        }
    }

    /// `streams/{stream_id}`
    pub fn stream(stream_id: &Identifier) -> Self {
        Self::streams().id(stream_id)
    }

    /// `.../topics`
    pub fn topics(self) -> Self {
        self.segment(TOPICS)
    }

    /// `.../topics/{topic_id}`
    pub fn topic(self, topic_id: &Identifier) -> Self {
        self.topics().id(topic_id)
    }

    /// `.../partitions`
    pub fn partitions(self) -> Self {
        self.segment(PARTITIONS)
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    fn id(self, id: &Identifier) -> Self {
        self.segment(&id.as_cow_str())
    }

    fn segment(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}
