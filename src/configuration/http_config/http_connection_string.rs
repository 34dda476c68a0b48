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
use std::str::FromStr;
use std::time::Duration;

const CONNECTION_STRING_PREFIX: &str = "iggy+http://";
const DEFAULT_RETRIES: u32 = 3;

/// Connection string for the HTTP transport, e.g. `iggy+http://localhost:3000?retries=5&timeout=10s`.
///
/// Supported options:
/// - `retries` - number of retries on transient errors of safe requests, default is 3.
/// - `timeout` - human readable request timeout (e.g. `500ms`, `5s`), no timeout by default.
#[derive(Debug)]
pub struct HttpConnectionString {
    server_address: String,
    retries: u32,
    request_timeout: Option<Duration>,
}

impl HttpConnectionString {
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

impl HttpConnectionString {
    pub fn new(connection_string: &str) -> Result<Self, IggyError> {
        if connection_string.is_empty() {
            return Err(IggyError::InvalidConnectionString);
        }

        let Some(connection_string) = connection_string.strip_prefix(CONNECTION_STRING_PREFIX)
        else {
            return Err(IggyError::InvalidConnectionString);
        };

        let server_and_options = connection_string.split('?').collect::<Vec<&str>>();
        if server_and_options.len() > 2 {
            return Err(IggyError::InvalidConnectionString);
        }

        let server_address = server_and_options[0];
        if server_address.is_empty() {
            return Err(IggyError::InvalidConnectionString);
        }

        let Some((host, port)) = server_address.rsplit_once(':') else {
            return Err(IggyError::InvalidConnectionString);
        };

        if host.is_empty() || port.is_empty() {
            return Err(IggyError::InvalidConnectionString);
        }

        if port.parse::<u16>().is_err() {
            return Err(IggyError::InvalidConnectionString);
        }

        let mut connection_string = HttpConnectionString {
            server_address: server_address.to_owned(),
            retries: DEFAULT_RETRIES,
            request_timeout: None,
        };

        if let Some(options) = server_and_options.get(1) {
            connection_string.parse_options(options)?;
        }

        Ok(connection_string)
    }

    fn parse_options(&mut self, options: &str) -> Result<(), IggyError> {
        for option in options.split('&') {
            let option_parts = option.split('=').collect::<Vec<&str>>();
            if option_parts.len() != 2 {
                return Err(IggyError::InvalidConnectionString);
            }
            match option_parts[0] {
                "retries" => {
                    self.retries = option_parts[1]
                        .parse::<u32>()
                        .map_err(|_| IggyError::InvalidConnectionString)?;
                }
                "timeout" => {
                    let timeout = humantime::parse_duration(option_parts[1])
                        .map_err(|_| IggyError::InvalidConnectionString)?;
                    self.request_timeout = Some(timeout);
                }
                _ => {
                    return Err(IggyError::InvalidConnectionString);
                }
            }
        }

        Ok(())
    }
}

impl FromStr for HttpConnectionString {
    type Err = IggyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpConnectionString::new(s)
    }
}
