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
use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;

/// Maximum length of a named identifier, in bytes.
pub const MAX_NAME_LENGTH: usize = 255;

const RESERVED_CHARACTERS: &[char] = &['/', '\\', '?', '#', '%'];
const DOT_SEGMENTS: &[&str] = &[".", ".."];

/// `Identifier` points at a stream or a topic, either by its numeric ID or by its unique name.
///
/// Named identifiers are validated on construction, so every `Identifier` can be
/// placed into a resource path as a single segment without further escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Numeric ID assigned by the server.
    Numeric(u32),
    /// Unique name of the resource, at most 255 bytes.
    Named(String),
}

/// The kind of the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Numeric,
    String,
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::Numeric(1)
    }
}

impl Identifier {
    /// Creates a new identifier from the numeric ID.
    pub fn numeric(value: u32) -> Result<Self, IggyError> {
        Ok(Identifier::Numeric(value))
    }

    /// Creates a new identifier from the name.
    pub fn named(value: &str) -> Result<Self, IggyError> {
        if value.is_empty() || value.len() > MAX_NAME_LENGTH {
            return Err(IggyError::InvalidIdentifier);
        }

        if DOT_SEGMENTS.contains(&value) {
            return Err(IggyError::InvalidIdentifier);
        }

        if value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || RESERVED_CHARACTERS.contains(&c))
        {
            return Err(IggyError::InvalidIdentifier);
        }

        Ok(Identifier::Named(value.to_string()))
    }

    /// Creates a new identifier from the string value, which is parsed as numeric
    /// when it consists of digits only, otherwise it's treated as a name.
    pub fn from_str_value(value: &str) -> Result<Self, IggyError> {
        if let Ok(id) = value.parse::<u32>() {
            return Identifier::numeric(id);
        }

        Identifier::named(value)
    }

    pub fn kind(&self) -> IdKind {
        match self {
            Identifier::Numeric(_) => IdKind::Numeric,
            Identifier::Named(_) => IdKind::String,
        }
    }

    pub fn get_u32_value(&self) -> Result<u32, IggyError> {
        match self {
            Identifier::Numeric(id) => Ok(*id),
            Identifier::Named(_) => Err(IggyError::InvalidIdentifier),
        }
    }

    pub fn get_string_value(&self) -> Result<String, IggyError> {
        Ok(self.as_cow_str().into_owned())
    }

    /// Renders the identifier as a single resource path segment.
    pub fn as_cow_str(&self) -> Cow<'_, str> {
        match self {
            Identifier::Numeric(id) => Cow::Owned(id.to_string()),
            Identifier::Named(name) => Cow::Borrowed(name),
        }
    }

    pub fn as_string(&self) -> String {
        self.as_cow_str().to_string()
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Numeric(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IggyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Identifier::from_str_value(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IggyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identifier::from_str_value(&value)
    }
}

impl FromStr for Identifier {
    type Err = IggyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::from_str_value(s)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_cow_str())
    }
}
