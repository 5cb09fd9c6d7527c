// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::SetLoggerError;

/// Errors that can occur while setting up a logger or its remote resources.
///
/// A resource error is fatal to the logger instance: no logger is usable
/// without a resolved log group and log stream when remote shipping is
/// requested.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The log group could not be described or created.
    #[error("log group {name:?} unavailable: {source}")]
    Group {
        /// The requested log group name.
        name: String,
        #[source]
        source: anyhow::Error,
    },
    /// The log stream could not be described or created.
    #[error("log stream {name:?} unavailable: {source}")]
    Stream {
        /// The computed log stream name.
        name: String,
        #[source]
        source: anyhow::Error,
    },
    /// The log crate global logger has already been set.
    #[error("failed to set up the log crate bridge: {0}")]
    SetLogger(#[from] SetLoggerError),
}

/// Errors that can occur while logging a record.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The structured payload could not be serialized to JSON. Nothing has
    /// been written when this is returned.
    #[error("failed to serialize structured data: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The layout failed to format the record.
    #[error("failed to format log record: {0}")]
    Format(#[source] anyhow::Error),
    /// An appender failed to process the record. For remote shipping this is
    /// returned after the local echo has already been written.
    #[error("failed to append log record: {0}")]
    Append(#[source] anyhow::Error),
}
