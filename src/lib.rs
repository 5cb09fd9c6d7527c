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

//! Logship is a structured logging implementation that can ship log events to
//! cloud log streams.
//!
//! # Overview
//!
//! A [`Logger`] pairs each leveled call with an optional structured data
//! payload, serialized as JSON on the line following the message, and writes
//! the result to one or more appenders: the console, a file, an arbitrary
//! byte stream, or a remote log group via the
//! [`CloudWatch`][append::CloudWatch] appender, which provisions the group
//! and a time-bucketed log stream on first use and maintains the upload
//! sequence token across writes.
//!
//! # Examples
//!
//! Simple setup with the default stdout appender:
//!
//! ```
//! # fn main() -> Result<(), logship::Error> {
//! use serde_json::json;
//!
//! let logger = logship::stdout().build();
//! logger.info("This is an info message.")?;
//! logger.info_data("This message carries data.", &json!({"id": "10102001"}))?;
//! # Ok(())
//! # }
//! ```
//!
//! Shipping to a remote log group:
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use logship::Severity;
//! use logship::append::cloudwatch::testing::MemoryLogs;
//!
//! // any LogsClient works here; MemoryLogs keeps the doctest offline
//! let logger = logship::cloudwatch(MemoryLogs::new(), "my-application")?
//!     .level(Severity::Info)
//!     .build();
//! logger.warn("This event is echoed locally and shipped remotely.")?;
//! # Ok(())
//! # }
//! ```

pub mod append;
pub mod bridge;
pub mod layout;
pub mod structured;

mod error;
mod logger;
mod record;
mod severity;

pub use append::Append;
pub use error::Error;
pub use error::SetupError;
pub use layout::Layout;
pub use logger::Builder;
pub use logger::Logger;
pub use record::Record;
pub use severity::Severity;

/// Creates a new empty [`Builder`].
///
/// ```
/// use logship::append;
///
/// let logger = logship::builder().append(append::Stdout::default()).build();
/// ```
pub fn builder() -> Builder {
    Builder::new()
}

/// Creates a [`Builder`] with a [`Stdout`][append::Stdout] appender
/// configured.
///
/// ```
/// let logger = logship::stdout().build();
/// ```
pub fn stdout() -> Builder {
    builder().append(append::Stdout::default())
}

/// Creates a [`Builder`] with a [`Stderr`][append::Stderr] appender
/// configured.
///
/// ```
/// let logger = logship::stderr().build();
/// ```
pub fn stderr() -> Builder {
    builder().append(append::Stderr::default())
}

/// Creates a [`Builder`] writing to an arbitrary byte stream.
///
/// ```
/// let logger = logship::writer(Vec::new()).build();
/// ```
pub fn writer(stream: impl std::io::Write + Send + 'static) -> Builder {
    builder().append(append::Writer::new(stream))
}

/// Creates a [`Builder`] shipping to the remote log group `group`,
/// provisioning the group and the current log stream if absent.
///
/// # Errors
///
/// Returns an error when the group or stream cannot be described or created.
pub fn cloudwatch(
    client: impl append::cloudwatch::LogsClient,
    group: impl Into<String>,
) -> Result<Builder, SetupError> {
    Ok(builder().append(append::CloudWatch::new(client, group)?))
}
