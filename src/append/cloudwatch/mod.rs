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

//! Appender that ships log records to a remote log aggregation service.
//!
//! The [`CloudWatch`] appender writes each record as one log event into a log
//! stream of a named log group, provisioning both on first use. Streams are
//! bucketed by wall-clock time so that all events of one process within one
//! five-minute window share a stream, bounding remote object cardinality.
//!
//! The remote service is reached through the [`LogsClient`] capability trait;
//! credentials and transport belong to the injected client. An in-memory
//! client for tests is provided in [`testing`].

mod bucket;
mod client;
mod shipper;
pub mod testing;

pub use client::LogEvent;
pub use client::LogGroup;
pub use client::LogStream;
pub use client::LogsClient;
pub use client::PutLogEvents;
pub use client::RejectedLogEventsInfo;
pub use shipper::CloudWatch;
