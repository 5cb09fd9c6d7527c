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

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A named remote log container. Created lazily on first use; never mutated
/// or deleted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroup {
    pub log_group_name: String,
}

/// A time-bucketed sub-partition of a log group.
///
/// `upload_sequence_token` is opaque to this crate: absent for a stream that
/// has never been written to, required on every write after the first, and
/// replaced by the service after every successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStream {
    pub log_stream_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_sequence_token: Option<String>,
}

/// One unit of shipped output: a UTC timestamp in milliseconds and the
/// formatted record text, which may itself contain embedded JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub timestamp: i64,
    pub message: String,
}

/// The outcome of a [`LogsClient::put_log_events`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutLogEvents {
    /// The token to present on the next write to the same stream.
    pub next_sequence_token: Option<String>,
    /// Present when the service accepted the call but refused to store some
    /// events.
    pub rejected_log_events_info: Option<RejectedLogEventsInfo>,
}

/// Indexes of events the service refused to store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedLogEventsInfo {
    pub too_new_log_event_start_index: Option<usize>,
    pub too_old_log_event_end_index: Option<usize>,
    pub expired_log_event_end_index: Option<usize>,
}

/// The remote log service surface the [`CloudWatch`][super::CloudWatch]
/// appender depends on.
///
/// An absent resource is an empty describe result, not an error. The client
/// is assumed to be already authenticated; credential resolution is its own
/// concern.
pub trait LogsClient: fmt::Debug + Send + Sync + 'static {
    /// Lists log groups whose name starts with `name_prefix`, at most
    /// `limit` of them.
    fn describe_log_groups(&self, name_prefix: &str, limit: usize) -> anyhow::Result<Vec<LogGroup>>;

    /// Creates the log group `name`.
    fn create_log_group(&self, name: &str) -> anyhow::Result<()>;

    /// Lists log streams of `group` whose name starts with `name_prefix`, at
    /// most `limit` of them.
    fn describe_log_streams(
        &self,
        group: &str,
        name_prefix: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<LogStream>>;

    /// Creates the log stream `stream` within `group`.
    fn create_log_stream(&self, group: &str, stream: &str) -> anyhow::Result<()>;

    /// Stores a batch of events in `group`/`stream`.
    ///
    /// `sequence_token` must be the token returned by the previous call for
    /// the same stream, and must be omitted entirely on the first write to a
    /// fresh stream.
    fn put_log_events(
        &self,
        group: &str,
        stream: &str,
        events: Vec<LogEvent>,
        sequence_token: Option<&str>,
    ) -> anyhow::Result<PutLogEvents>;
}
