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

//! An in-memory [`LogsClient`] so the shipping path can be exercised by a
//! test harness without a remote service.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use anyhow::bail;

use crate::append::cloudwatch::LogEvent;
use crate::append::cloudwatch::LogGroup;
use crate::append::cloudwatch::LogStream;
use crate::append::cloudwatch::LogsClient;
use crate::append::cloudwatch::PutLogEvents;
use crate::append::cloudwatch::RejectedLogEventsInfo;

/// An in-memory [`LogsClient`].
///
/// Clones share the same stored state; keep one handle for assertions and
/// move the other into the appender. The client validates the sequence token
/// discipline: a write presenting anything other than the token returned by
/// the previous write to the same stream fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogs {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    groups: Vec<Group>,
    create_group_calls: usize,
    create_stream_calls: usize,
    put_tokens: Vec<Option<String>>,
    fail_creates: bool,
    fail_puts: bool,
    reject_events: bool,
}

#[derive(Debug)]
struct Group {
    name: String,
    streams: Vec<Stream>,
}

#[derive(Debug)]
struct Stream {
    name: String,
    token: Option<String>,
    events: Vec<LogEvent>,
    puts: usize,
}

impl MemoryLogs {
    /// Creates a new empty `MemoryLogs`.
    pub fn new() -> MemoryLogs {
        MemoryLogs::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Number of `create_log_group` calls observed.
    pub fn create_group_calls(&self) -> usize {
        self.state().create_group_calls
    }

    /// Number of `create_log_stream` calls observed.
    pub fn create_stream_calls(&self) -> usize {
        self.state().create_stream_calls
    }

    /// The sequence tokens presented to `put_log_events`, in call order.
    pub fn put_tokens(&self) -> Vec<Option<String>> {
        self.state().put_tokens.clone()
    }

    /// The stream names of `group`, in creation order.
    pub fn streams(&self, group: &str) -> Vec<String> {
        self.state()
            .groups
            .iter()
            .filter(|g| g.name == group)
            .flat_map(|g| g.streams.iter().map(|s| s.name.clone()))
            .collect()
    }

    /// The events stored in `group`/`stream`, in arrival order.
    pub fn events(&self, group: &str, stream: &str) -> Vec<LogEvent> {
        self.state()
            .groups
            .iter()
            .filter(|g| g.name == group)
            .flat_map(|g| g.streams.iter())
            .filter(|s| s.name == stream)
            .flat_map(|s| s.events.clone())
            .collect()
    }

    /// Makes subsequent create calls fail.
    pub fn fail_creates(&self, fail: bool) {
        self.state().fail_creates = fail;
    }

    /// Makes subsequent `put_log_events` calls fail.
    pub fn fail_puts(&self, fail: bool) {
        self.state().fail_puts = fail;
    }

    /// Flags every subsequently stored batch as partially rejected.
    pub fn reject_events(&self, reject: bool) {
        self.state().reject_events = reject;
    }

    /// Drops all stored groups, streams and events. Deleting remote log
    /// resources is a test-only operation.
    pub fn clear(&self) {
        self.state().groups.clear();
    }
}

impl LogsClient for MemoryLogs {
    fn describe_log_groups(&self, name_prefix: &str, limit: usize) -> anyhow::Result<Vec<LogGroup>> {
        Ok(self
            .state()
            .groups
            .iter()
            .filter(|g| g.name.starts_with(name_prefix))
            .take(limit)
            .map(|g| LogGroup {
                log_group_name: g.name.clone(),
            })
            .collect())
    }

    fn create_log_group(&self, name: &str) -> anyhow::Result<()> {
        let mut state = self.state();
        state.create_group_calls += 1;
        if state.fail_creates {
            bail!("create_log_group refused");
        }
        if state.groups.iter().any(|g| g.name == name) {
            bail!("log group {name:?} already exists");
        }
        state.groups.push(Group {
            name: name.to_string(),
            streams: vec![],
        });
        Ok(())
    }

    fn describe_log_streams(
        &self,
        group: &str,
        name_prefix: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<LogStream>> {
        let state = self.state();
        let Some(group) = state.groups.iter().find(|g| g.name == group) else {
            bail!("log group {group:?} does not exist");
        };
        Ok(group
            .streams
            .iter()
            .filter(|s| s.name.starts_with(name_prefix))
            .take(limit)
            .map(|s| LogStream {
                log_stream_name: s.name.clone(),
                upload_sequence_token: s.token.clone(),
            })
            .collect())
    }

    fn create_log_stream(&self, group: &str, stream: &str) -> anyhow::Result<()> {
        let mut state = self.state();
        state.create_stream_calls += 1;
        if state.fail_creates {
            bail!("create_log_stream refused");
        }
        let Some(group) = state.groups.iter_mut().find(|g| g.name == group) else {
            bail!("log group {group:?} does not exist");
        };
        if group.streams.iter().any(|s| s.name == stream) {
            bail!("log stream {stream:?} already exists");
        }
        group.streams.push(Stream {
            name: stream.to_string(),
            token: None,
            events: vec![],
            puts: 0,
        });
        Ok(())
    }

    fn put_log_events(
        &self,
        group: &str,
        stream: &str,
        events: Vec<LogEvent>,
        sequence_token: Option<&str>,
    ) -> anyhow::Result<PutLogEvents> {
        let mut state = self.state();
        state.put_tokens.push(sequence_token.map(str::to_string));

        let fail = state.fail_puts;
        let reject = state.reject_events;
        if fail {
            bail!("service unavailable");
        }

        let Some(group) = state.groups.iter_mut().find(|g| g.name == group) else {
            bail!("log group {group:?} does not exist");
        };
        let Some(stream) = group.streams.iter_mut().find(|s| s.name == stream) else {
            bail!("log stream {stream:?} does not exist");
        };

        if stream.token.as_deref() != sequence_token {
            bail!(
                "invalid sequence token: expected {:?}, got {:?}",
                stream.token,
                sequence_token
            );
        }

        stream.puts += 1;
        let next = format!("{:020}", stream.puts);
        stream.token = Some(next.clone());
        stream.events.extend(events);

        let rejected = reject.then(|| RejectedLogEventsInfo {
            too_old_log_event_end_index: Some(0),
            ..Default::default()
        });

        Ok(PutLogEvents {
            next_sequence_token: Some(next),
            rejected_log_events_info: rejected,
        })
    }
}
