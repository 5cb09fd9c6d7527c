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

use std::io::Write;
use std::sync::Mutex;

use anyhow::anyhow;
use jiff::Timestamp;
use jiff::Zoned;

use crate::append::Append;
use crate::append::cloudwatch::LogEvent;
use crate::append::cloudwatch::LogStream;
use crate::append::cloudwatch::LogsClient;
use crate::append::cloudwatch::bucket;
use crate::error::SetupError;
use crate::record::Record;

/// An appender that ships log records to a remote log stream.
///
/// Construction resolves the log group and the current time-bucketed log
/// stream, creating either if absent; an appender never exists without both.
/// Every appended record is echoed to stdout and then shipped as a single
/// log event, presenting the upload sequence token returned by the previous
/// write. The remote call completes before the logging call returns, so
/// events reach the stream in call order.
///
/// The sequence token is held under a lock for the duration of the write.
/// Still, the intended usage is one logical writer per appender instance.
///
/// # Examples
///
/// ```
/// use logship::append::CloudWatch;
/// use logship::append::cloudwatch::testing::MemoryLogs;
///
/// let append = CloudWatch::new(MemoryLogs::new(), "my-application").unwrap();
/// ```
#[derive(Debug)]
pub struct CloudWatch {
    client: Box<dyn LogsClient>,
    group: String,
    stream: String,
    token: Mutex<Option<String>>,
}

impl CloudWatch {
    /// Resolves `group` and the current log stream, creating them if absent.
    ///
    /// # Errors
    ///
    /// Returns an error when either resource cannot be described or created.
    pub fn new(client: impl LogsClient, group: impl Into<String>) -> Result<CloudWatch, SetupError> {
        let client: Box<dyn LogsClient> = Box::new(client);
        let group = group.into();

        let group = resolve_group(client.as_ref(), &group).map_err(|source| SetupError::Group {
            name: group.clone(),
            source,
        })?;

        let name = bucket::stream_name(&Zoned::now());
        let stream =
            resolve_stream(client.as_ref(), &group, &name).map_err(|source| SetupError::Stream {
                name: name.clone(),
                source,
            })?;

        Ok(CloudWatch {
            client,
            group,
            token: Mutex::new(stream.upload_sequence_token),
            stream: stream.log_stream_name,
        })
    }

    /// The resolved log group name.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The resolved log stream name.
    pub fn stream(&self) -> &str {
        &self.stream
    }
}

fn resolve_group(client: &dyn LogsClient, name: &str) -> anyhow::Result<String> {
    if let Some(group) = client.describe_log_groups(name, 1)?.into_iter().next() {
        return Ok(group.log_group_name);
    }
    client.create_log_group(name)?;
    client
        .describe_log_groups(name, 1)?
        .into_iter()
        .next()
        .map(|group| group.log_group_name)
        .ok_or_else(|| anyhow!("log group missing after create"))
}

fn resolve_stream(client: &dyn LogsClient, group: &str, name: &str) -> anyhow::Result<LogStream> {
    if let Some(stream) = client.describe_log_streams(group, name, 1)?.into_iter().next() {
        return Ok(stream);
    }
    client.create_log_stream(group, name)?;
    client
        .describe_log_streams(group, name, 1)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("log stream missing after create"))
}

impl Append for CloudWatch {
    fn append(&self, _: &Record, formatted: &[u8]) -> anyhow::Result<()> {
        // the record must survive a failed or slow remote call: echo locally
        // before shipping is attempted
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(formatted)?;
        stdout.write_all(b"\n")?;
        drop(stdout);

        let event = LogEvent {
            timestamp: Timestamp::now().as_millisecond(),
            message: String::from_utf8_lossy(formatted).into_owned(),
        };

        let mut token = self.token.lock().unwrap_or_else(|err| err.into_inner());
        let response =
            self.client
                .put_log_events(&self.group, &self.stream, vec![event], token.as_deref())?;
        *token = response.next_sequence_token;

        if let Some(rejected) = response.rejected_log_events_info {
            eprintln!(
                "log events rejected by {}/{}: {rejected:?}",
                self.group, self.stream
            );
        }
        Ok(())
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use crate::Severity;
    use crate::append::Append;
    use crate::append::CloudWatch;
    use crate::append::cloudwatch::testing::MemoryLogs;
    use crate::error::SetupError;
    use crate::record::Record;

    fn append(shipper: &CloudWatch, text: &str) -> anyhow::Result<()> {
        let record = Record::new(Severity::Info, text);
        shipper.append(&record, text.as_bytes())
    }

    #[test]
    fn test_creates_missing_group_and_stream_once() {
        let client = MemoryLogs::new();
        let shipper = CloudWatch::new(client.clone(), "app-log").unwrap();

        assert_eq!(client.create_group_calls(), 1);
        assert_eq!(client.create_stream_calls(), 1);
        assert_eq!(shipper.group(), "app-log");
    }

    #[test]
    fn test_existing_group_not_recreated() {
        let client = MemoryLogs::new();
        let _first = CloudWatch::new(client.clone(), "app-log").unwrap();
        let _second = CloudWatch::new(client.clone(), "app-log").unwrap();

        assert_eq!(client.create_group_calls(), 1);
    }

    #[test]
    fn test_sequence_token_chained_across_writes() {
        let client = MemoryLogs::new();
        let shipper = CloudWatch::new(client.clone(), "app-log").unwrap();

        append(&shipper, "first").unwrap();
        append(&shipper, "second").unwrap();

        let presented = client.put_tokens();
        assert_eq!(presented.len(), 2);
        assert_eq!(presented[0], None);
        assert_eq!(presented[1].as_deref(), Some("00000000000000000001"));

        let events = client.events("app-log", shipper.stream());
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].message, "second");
        assert!(events[0].timestamp > 0);
    }

    #[test]
    fn test_rejected_events_not_fatal() {
        let client = MemoryLogs::new();
        let shipper = CloudWatch::new(client.clone(), "app-log").unwrap();

        client.reject_events(true);
        append(&shipper, "partly rejected").unwrap();
        assert_eq!(client.events("app-log", shipper.stream()).len(), 1);
    }

    #[test]
    fn test_put_failure_propagates_and_recovers() {
        let client = MemoryLogs::new();
        let shipper = CloudWatch::new(client.clone(), "app-log").unwrap();

        client.fail_puts(true);
        assert!(append(&shipper, "lost remotely").is_err());

        client.fail_puts(false);
        append(&shipper, "after recovery").unwrap();

        let events = client.events("app-log", shipper.stream());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "after recovery");
    }

    #[test]
    fn test_create_failure_is_fatal() {
        let client = MemoryLogs::new();
        client.fail_creates(true);

        let err = CloudWatch::new(client, "app-log").unwrap_err();
        assert!(matches!(err, SetupError::Group { .. }));
    }
}
