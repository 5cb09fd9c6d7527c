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

use std::sync::Arc;
use std::sync::Mutex;

use crate::Severity;
use crate::append::Append;
use crate::record::Record;

/// An appender that captures formatted log records in memory, so a test
/// harness can assert on log output.
///
/// Clones share the same captured entries; keep one handle and move the other
/// into the logger.
///
/// # Examples
///
/// ```
/// use logship::append::Testing;
///
/// let capture = Testing::new();
/// let logger = logship::builder().append(capture.clone()).build();
/// logger.info("Hello info!").unwrap();
/// assert_eq!(capture.output(), "INFO: Hello info!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Testing {
    entries: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl Testing {
    /// Creates a new empty `Testing` appender.
    pub fn new() -> Testing {
        Testing::default()
    }

    /// Returns the captured entries as (severity, formatted text) pairs.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }

    /// Returns the captured texts joined by newlines.
    pub fn output(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Append for Testing {
    fn append(&self, record: &Record, formatted: &[u8]) -> anyhow::Result<()> {
        let entry = (
            record.severity(),
            String::from_utf8_lossy(formatted).into_owned(),
        );
        self.entries
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .push(entry);
        Ok(())
    }
}
