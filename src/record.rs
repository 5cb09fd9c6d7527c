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

use crate::Severity;

/// A log record flowing through a [`Logger`][crate::Logger] to its layout and
/// appenders.
///
/// `message` is the composed text of the logging call: the free-text message,
/// optionally followed by the JSON serialization of its structured payload and
/// a pretty-printed rendering. It may span multiple lines.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    severity: Severity,
    message: &'a str,
}

impl<'a> Record<'a> {
    pub(crate) fn new(severity: Severity, message: &'a str) -> Record<'a> {
        Record { severity, message }
    }

    /// The severity the record was logged at.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The composed message text.
    pub fn message(&self) -> &'a str {
        self.message
    }
}
