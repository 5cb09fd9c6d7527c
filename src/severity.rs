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

/// Severity of a log record, ordered from least to most severe.
///
/// A [`Logger`][crate::Logger] emits a record only when its severity is at or
/// above the logger's configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Low-level information for developers.
    Debug,
    /// Generic information about system operation.
    Info,
    /// A warning.
    Warn,
    /// A handleable error condition.
    Error,
    /// An unhandleable error that results in a program crash.
    Fatal,
    /// A message of unknown severity that should always be emitted.
    Unknown,
}

impl Severity {
    /// Returns the uppercase name of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(Severity::Fatal < Severity::Unknown);
    }

    #[test]
    fn test_names() {
        assert_eq!(Severity::Warn.as_str(), "WARN");
        assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
    }
}
