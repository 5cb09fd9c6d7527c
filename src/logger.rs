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

use serde::Serialize;
use serde_json::Value;

use crate::Severity;
use crate::append::Append;
use crate::append::Stdout;
use crate::error::Error;
use crate::layout::Layout;
use crate::layout::SeverityLayout;
use crate::record::Record;
use crate::structured;

/// A severity-leveled logger that renders structured payloads as JSON and
/// writes records to its configured appenders.
///
/// Every logging call is synchronous: formatting and (if configured) remote
/// shipping complete before the call returns, and records reach each appender
/// in call order.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), logship::Error> {
/// use serde_json::json;
///
/// let logger = logship::stdout().build();
/// logger.info("starting up")?;
/// logger.info_data("request accepted", &json!({"id": "10102001"}))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Logger {
    level: Severity,
    layout: Box<dyn Layout>,
    pretty: bool,
    appends: Vec<Box<dyn Append>>,
}

impl Logger {
    /// Creates a new empty [`Builder`].
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The minimum severity this logger emits.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Sets the minimum severity this logger emits.
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// The formatter currently in use.
    pub fn formatter(&self) -> &dyn Layout {
        self.layout.as_ref()
    }

    /// Replaces the formatter.
    pub fn set_formatter(&mut self, layout: impl Layout) {
        self.layout = Box::new(layout);
    }

    /// Whether structured payloads get a pretty-printed rendering appended.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Enables or disables the pretty-printed payload rendering.
    pub fn set_pretty(&mut self, pretty: bool) {
        self.pretty = pretty;
    }

    /// Logs `message` at `severity`.
    pub fn log(&self, severity: Severity, message: &str) -> Result<(), Error> {
        self.dispatch(severity, message, None)
    }

    /// Logs `message` at `severity` with a structured payload.
    ///
    /// `data` is serialized as compact JSON on the line following the
    /// message; a sequence serializes wrapped as `{"records": …}`. See
    /// [`structured::compose`] for the exact composition rules.
    pub fn log_data<T>(&self, severity: Severity, message: &str, data: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let payload = structured::to_payload(data)?;
        self.dispatch(severity, message, Some(&payload))
    }

    /// Logs `message` at `severity` with several structured payloads,
    /// collectively wrapped into the `{"records": …}` form. A single payload
    /// is used directly, as in [`Logger::log_data`].
    pub fn log_many<I>(&self, severity: Severity, message: &str, data: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut values: Vec<Value> = data.into_iter().collect();
        let payload = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::Array(values)
        };
        self.dispatch(severity, message, Some(&payload))
    }

    /// Logs `message` at [`Severity::Debug`].
    pub fn debug(&self, message: &str) -> Result<(), Error> {
        self.log(Severity::Debug, message)
    }

    /// Logs `message` at [`Severity::Debug`] with a structured payload.
    pub fn debug_data<T>(&self, message: &str, data: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.log_data(Severity::Debug, message, data)
    }

    /// Logs `message` at [`Severity::Info`].
    pub fn info(&self, message: &str) -> Result<(), Error> {
        self.log(Severity::Info, message)
    }

    /// Logs `message` at [`Severity::Info`] with a structured payload.
    pub fn info_data<T>(&self, message: &str, data: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.log_data(Severity::Info, message, data)
    }

    /// Logs `message` at [`Severity::Warn`].
    pub fn warn(&self, message: &str) -> Result<(), Error> {
        self.log(Severity::Warn, message)
    }

    /// Logs `message` at [`Severity::Warn`] with a structured payload.
    pub fn warn_data<T>(&self, message: &str, data: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.log_data(Severity::Warn, message, data)
    }

    /// Logs `message` at [`Severity::Error`].
    pub fn error(&self, message: &str) -> Result<(), Error> {
        self.log(Severity::Error, message)
    }

    /// Logs `message` at [`Severity::Error`] with a structured payload.
    pub fn error_data<T>(&self, message: &str, data: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.log_data(Severity::Error, message, data)
    }

    /// Logs `message` at [`Severity::Fatal`].
    pub fn fatal(&self, message: &str) -> Result<(), Error> {
        self.log(Severity::Fatal, message)
    }

    /// Logs `message` at [`Severity::Fatal`] with a structured payload.
    pub fn fatal_data<T>(&self, message: &str, data: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.log_data(Severity::Fatal, message, data)
    }

    /// Logs `message` at [`Severity::Unknown`].
    pub fn unknown(&self, message: &str) -> Result<(), Error> {
        self.log(Severity::Unknown, message)
    }

    /// Logs `message` at [`Severity::Unknown`] with a structured payload.
    pub fn unknown_data<T>(&self, message: &str, data: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.log_data(Severity::Unknown, message, data)
    }

    /// Flushes all configured appenders.
    pub fn flush(&self) {
        for append in &self.appends {
            append.flush();
        }
    }

    fn dispatch(
        &self,
        severity: Severity,
        message: &str,
        payload: Option<&Value>,
    ) -> Result<(), Error> {
        if severity < self.level {
            return Ok(());
        }

        let message = structured::compose(message, payload, self.pretty);
        let record = Record::new(severity, &message);
        let formatted = self.layout.format(&record).map_err(Error::Format)?;
        for append in &self.appends {
            append.append(&record, &formatted).map_err(Error::Append)?;
        }
        Ok(())
    }
}

/// A builder for configuring a [`Logger`].
///
/// # Examples
///
/// ```
/// use logship::Severity;
/// use logship::append;
///
/// let logger = logship::builder()
///     .level(Severity::Info)
///     .append(append::Stderr::default())
///     .build();
/// ```
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct Builder {
    level: Severity,
    layout: Option<Box<dyn Layout>>,
    pretty: bool,
    appends: Vec<Box<dyn Append>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Creates a new empty `Builder`.
    pub fn new() -> Builder {
        Builder {
            level: Severity::Debug,
            layout: None,
            pretty: false,
            appends: vec![],
        }
    }

    /// Sets the minimum severity to emit. Defaults to [`Severity::Debug`].
    pub fn level(mut self, level: Severity) -> Builder {
        self.level = level;
        self
    }

    /// Overrides the formatter. Defaults to
    /// [`SeverityLayout`][crate::layout::SeverityLayout].
    pub fn layout(mut self, layout: impl Layout) -> Builder {
        self.layout = Some(Box::new(layout));
        self
    }

    /// Enables or disables the pretty-printed payload rendering. Off by
    /// default.
    pub fn pretty(mut self, pretty: bool) -> Builder {
        self.pretty = pretty;
        self
    }

    /// Adds an [`Append`] to the logger.
    pub fn append(mut self, append: impl Append) -> Builder {
        self.appends.push(Box::new(append));
        self
    }

    /// Builds the [`Logger`]. With no appender configured, records go to
    /// stdout.
    pub fn build(self) -> Logger {
        let mut appends = self.appends;
        if appends.is_empty() {
            appends.push(Box::new(Stdout::default()));
        }

        Logger {
            level: self.level,
            layout: self
                .layout
                .unwrap_or_else(|| Box::new(SeverityLayout::default())),
            pretty: self.pretty,
            appends,
        }
    }
}
