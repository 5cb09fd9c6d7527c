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

//! Bridge from the `log` crate facade.
//!
//! Installing a [`Logger`] makes the `log` macros flow into it; key-values
//! attached to a record are collected into a structured payload object.

use std::io::Write;

use serde_json::Map;
use serde_json::Value;

use crate::Logger;
use crate::Severity;
use crate::error::SetupError;

struct LogCrateLogger(Logger);

/// Installs `logger` as the `log` crate global logger.
///
/// Severities map as Trace/Debug → Debug, Info → Info, Warn → Warn,
/// Error → Error; the global maximum level is derived from the logger's
/// minimum severity. This should be called early in the execution of a Rust
/// program; any log events that occur before installation are ignored.
///
/// # Errors
///
/// Returns an error if the log crate global logger has already been set.
pub fn try_install(logger: Logger) -> Result<(), SetupError> {
    let max_level = match logger.level() {
        Severity::Debug => log::LevelFilter::Trace,
        Severity::Info => log::LevelFilter::Info,
        Severity::Warn => log::LevelFilter::Warn,
        Severity::Error | Severity::Fatal | Severity::Unknown => log::LevelFilter::Error,
    };

    log::set_boxed_logger(Box::new(LogCrateLogger(logger)))?;
    log::set_max_level(max_level);
    Ok(())
}

/// Installs `logger` as the `log` crate global logger.
///
/// # Panics
///
/// Panics if the log crate global logger has already been set.
pub fn install(logger: Logger) {
    try_install(logger).expect(
        "logship::bridge::log::install must be called before the log crate global logger initialized",
    );
}

fn severity(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warn,
        log::Level::Info => Severity::Info,
        log::Level::Debug | log::Level::Trace => Severity::Debug,
    }
}

struct KvCollector<'a> {
    kvs: &'a mut Map<String, Value>,
}

impl<'kvs> log::kv::VisitSource<'kvs> for KvCollector<'_> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        self.kvs.insert(key.to_string(), value.to_string().into());
        Ok(())
    }
}

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        severity(metadata.level()) >= self.0.level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut kvs = Map::new();
        let mut visitor = KvCollector { kvs: &mut kvs };
        record.key_values().visit(&mut visitor).ok();

        let message = record.args().to_string();
        let severity = severity(record.level());
        let result = if kvs.is_empty() {
            self.0.log(severity, &message)
        } else {
            self.0.log_data(severity, &message, &Value::Object(kvs))
        };

        if let Err(err) = result {
            handle_error(record, err);
        }
    }

    fn flush(&self) {
        self.0.flush();
    }
}

fn handle_error(record: &log::Record, error: crate::Error) {
    let Err(fallback_error) = write!(
        std::io::stderr(),
        r###"
Error perform logging.
    Attempted to log: {args}
    Record: {record:?}
    Error: {error}
"###,
        args = record.args(),
        record = record,
        error = error,
    ) else {
        return;
    };

    panic!(
        r###"
Error performing stderr logging after error occurred during regular logging.
    Attempted to log: {args}
    Record: {record:?}
    Error: {error}
    Fallback error: {fallback_error}
"###,
        args = record.args(),
        record = record,
        error = error,
        fallback_error = fallback_error,
    );
}
