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

use colored::Color;
use colored::ColoredString;
use colored::Colorize;
use jiff::Zoned;

use crate::Severity;
use crate::layout::Layout;
use crate::record::Record;

/// Environment variable carrying the execution environment's request
/// correlation id, used as the default context label.
const REQUEST_ID_ENV: &str = "_X_AMZN_TRACE_ID";

/// A layout that renders a bracketed timestamp/process prefix before the
/// severity and the message.
///
/// Output format:
///
/// ```text
/// [2024-08-11T22:44:57.172105+08:00 #4242] INFO: Hello info!
/// ```
///
/// With a context label:
///
/// ```text
/// [2024-08-11T22:44:57.172105+08:00 #4242 req-f00] INFO: Hello info!
/// ```
///
/// The label defaults to the request correlation id supplied by the execution
/// environment, and is omitted when none is available. Severity names are
/// colored; customize the colors by setting the `colors` field with a
/// [`SeverityColor`] instance.
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    /// The color of each severity name.
    pub colors: SeverityColor,
    label: Option<String>,
}

/// Customize the color of each severity.
#[derive(Debug, Clone)]
pub struct SeverityColor {
    pub debug: Color,
    pub info: Color,
    pub warn: Color,
    pub error: Color,
    pub fatal: Color,
    pub unknown: Color,
}

impl Default for SeverityColor {
    fn default() -> Self {
        Self {
            debug: Color::Blue,
            info: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
            fatal: Color::BrightRed,
            unknown: Color::Magenta,
        }
    }
}

impl TextLayout {
    /// Sets an explicit context label, overriding the ambient request id.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let color = match record.severity() {
            Severity::Debug => self.colors.debug,
            Severity::Info => self.colors.info,
            Severity::Warn => self.colors.warn,
            Severity::Error => self.colors.error,
            Severity::Fatal => self.colors.fatal,
            Severity::Unknown => self.colors.unknown,
        };

        let time = Zoned::now().strftime("%Y-%m-%dT%H:%M:%S.%6f%:z");
        let severity = ColoredString::from(record.severity().as_str()).color(color);
        let pid = std::process::id();
        let message = record.message();

        let label = match &self.label {
            Some(label) => Some(label.clone()),
            None => std::env::var(REQUEST_ID_ENV)
                .ok()
                .filter(|id| !id.is_empty()),
        };

        let text = match label {
            Some(label) => format!("[{time} #{pid} {label}] {severity}: {message}"),
            None => format!("[{time} #{pid}] {severity}: {message}"),
        };
        Ok(text.into_bytes())
    }
}
