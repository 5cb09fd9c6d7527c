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

use crate::layout::Layout;
use crate::record::Record;

/// A layout that renders only the severity and the message.
///
/// Output format:
///
/// ```text
/// INFO: Hello info!
/// ```
///
/// This is the default layout. It deliberately carries no timestamp or
/// process id: log aggregation destinations attach their own receive time to
/// every event. Use [`TextLayout`][crate::layout::TextLayout] for local
/// console output.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct SeverityLayout {}

impl Layout for SeverityLayout {
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        Ok(format!("{}: {}", record.severity(), record.message()).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use crate::Severity;
    use crate::layout::Layout;
    use crate::layout::SeverityLayout;
    use crate::record::Record;

    #[test]
    fn test_format() {
        let record = Record::new(Severity::Info, "Hello info!");
        let bytes = SeverityLayout::default().format(&record).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "INFO: Hello info!");
    }

    #[test]
    fn test_no_calendar_date() {
        let record = Record::new(Severity::Debug, "plain");
        let bytes = SeverityLayout::default().format(&record).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_multiline_message() {
        let record = Record::new(Severity::Warn, "first\nsecond");
        let bytes = SeverityLayout::default().format(&record).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "WARN: first\nsecond");
    }
}
