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

//! Layouts for formatting log records.

use std::fmt;

use crate::record::Record;

pub use severity::SeverityLayout;
pub use text::TextLayout;

mod severity;
mod text;

/// A trait representing a layout that renders a log record into bytes.
///
/// A [`Logger`][crate::Logger] carries exactly one layout in its formatter
/// slot; implement this trait to override how records are rendered.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log record, without a trailing newline.
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>>;
}
