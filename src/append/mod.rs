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

//! Various appenders for log records.

use std::fmt;

use crate::record::Record;

pub mod cloudwatch;
mod file;
mod stdio;
mod testing;
mod writer;

pub use cloudwatch::CloudWatch;
pub use file::File;
pub use stdio::Stderr;
pub use stdio::Stdout;
pub use testing::Testing;
pub use writer::Writer;

/// A trait representing an appender that can process log records.
///
/// `formatted` is the record as rendered by the logger's layout, without a
/// trailing newline; implementors that persist text should write it rather
/// than re-render `record`.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Processes a formatted log record.
    fn append(&self, record: &Record, formatted: &[u8]) -> anyhow::Result<()>;

    /// Flushes any buffered records.
    fn flush(&self) {}
}
