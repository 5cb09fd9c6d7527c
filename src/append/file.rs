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

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

use crate::append::Append;
use crate::record::Record;

/// An appender that writes log records to a single file.
#[derive(Debug)]
pub struct File {
    writer: Mutex<fs::File>,
}

impl File {
    /// Opens the file at `path` in append mode, creating it and its parent
    /// directory if absent.
    pub fn new(path: impl Into<PathBuf>) -> anyhow::Result<File> {
        let path = path.into();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("failed to create log directory")?;
        }
        let writer = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .context("failed to create log file")?;
        Ok(File {
            writer: Mutex::new(writer),
        })
    }
}

impl Append for File {
    fn append(&self, _: &Record, formatted: &[u8]) -> anyhow::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|err| err.into_inner());
        writer.write_all(formatted)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(|err| err.into_inner());
        let _ = writer.flush();
    }
}
