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
use std::io::Write;
use std::sync::Mutex;

use crate::append::Append;
use crate::record::Record;

/// An appender that writes log records to an arbitrary byte stream.
pub struct Writer {
    stream: Mutex<Box<dyn Write + Send + 'static>>,
}

impl fmt::Debug for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Writer {{ ... }}")
    }
}

impl Writer {
    /// Creates a new `Writer` appender over `stream`.
    pub fn new(stream: impl Write + Send + 'static) -> Writer {
        Writer {
            stream: Mutex::new(Box::new(stream)),
        }
    }
}

impl Append for Writer {
    fn append(&self, _: &Record, formatted: &[u8]) -> anyhow::Result<()> {
        let mut stream = self.stream.lock().unwrap_or_else(|err| err.into_inner());
        stream.write_all(formatted)?;
        stream.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) {
        let mut stream = self.stream.lock().unwrap_or_else(|err| err.into_inner());
        let _ = stream.flush();
    }
}
