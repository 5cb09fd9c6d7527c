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

use logship::Severity;
use logship::append::Testing;
use serde_json::Value;

// the log crate global logger can only be installed once per process, so the
// whole bridge behavior lives in one test
#[test]
fn test_log_crate_records_flow_into_logger() {
    let capture = Testing::new();
    let logger = logship::builder()
        .level(Severity::Info)
        .append(capture.clone())
        .build();
    logship::bridge::log::install(logger);

    log::debug!("below the minimum severity");
    assert!(capture.entries().is_empty());

    log::info!("plain message");
    log::warn!(user = "alice", attempt = 2; "with key values");
    log::error!("an error");

    let entries = capture.entries();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].0, Severity::Info);
    assert_eq!(entries[0].1, "INFO: plain message");

    assert_eq!(entries[1].0, Severity::Warn);
    let mut lines = entries[1].1.lines();
    assert_eq!(lines.next(), Some("WARN: with key values"));
    let parsed: Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(parsed["user"], "alice");
    assert_eq!(parsed["attempt"], "2");

    assert_eq!(entries[2].0, Severity::Error);
}
