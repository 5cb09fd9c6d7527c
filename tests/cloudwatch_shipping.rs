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
use logship::append::CloudWatch;
use logship::append::cloudwatch::testing::MemoryLogs;
use serde_json::Value;
use serde_json::json;

#[test]
fn test_missing_group_created_exactly_once() {
    let client = MemoryLogs::new();

    let _ = CloudWatch::new(client.clone(), "app-log").unwrap();
    assert_eq!(client.create_group_calls(), 1);

    let _ = CloudWatch::new(client.clone(), "app-log").unwrap();
    assert_eq!(client.create_group_calls(), 1);
}

#[test]
fn test_events_shipped_in_call_order() {
    let client = MemoryLogs::new();
    let logger = logship::cloudwatch(client.clone(), "app-log").unwrap().build();

    logger.info("first").unwrap();
    logger.info_data("second", &json!({"id": 7})).unwrap();
    logger.error("third").unwrap();

    let streams = client.streams("app-log");
    assert_eq!(streams.len(), 1);

    let events = client.events("app-log", &streams[0]);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].message, "INFO: first");
    assert_eq!(events[1].message, "INFO: second\n{\"id\":7}");
    assert_eq!(events[2].message, "ERROR: third");
    assert!(events.iter().all(|event| event.timestamp > 0));
}

#[test]
fn test_sequence_token_discipline() {
    let client = MemoryLogs::new();
    let logger = logship::cloudwatch(client.clone(), "app-log").unwrap().build();

    logger.info("one").unwrap();
    logger.info("two").unwrap();
    logger.info("three").unwrap();

    let presented = client.put_tokens();
    assert_eq!(presented.len(), 3);
    // a fresh stream starts without a token; afterwards each call presents
    // the token returned by the previous one
    assert_eq!(presented[0], None);
    assert_eq!(presented[1].as_deref(), Some("00000000000000000001"));
    assert_eq!(presented[2].as_deref(), Some("00000000000000000002"));
}

#[test]
fn test_stream_name_is_five_minute_bucket() {
    let client = MemoryLogs::new();
    let logger = logship::cloudwatch(client.clone(), "app-log").unwrap().build();
    logger.info("bucketed").unwrap();

    let streams = client.streams("app-log");
    let parts: Vec<&str> = streams[0].split('-').collect();
    assert_eq!(parts.len(), 5);
    assert!(!streams[0].contains(':'));

    let minute: u8 = parts[4].parse().unwrap();
    assert_eq!(minute % 5, 0);
}

#[test]
fn test_structured_event_parses_remotely() {
    let client = MemoryLogs::new();
    let logger = logship::cloudwatch(client.clone(), "app-log").unwrap().build();

    logger
        .info_data("records ahead", &json!(["a", "b"]))
        .unwrap();

    let streams = client.streams("app-log");
    let events = client.events("app-log", &streams[0]);
    let second_line = events[0].message.lines().nth(1).unwrap();
    let parsed: Value = serde_json::from_str(second_line).unwrap();
    assert_eq!(parsed, json!({"records": ["a", "b"]}));
}

#[test]
fn test_put_failure_surfaces_as_append_error() {
    let client = MemoryLogs::new();
    let logger = logship::cloudwatch(client.clone(), "app-log").unwrap().build();

    client.fail_puts(true);
    let err = logger.info("remote is down").unwrap_err();
    assert!(matches!(err, logship::Error::Append(_)));

    // the failure must not corrupt the token chain
    client.fail_puts(false);
    logger.info("back again").unwrap();

    let streams = client.streams("app-log");
    let events = client.events("app-log", &streams[0]);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "INFO: back again");
}

#[test]
fn test_rejected_events_do_not_fail_the_call() {
    let client = MemoryLogs::new();
    let logger = logship::cloudwatch(client.clone(), "app-log").unwrap().build();

    client.reject_events(true);
    logger.warn("partially rejected").unwrap();

    let streams = client.streams("app-log");
    assert_eq!(client.events("app-log", &streams[0]).len(), 1);
}

#[test]
fn test_construction_failure_is_fatal() {
    let client = MemoryLogs::new();
    client.fail_creates(true);

    let err = logship::cloudwatch(client, "app-log").unwrap_err();
    assert!(matches!(err, logship::SetupError::Group { .. }));
}

#[test]
fn test_severity_filter_skips_remote_calls() {
    let client = MemoryLogs::new();
    let logger = logship::cloudwatch(client.clone(), "app-log")
        .unwrap()
        .level(Severity::Error)
        .build();

    logger.info("filtered").unwrap();
    assert!(client.put_tokens().is_empty());
}
