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

//! Composition of log messages with structured data payloads.

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Key under which sequence payloads are wrapped. The downstream log consumer
/// only recognizes a JSON object as structured data, not a bare array.
const RECORDS_KEY: &str = "records";

/// Converts a structured argument into the JSON payload logged with a message.
///
/// # Errors
///
/// Returns an error if `data` cannot be represented as JSON, e.g. a map with
/// non-string keys.
pub fn to_payload<T>(data: &T) -> Result<Value, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(data)
}

/// Composes the text emitted for `message` with an optional structured
/// payload. Pure; performs no IO.
///
/// Without a payload the output is `message`, unchanged. With a payload the
/// output is `message`, a newline, and the payload's compact JSON
/// serialization; a sequence payload is wrapped as `{"records": …}` first.
/// With `pretty` enabled, a rendering of the payload preceded by its type
/// name is appended after the JSON line, with ANSI color codes stripped. The
/// pretty block never alters the first two lines.
///
/// ```
/// use serde_json::json;
///
/// let composed = logship::structured::compose("hello", Some(&json!({"id": 7})), false);
/// assert_eq!(composed, "hello\n{\"id\":7}");
/// ```
pub fn compose(message: &str, payload: Option<&Value>, pretty: bool) -> String {
    let Some(payload) = payload else {
        return message.to_string();
    };

    let data = match payload {
        Value::Array(_) => {
            let mut wrapped = Map::new();
            wrapped.insert(RECORDS_KEY.to_string(), payload.clone());
            Value::Object(wrapped)
        }
        _ => payload.clone(),
    };

    let mut text = String::with_capacity(message.len() + 64);
    text.push_str(message);
    text.push('\n');
    text.push_str(&data.to_string());

    if pretty {
        text.push('\n');
        text.push_str(type_name(payload));
        text.push('\n');
        // serializing a Value back to text cannot fail
        let rendered =
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        text.push_str(&strip_ansi(&rendered));
    }

    text
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Removes ANSI escape sequences, so colorized payload strings stay readable
/// in the pretty block.
fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if chars.clone().next() == Some('[') {
            chars.next();
            // CSI sequence: parameters up to and including a final byte in @..~
            for c in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&c) {
                    break;
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serde_json::json;

    use super::compose;
    use super::strip_ansi;
    use super::to_payload;

    #[test]
    fn test_passthrough_identity() {
        assert_eq!(compose("hello", None, false), "hello");
        assert_eq!(compose("hello", None, true), "hello");
    }

    #[test]
    fn test_mapping_payload() {
        let composed = compose("hello", Some(&json!({"id": "10102001"})), false);
        assert_eq!(composed, "hello\n{\"id\":\"10102001\"}");

        let second = composed.lines().nth(1).unwrap();
        let parsed: Value = serde_json::from_str(second).unwrap();
        assert_eq!(parsed, json!({"id": "10102001"}));
    }

    #[test]
    fn test_sequence_payload_wrapped() {
        let composed = compose("hello", Some(&json!(["a", "b"])), false);
        assert_eq!(composed, "hello\n{\"records\":[\"a\",\"b\"]}");
    }

    #[test]
    fn test_pretty_strictly_appends() {
        let payload = json!({"id": "10102001"});
        let plain = compose("hello", Some(&payload), false);
        let pretty = compose("hello", Some(&payload), true);

        assert!(pretty.starts_with(&plain));
        assert_eq!(
            pretty.lines().take(2).collect::<Vec<_>>(),
            plain.lines().collect::<Vec<_>>(),
        );
        assert!(pretty.lines().nth(2).unwrap().contains("Object"));
    }

    #[test]
    fn test_pretty_type_names() {
        let pretty = compose("m", Some(&json!(["a"])), true);
        assert!(pretty.contains("\nArray\n"));
    }

    #[test]
    fn test_multiline_message_kept() {
        let composed = compose("line one\nline two", Some(&json!({"k": 1})), false);
        assert_eq!(composed, "line one\nline two\n{\"k\":1}");
    }

    #[test]
    fn test_to_payload() {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            id: &'a str,
        }

        let payload = to_payload(&Request { id: "10102001" }).unwrap();
        assert_eq!(payload, json!({"id": "10102001"}));
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\u{1b}[1;35m SUCCESS \u{1b}[0m"), " SUCCESS ");
        assert_eq!(strip_ansi("no escapes"), "no escapes");
    }

    #[test]
    fn test_colored_payload_string_stripped() {
        let payload = json!(format!("\u{1b}[32mok\u{1b}[0m"));
        let pretty = compose("m", Some(&payload), true);
        let block = pretty.lines().last().unwrap();
        assert!(!block.contains('\u{1b}'));
    }
}
