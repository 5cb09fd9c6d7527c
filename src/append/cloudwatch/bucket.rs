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

use jiff::Zoned;

/// Width of one stream bucket in minutes.
const BUCKET_MINUTES: i8 = 5;

/// Computes the log stream name for `now`.
///
/// The minute component is floored to the nearest [`BUCKET_MINUTES`]
/// boundary, so every event of one process within one bucket lands in the
/// same stream. The name contains only digits and dashes; `:` is not allowed
/// in stream names.
pub(crate) fn stream_name(now: &Zoned) -> String {
    let minute = now.minute() - now.minute() % BUCKET_MINUTES;
    format!(
        "{:04}-{:02}-{:02}-{:02}-{:02}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        minute
    )
}
