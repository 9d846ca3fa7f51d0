// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::HashMap;

use super::constants::*;

/// Join identifiers with `<`, the form used for multi-leg numbers and
/// call uuids in outbound requests.
///
/// ```
/// use reqverify_plivo::numbers;
///
/// assert_eq!(numbers(["+911231231230", "+913213213210"]), "+911231231230<+913213213210");
/// ```
pub fn numbers<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut s = String::new();
    for (idx, id) in ids.into_iter().enumerate() {
        if idx > 0 {
            s.push_str(NUMBERS_DELIMITER);
        }
        s.push_str(id.as_ref());
    }
    s
}

/// Serialize custom SIP headers into `Name=Value` pairs joined by `,`.
///
/// Headers are sorted by name so the output doesn't depend on the map's
/// iteration order.
pub fn headers(headers: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = headers.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}{HEADER_VALUE_SEPARATOR}{v}"))
        .collect::<Vec<_>>()
        .join(HEADERS_SEPARATOR)
}
