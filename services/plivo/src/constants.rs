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

/// Env value carrying the account auth id.
pub const PLIVO_AUTH_ID: &str = "PLIVO_AUTH_ID";
/// Env value carrying the account auth token.
pub const PLIVO_AUTH_TOKEN: &str = "PLIVO_AUTH_TOKEN";

/// Delimiter between identifiers joined by [`crate::numbers`].
pub const NUMBERS_DELIMITER: &str = "<";
/// Separator between two serialized headers.
pub const HEADERS_SEPARATOR: &str = ",";
/// Separator between a header's name and its value.
pub const HEADER_VALUE_SEPARATOR: &str = "=";

/// Separator between segments of the V3 query and body forms.
pub const V3_SEGMENT_SEPARATOR: &str = ".";
