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

//! Core components for verifying signed requests.
//!
//! This crate provides the foundational pieces shared by every service crate
//! in the reqverify ecosystem.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the environment implementation used to load configuration
//! - **Error**: The error type returned by signing and configuration code paths
//! - **Hash**: base64 HMAC and constant-time comparison helpers
//!
//! Verification itself never returns an [`Error`]: a signature either matches or it
//! doesn't. Errors only show up while loading configuration or building a string to
//! sign from input that can't carry it.
//!
//! ## Example
//!
//! ```
//! use reqverify_core::hash::{base64_hmac_sha1, constant_time_eq};
//!
//! let expected = base64_hmac_sha1(b"secret", b"http://example.com/callback");
//! let supplied = expected.clone();
//!
//! assert!(constant_time_eq(expected.as_bytes(), supplied.as_bytes()));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
