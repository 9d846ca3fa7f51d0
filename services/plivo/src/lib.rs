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

//! Verifiers for Plivo callbacks.
//!
//! Plivo signs every callback it sends with the account's auth token. Three
//! signature versions exist:
//!
//! - V1 (`X-Plivo-Signature`): HMAC-SHA1 over the url followed by the sorted params.
//! - V2 (`X-Plivo-Signature-V2`): HMAC-SHA256 over the url followed by a nonce.
//! - V3 (`X-Plivo-Signature-V3`): HMAC-SHA256 over one of several [`V3Variant`] forms.
//!
//! Every function here is pure: no I/O, no shared state, safe to call from any
//! thread. Header extraction and body parsing are left to the HTTP layer.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use reqverify_plivo::{Config, Credential, RequestVerifier};
//!
//! # fn main() -> reqverify_core::Result<()> {
//! let cred = Credential::try_from(Config::new().with_auth_token("MAXXXXXXXXXXXXXXXXXX"))?;
//! let verifier = RequestVerifier::new(cred);
//!
//! let params = HashMap::from_iter([
//!     ("CallUUID".to_string(), "97ceeb52-58b6-11e1-86da-77300b68f8bb".to_string()),
//!     ("Duration".to_string(), "300".to_string()),
//! ]);
//! assert!(verifier.verify_v1("http://foo.com/answer/", &params, "EJEt0ELanhr8hjMPIJnLNLex0dE="));
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{PLIVO_AUTH_ID, PLIVO_AUTH_TOKEN};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::{build_v1_string, build_v2_string, build_v3_string, V3Variant};

mod sign;
pub use sign::{compute_signature, compute_signature_v2, compute_signature_v3, SignatureVersion};

mod verify;
pub use verify::{validate_signature, validate_signature_v2, validate_signature_v3};

mod verifier;
pub use verifier::RequestVerifier;

mod utils;
pub use utils::{headers, numbers};
