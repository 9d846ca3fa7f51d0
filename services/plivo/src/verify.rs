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

//! Signature verification for every supported version.
//!
//! Verification answers with a plain `bool`. A malformed supplied signature
//! is just one that does not match: callers can't tell the two apart.

use std::collections::HashMap;

use log::debug;
use reqverify_core::hash::constant_time_eq;

use super::canonical::V3Variant;
use super::sign::{compute_signature, compute_signature_v2, compute_signature_v3};

/// Validate a V1 signature.
pub fn validate_signature(
    auth_token: &str,
    url: &str,
    params: &HashMap<String, String>,
    signature: &str,
) -> bool {
    let expected = compute_signature(auth_token, url, params);
    let matched = signature_matches(&expected, signature);
    if !matched {
        debug!("signature v1 mismatch for url {url}");
    }
    matched
}

/// Validate a V2 signature.
pub fn validate_signature_v2(url: &str, nonce: &str, signature: &str, auth_token: &str) -> bool {
    let expected = compute_signature_v2(auth_token, url, nonce);
    let matched = signature_matches(&expected, signature);
    if !matched {
        debug!("signature v2 mismatch for url {url}");
    }
    matched
}

/// Validate a V3 signature.
///
/// `signature` may carry several comma-separated signatures. Every one of
/// them is checked against every [`V3Variant`] in [`V3Variant::ALL`] order,
/// and the request is accepted on the first match.
pub fn validate_signature_v3(
    url: &str,
    nonce: &str,
    method: &str,
    signature: &str,
    auth_token: &str,
    params: &HashMap<String, String>,
) -> bool {
    let supplied: Vec<&str> = signature
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();
    if supplied.is_empty() {
        debug!("signature v3 is empty for url {url}");
        return false;
    }

    for variant in V3Variant::ALL {
        let expected = match compute_signature_v3(auth_token, url, nonce, method, params, variant) {
            Ok(v) => v,
            Err(err) => {
                debug!("skip signature v3 variant {variant:?}: {err}");
                continue;
            }
        };

        if supplied.iter().any(|s| signature_matches(&expected, s)) {
            debug!("signature v3 matched variant {variant:?} for url {url}");
            return true;
        }
    }

    debug!("signature v3 mismatch for url {url}");
    false
}

/// All versions compare the encoded signatures through this single check.
fn signature_matches(expected: &str, supplied: &str) -> bool {
    constant_time_eq(expected.as_bytes(), supplied.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_params() -> HashMap<String, String> {
        HashMap::from_iter([
            (
                "CallUUID".to_string(),
                "97ceeb52-58b6-11e1-86da-77300b68f8bb".to_string(),
            ),
            ("Duration".to_string(), "300".to_string()),
        ])
    }

    #[test]
    fn test_validate_signature() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert!(validate_signature(
            "MAXXXXXXXXXXXXXXXXXX",
            "http://foo.com/answer/",
            &call_params(),
            "EJEt0ELanhr8hjMPIJnLNLex0dE="
        ));
        assert!(!validate_signature(
            "MAXXXXXXXXXXXXXXXXXX",
            "http://foo.com/answer/",
            &call_params(),
            "EJEt0ELanhr8hjMPIJnLNLex0dE"
        ));
        assert!(!validate_signature(
            "MAXXXXXXXXXXXXXXXXXX",
            "http://foo.com/answer/",
            &call_params(),
            "not-even-base64!"
        ));
    }

    #[test]
    fn test_validate_signature_v3_with_rotated_signatures() {
        let _ = env_logger::builder().is_test(true).try_init();

        let signature = "rXj4UwTSVxH6Kj+W0qX8LaCvVOOvmzPGzY8sQVn3d1I=, oU2FndD/RdBLcBReK1rNidA6c6kh9+luV1RcvXJ/ciw=";
        assert!(validate_signature_v3(
            "https://answer.url",
            "12345",
            "POST",
            signature,
            "my_auth_token",
            &call_params(),
        ));
    }

    #[test]
    fn test_validate_signature_v3_rejects_empty_signature() {
        for signature in ["", ",", " , "] {
            assert!(!validate_signature_v3(
                "https://answer.url",
                "12345",
                "GET",
                signature,
                "my_auth_token",
                &call_params(),
            ));
        }
    }

    #[test]
    fn test_validate_signature_v3_without_params() {
        // Only the plain form can be built without params.
        assert!(validate_signature_v3(
            "https://answer.url",
            "12345",
            "GET",
            "8JX+eXTdkPAxo5SZCULubTQTwaJPSjfeqCM0mM9y438=",
            "my_auth_token",
            &HashMap::new(),
        ));
    }
}
