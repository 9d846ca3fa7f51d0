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

use reqverify_core::hash::base64_hmac_sha1;
use reqverify_core::hash::base64_hmac_sha256;
use reqverify_core::Result;

use super::canonical::{build_v1_string, build_v2_string, V3Variant};

/// SignatureVersion selects the keyed hash used for a string to sign.
///
/// Versions are not interchangeable: a callback signed with V3 never
/// verifies as V2 even if the strings to sign happen to be equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureVersion {
    /// Legacy signatures, HMAC-SHA1.
    V1,
    /// HMAC-SHA256 over `url + nonce`.
    V2,
    /// HMAC-SHA256 over one of the [`V3Variant`] forms.
    V3,
}

impl SignatureVersion {
    /// Sign the string with the auth token and return the base64 (standard,
    /// padded) encoded digest.
    ///
    /// An empty auth token is accepted.
    pub fn sign(self, auth_token: &str, string_to_sign: &str) -> String {
        match self {
            SignatureVersion::V1 => {
                base64_hmac_sha1(auth_token.as_bytes(), string_to_sign.as_bytes())
            }
            SignatureVersion::V2 | SignatureVersion::V3 => {
                base64_hmac_sha256(auth_token.as_bytes(), string_to_sign.as_bytes())
            }
        }
    }
}

/// Compute the V1 signature of a callback.
pub fn compute_signature(auth_token: &str, url: &str, params: &HashMap<String, String>) -> String {
    SignatureVersion::V1.sign(auth_token, &build_v1_string(url, params))
}

/// Compute the V2 signature of a callback.
pub fn compute_signature_v2(auth_token: &str, url: &str, nonce: &str) -> String {
    SignatureVersion::V2.sign(auth_token, &build_v2_string(url, nonce))
}

/// Compute the V3 signature of a callback over the given variant.
///
/// Fails only if the variant can't be built from the input, see [`V3Variant::build`].
pub fn compute_signature_v3(
    auth_token: &str,
    url: &str,
    nonce: &str,
    method: &str,
    params: &HashMap<String, String>,
    variant: V3Variant,
) -> Result<String> {
    let string_to_sign = variant.build(url, nonce, method, params)?;
    Ok(SignatureVersion::V3.sign(auth_token, &string_to_sign))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

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
    fn test_compute_signature() {
        assert_eq!(
            compute_signature("MAXXXXXXXXXXXXXXXXXX", "http://foo.com/answer/", &call_params()),
            "EJEt0ELanhr8hjMPIJnLNLex0dE="
        );
    }

    #[test]
    fn test_compute_signature_keeps_spaces() {
        let params = HashMap::from_iter([("a".to_string(), "1 2".to_string())]);
        assert_eq!(
            compute_signature("MAXXXXXXXXXXXXXXXXXX", "http://foo.com/answer/", &params),
            "n3Xfo4u+vRFyl3gsH8B0qDUIK5g="
        );
    }

    #[test]
    fn test_compute_signature_is_deterministic() {
        let first = compute_signature("MAXXXXXXXXXXXXXXXXXX", "http://foo.com/answer/", &call_params());
        for _ in 0..8 {
            // Every call builds a fresh map with its own iteration order.
            assert_eq!(
                compute_signature("MAXXXXXXXXXXXXXXXXXX", "http://foo.com/answer/", &call_params()),
                first
            );
        }
    }

    #[test]
    fn test_compute_signature_v2() {
        assert_eq!(
            compute_signature_v2("my_auth_token", "https://answer.url", "12345"),
            "ehV3IKhLysWBxC1sy8INm0qGoQYdYsHwuoKjsX7FsXc="
        );
    }

    #[test_case("GET", V3Variant::QueryFold, "pETJPPuss8j7tRO1V76pMhutvY1EbD905bph1xlJQhE="; "get query form")]
    #[test_case("POST", V3Variant::BodyFold, "oU2FndD/RdBLcBReK1rNidA6c6kh9+luV1RcvXJ/ciw="; "post body form")]
    #[test_case("GET", V3Variant::MethodPrefixed, "8JX+eXTdkPAxo5SZCULubTQTwaJPSjfeqCM0mM9y438="; "get plain form")]
    #[test_case("post", V3Variant::MethodPrefixed, "LQBfCDrlC9bLufRmB8xdEoIDc6BvHyPRW1/QSCgxWB0="; "lowercase method")]
    fn test_compute_signature_v3(method: &str, variant: V3Variant, expected: &str) {
        let actual = compute_signature_v3(
            "my_auth_token",
            "https://answer.url",
            "12345",
            method,
            &call_params(),
            variant,
        )
        .expect("variant must build");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_signature_lengths() {
        assert_eq!(SignatureVersion::V1.sign("", "").len(), 28);
        assert_eq!(SignatureVersion::V2.sign("", "").len(), 44);
        assert_eq!(SignatureVersion::V3.sign("", "").len(), 44);
    }
}
