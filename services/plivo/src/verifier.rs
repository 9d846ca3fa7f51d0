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

use super::credential::Credential;
use super::sign::compute_signature;
use super::verify::{validate_signature, validate_signature_v2, validate_signature_v3};

/// RequestVerifier checks inbound Plivo callbacks against one account's auth token.
///
/// - [Validating requests](https://www.plivo.com/docs/voice/concepts/signature-validation)
#[derive(Debug, Clone)]
pub struct RequestVerifier {
    credential: Credential,
}

impl RequestVerifier {
    /// Create a verifier for the given credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Compute the V1 signature of a callback, useful to build fixtures.
    pub fn sign_v1(&self, url: &str, params: &HashMap<String, String>) -> String {
        compute_signature(&self.credential.auth_token, url, params)
    }

    /// Verify a V1 (`X-Plivo-Signature`) callback.
    pub fn verify_v1(&self, url: &str, params: &HashMap<String, String>, signature: &str) -> bool {
        validate_signature(&self.credential.auth_token, url, params, signature)
    }

    /// Verify a V2 (`X-Plivo-Signature-V2`) callback.
    pub fn verify_v2(&self, url: &str, nonce: &str, signature: &str) -> bool {
        validate_signature_v2(url, nonce, signature, &self.credential.auth_token)
    }

    /// Verify a V3 (`X-Plivo-Signature-V3`) callback.
    pub fn verify_v3(
        &self,
        url: &str,
        nonce: &str,
        method: &str,
        signature: &str,
        params: &HashMap<String, String>,
    ) -> bool {
        validate_signature_v3(
            url,
            nonce,
            method,
            signature,
            &self.credential.auth_token,
            params,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_verifier_from_config() {
        let cred = Credential::try_from(Config::new().with_auth_token("my_auth_token")).unwrap();
        let verifier = RequestVerifier::new(cred);

        assert!(verifier.verify_v2(
            "https://answer.url",
            "12345",
            "ehV3IKhLysWBxC1sy8INm0qGoQYdYsHwuoKjsX7FsXc="
        ));
        assert!(!verifier.verify_v2(
            "https://answer.url",
            "12346",
            "ehV3IKhLysWBxC1sy8INm0qGoQYdYsHwuoKjsX7FsXc="
        ));
    }

    #[test]
    fn test_sign_then_verify_v1() {
        let verifier = RequestVerifier::new(Credential::new(None, "MAXXXXXXXXXXXXXXXXXX".into()));
        let params = HashMap::from_iter([("a".to_string(), "1 2".to_string())]);

        let signature = verifier.sign_v1("http://foo.com/answer/", &params);
        assert_eq!(signature, "n3Xfo4u+vRFyl3gsH8B0qDUIK5g=");
        assert!(verifier.verify_v1("http://foo.com/answer/", &params, &signature));
        assert!(!verifier.verify_v1("http://foo.com/answer", &params, &signature));
    }
}
