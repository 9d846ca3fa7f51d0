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

use std::fmt::{Debug, Formatter};

use reqverify_core::{utils::Redact, Error};

use super::config::Config;

/// Credential for Plivo callbacks.
#[derive(Clone)]
pub struct Credential {
    /// Auth id of the account, not part of any signature.
    pub auth_id: Option<String>,
    /// Auth token used as the HMAC key.
    pub auth_token: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(auth_id: Option<String>, auth_token: String) -> Self {
        Self {
            auth_id,
            auth_token,
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("auth_id", &Redact::from(&self.auth_id))
            .field("auth_token", &Redact::from(&self.auth_token))
            .finish()
    }
}

impl TryFrom<Config> for Credential {
    type Error = Error;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let auth_token = config
            .auth_token
            .ok_or_else(|| Error::config_invalid("auth_token is required"))?;

        Ok(Self::new(config.auth_id, auth_token))
    }
}
