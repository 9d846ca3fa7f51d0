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

use super::constants::*;
use reqverify_core::{utils::Redact, Context};

/// Config carries the account credentials used to verify Plivo callbacks.
#[derive(Clone, Default)]
pub struct Config {
    /// `auth_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PLIVO_AUTH_ID`]
    pub auth_id: Option<String>,
    /// `auth_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PLIVO_AUTH_TOKEN`]
    pub auth_token: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set auth_id
    pub fn with_auth_id(mut self, auth_id: impl Into<String>) -> Self {
        self.auth_id = Some(auth_id.into());
        self
    }

    /// Set auth_token
    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(PLIVO_AUTH_ID) {
            self.auth_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PLIVO_AUTH_TOKEN) {
            self.auth_token.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth_id", &Redact::from(&self.auth_id))
            .field("auth_token", &Redact::from(&self.auth_token))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqverify_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (PLIVO_AUTH_ID.to_string(), "MAXXXXXXXXXXXXXXXXXX".to_string()),
                (PLIVO_AUTH_TOKEN.to_string(), "from_env_token".to_string()),
            ]),
        });

        let config = Config::new().from_env(&ctx);
        assert_eq!(config.auth_id.as_deref(), Some("MAXXXXXXXXXXXXXXXXXX"));
        assert_eq!(config.auth_token.as_deref(), Some("from_env_token"));
    }

    #[test]
    fn test_explicit_values_win_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([(PLIVO_AUTH_TOKEN.to_string(), "from_env_token".to_string())]),
        });

        let config = Config::new()
            .with_auth_token("my_auth_token")
            .from_env(&ctx);
        assert_eq!(config.auth_id, None);
        assert_eq!(config.auth_token.as_deref(), Some("my_auth_token"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new()
            .with_auth_id("MAXXXXXXXXXXXXXXXXXX")
            .with_auth_token("my_auth_token");

        let output = format!("{config:?}");
        assert!(!output.contains("my_auth_token"));
        assert_eq!(output, r#"Config { auth_id: MAX***XXX, auth_token: my_***ken }"#);
    }
}
