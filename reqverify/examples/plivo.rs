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

use anyhow::Result;
use log::info;
use reqverify::default_context;
use reqverify::plivo::{Config, Credential, RequestVerifier};

fn main() -> Result<()> {
    env_logger::init();

    // Reads PLIVO_AUTH_ID and PLIVO_AUTH_TOKEN, explicit values win.
    let ctx = default_context();
    let config = Config::new().from_env(&ctx);
    info!("loaded config: {config:?}");

    let verifier = RequestVerifier::new(Credential::try_from(config)?);

    // Values as extracted by the HTTP layer from an inbound callback.
    let url = "https://answer.url";
    let nonce = "12345";
    let signature = "oU2FndD/RdBLcBReK1rNidA6c6kh9+luV1RcvXJ/ciw=";
    let params = HashMap::from_iter([
        (
            "CallUUID".to_string(),
            "97ceeb52-58b6-11e1-86da-77300b68f8bb".to_string(),
        ),
        ("Duration".to_string(), "300".to_string()),
    ]);

    if verifier.verify_v3(url, nonce, "POST", signature, &params) {
        println!("callback is authentic");
    } else {
        println!("callback rejected");
    }

    Ok(())
}
