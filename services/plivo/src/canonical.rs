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

//! Canonical strings fed into the keyed hash.
//!
//! Request parameters arrive in a `HashMap` whose iteration order is
//! unspecified, so every builder collects the pairs and sorts them by key
//! before folding them into the output.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt::Write;

use http::Uri;
use log::debug;
use reqverify_core::{Error, Result};

use super::constants::*;

/// Build the string to sign for V1 signatures.
///
/// ## Format
///
/// ```text
/// url + key1 + value1 + key2 + value2 + ...
/// ```
///
/// Keys are sorted lexicographically. Values are used verbatim, nothing is
/// percent-encoded.
pub fn build_v1_string(url: &str, params: &HashMap<String, String>) -> String {
    let mut s = String::with_capacity(url.len() + params_len(params));
    s.push_str(url);
    fold_params(&mut s, params);

    debug!("string to sign: {}", &s);
    s
}

/// Build the string to sign for V2 signatures: `url + nonce`.
pub fn build_v2_string(url: &str, nonce: &str) -> String {
    let s = format!("{url}{nonce}");

    debug!("string to sign: {}", &s);
    s
}

/// Build the plain V3 string to sign: `METHOD + url + nonce`.
///
/// The method is trimmed and upper-cased here, so `get` and `GET` produce the
/// same string on both sides.
pub fn build_v3_string(url: &str, nonce: &str, method: &str) -> String {
    let s = format!("{}{url}{nonce}", normalize_method(method));

    debug!("string to sign: {}", &s);
    s
}

/// The canonical forms accepted for V3 signatures.
///
/// Upstream has signed V3 callbacks over different bases depending on the
/// request shape. A verifier tries every variant in [`V3Variant::ALL`] order
/// and accepts the first one that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V3Variant {
    /// `METHOD + url + nonce`, see [`build_v3_string`].
    MethodPrefixed,
    /// `METHOD + url + nonce + key1 + value1 + ...`
    MethodPrefixedWithParams,
    /// `scheme://authority/path?k1=v1&k2=v2.nonce`
    ///
    /// Pairs already present in the url query are merged with the params,
    /// params win on duplicated keys. Used for GET callbacks.
    QueryFold,
    /// `url.key1value1key2value2.nonce`, used for POST callbacks.
    BodyFold,
}

impl V3Variant {
    /// Every accepted variant, in the order verification tries them.
    pub const ALL: [V3Variant; 4] = [
        V3Variant::MethodPrefixed,
        V3Variant::MethodPrefixedWithParams,
        V3Variant::QueryFold,
        V3Variant::BodyFold,
    ];

    /// Build the string to sign for this variant.
    ///
    /// Returns [`ErrorKind::RequestInvalid`](reqverify_core::ErrorKind::RequestInvalid)
    /// when the variant cannot be built from the given input, for example
    /// `QueryFold` over an url without scheme or `BodyFold` without params.
    pub fn build(
        self,
        url: &str,
        nonce: &str,
        method: &str,
        params: &HashMap<String, String>,
    ) -> Result<String> {
        let s = match self {
            V3Variant::MethodPrefixed => return Ok(build_v3_string(url, nonce, method)),
            V3Variant::MethodPrefixedWithParams => {
                let mut s = build_v3_string(url, nonce, method);
                fold_params(&mut s, params);
                s
            }
            V3Variant::QueryFold => query_fold(url, nonce, params)?,
            V3Variant::BodyFold => {
                if params.is_empty() {
                    return Err(Error::request_invalid("no params to fold into body form"));
                }

                let cap = url.len() + params_len(params) + nonce.len() + 2;
                let mut s = String::with_capacity(cap);
                s.push_str(url);
                s.push_str(V3_SEGMENT_SEPARATOR);
                fold_params(&mut s, params);
                s.push_str(V3_SEGMENT_SEPARATOR);
                s.push_str(nonce);
                s
            }
        };

        debug!("string to sign: {}", &s);
        Ok(s)
    }
}

fn query_fold(url: &str, nonce: &str, params: &HashMap<String, String>) -> Result<String> {
    let uri: Uri = url
        .parse()
        .map_err(|e| Error::request_invalid(format!("invalid url: {url}")).with_source(e))?;
    let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) else {
        return Err(Error::request_invalid(format!(
            "url must be absolute to build query form: {url}"
        )));
    };

    let mut pairs: BTreeMap<String, String> = uri
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    pairs.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
    if pairs.is_empty() {
        return Err(Error::request_invalid("no params to fold into query form"));
    }

    let mut s = format!("{scheme}://{authority}{}?", uri.path());
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx > 0 {
            s.push('&');
        }
        write!(&mut s, "{k}={v}")?;
    }
    s.push_str(V3_SEGMENT_SEPARATOR);
    s.push_str(nonce);
    Ok(s)
}

/// Append sorted `key + value` pairs without any separator.
fn fold_params(s: &mut String, params: &HashMap<String, String>) {
    let pairs: BTreeMap<&str, &str> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    for (k, v) in pairs {
        s.push_str(k);
        s.push_str(v);
    }
}

fn params_len(params: &HashMap<String, String>) -> usize {
    params.iter().map(|(k, v)| k.len() + v.len()).sum()
}

fn normalize_method(method: &str) -> String {
    method.trim().to_ascii_uppercase()
}
