/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client configuration: the region requests are sent to and the endpoint derived from it.

use crate::error::BuildError;
use http::Uri;
use std::borrow::Cow;
use std::collections::HashMap;
use std::env::VarError;
use std::fmt;
use std::sync::Arc;

/// The region to send requests to, for example `us-east-1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. An owned region is the escape hatch for when
    // they are not.
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    /// Creates a region from a runtime value.
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    /// Creates a region from a static string.
    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Access to environment variables that tests can replace.
///
/// ```rust
/// use rds::config::Env;
/// let env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
/// assert_eq!(env.get("AWS_REGION").unwrap(), "eu-west-1");
/// ```
#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

enum EnvInner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Env::real()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            EnvInner::Real => f.write_str("Env::Real"),
            EnvInner::Fake(_) => f.write_str("Env::Fake"),
        }
    }
}

impl Env {
    /// Reads the variable `k`.
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            EnvInner::Real => std::env::var(k),
            EnvInner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// An environment holding exactly `vars`.
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        Env(Arc::new(EnvInner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// The environment of the running process.
    pub fn real() -> Self {
        Env(Arc::new(EnvInner::Real))
    }
}

/// Configuration shared by every request.
#[derive(Clone, Debug, Default)]
pub struct Config {
    region: Option<Region>,
    endpoint_url: Option<String>,
}

impl Config {
    /// Returns a builder for `Config`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The configured region.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The endpoint override, if one was set.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Resolves the URI requests are sent to.
    ///
    /// An explicit endpoint URL wins. Otherwise the endpoint is derived from the region:
    /// `https://rds.{region}.amazonaws.com`, or `amazonaws.com.cn` for the China regions.
    pub fn endpoint(&self) -> Result<Uri, BuildError> {
        let endpoint = match (&self.endpoint_url, &self.region) {
            (Some(url), _) => url.clone(),
            (None, Some(region)) => {
                let dns_suffix = if region.as_ref().starts_with("cn-") {
                    "amazonaws.com.cn"
                } else {
                    "amazonaws.com"
                };
                format!("https://rds.{}.{}", region, dns_suffix)
            }
            (None, None) => return Err(BuildError::missing_region()),
        };
        let uri = match endpoint.parse::<Uri>() {
            Ok(uri) => uri,
            Err(err) => return Err(BuildError::invalid_endpoint(endpoint, Some(err))),
        };
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(BuildError::invalid_endpoint(endpoint, None));
        }
        Ok(uri)
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
    env: Env,
}

impl Builder {
    /// Sets the region.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets or clears the region.
    pub fn set_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Sends requests to `endpoint_url` instead of the regional endpoint.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Replaces the environment read by [`region_from_env`](Builder::region_from_env).
    pub fn env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Sets the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
    ///
    /// Leaves the region unchanged when neither variable is set.
    pub fn region_from_env(mut self) -> Self {
        let region = self
            .env
            .get("AWS_REGION")
            .or_else(|_| self.env.get("AWS_DEFAULT_REGION"))
            .ok();
        match region {
            Some(region) => {
                tracing::debug!(region = %region, "loaded region from the environment");
                self.region = Some(Region::new(region));
            }
            None => tracing::debug!("no region set in the environment"),
        }
        self
    }

    /// Creates the configuration.
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
        }
    }
}
