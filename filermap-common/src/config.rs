//! Per-filer settings read from the environment.
//!
//! Naming convention, keyed by canonical filer alias:
//! - `{filer}_url`, `{filer}_access`, `{filer}_secret`: endpoint and credentials
//! - `{filer}_{share}`: bucket backing a share

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::env::{require, EnvSource};
use crate::error::{FilerError, Result};
use crate::path::get_components;

pub fn url_key(filer: &str) -> String {
    format!("{}_url", filer)
}

pub fn access_key_key(filer: &str) -> String {
    format!("{}_access", filer)
}

pub fn secret_key_key(filer: &str) -> String {
    format!("{}_secret", filer)
}

pub fn bucket_key(filer: &str, share: &str) -> String {
    format!("{}_{}", filer, share)
}

fn filer_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.*filersvm|st.*svm)_url$").expect("valid filer url regex"))
}

/// Settings needed to reach the object behind one filer path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilerEnvConfig {
    pub url: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub bucket_name: Option<String>,
    pub object_key: Option<String>,
}

/// Look up endpoint, credentials and bucket for a filer path.
///
/// Once the filer is known its url, access and secret variables are
/// mandatory. The bucket is optional: a share without a configured bucket
/// yields `bucket_name: None` rather than an error.
pub fn get_filer_env_config(env: &dyn EnvSource, path: &str) -> Result<FilerEnvConfig> {
    let components = get_components(path);

    let (url, access_key, secret_key) = match components.filer.as_deref() {
        Some(filer) => (
            Some(require(env, &url_key(filer))?),
            Some(require(env, &access_key_key(filer))?),
            Some(require(env, &secret_key_key(filer))?),
        ),
        None => (None, None, None),
    };

    let bucket_name = match (components.filer.as_deref(), components.share.as_deref()) {
        (Some(filer), Some(share)) => env.var(&bucket_key(filer, share)),
        _ => None,
    };

    Ok(FilerEnvConfig {
        url,
        access_key,
        secret_key,
        bucket_name,
        object_key: components.object_key,
    })
}

/// One filer discovered from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct FilerConfig {
    pub base: String,
    pub url: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl FilerConfig {
    /// Soft lookup of the three per-filer variables; missing ones stay `None`.
    pub fn from_env(env: &dyn EnvSource, base: &str) -> Self {
        Self {
            base: base.to_string(),
            url: env.var(&url_key(base)),
            access_key: env.var(&access_key_key(base)),
            secret_key: env.var(&secret_key_key(base)),
        }
    }

    pub fn summary(&self) -> FilerSummary {
        FilerSummary {
            base: self.base.clone(),
            url: self.url.clone(),
            access_key_set: self.access_key.is_some(),
            secret_key_set: self.secret_key.is_some(),
        }
    }
}

impl fmt::Debug for FilerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilerConfig")
            .field("base", &self.base)
            .field("url", &self.url)
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Printable view of a [`FilerConfig`] without credential values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilerSummary {
    pub base: String,
    pub url: Option<String>,
    pub access_key_set: bool,
    pub secret_key_set: bool,
}

/// Every filer with a `{base}_url` variable following the alias naming
/// convention (`*filersvm` or `st*svm`). Order follows `env.keys()`.
pub fn get_all_filers(env: &dyn EnvSource) -> Vec<FilerConfig> {
    let pattern = filer_url_pattern();
    let filers: Vec<FilerConfig> = env
        .keys()
        .iter()
        .filter(|key| pattern.is_match(key))
        .filter_map(|key| key.strip_suffix("_url"))
        .map(|base| FilerConfig::from_env(env, base))
        .collect();
    debug!(count = filers.len(), "Discovered filers from environment");
    filers
}

/// Object-storage client path for a filer path: `{filer}/{bucket}/{object_key}`.
pub fn get_mc_path(env: &dyn EnvSource, path: &str) -> Result<String> {
    let components = get_components(path);

    let filer = match components.filer.as_deref() {
        Some(f) if !f.is_empty() => f,
        _ => return Err(FilerError::Configuration("Missing filer name.".to_string())),
    };
    let share = match components.share.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(FilerError::Configuration("Missing share name.".to_string())),
    };

    let bucket = env
        .var(&bucket_key(filer, share))
        .ok_or_else(|| FilerError::Configuration("Bucket for share not found.".to_string()))?;
    let object_key = components.object_key.unwrap_or_default();

    Ok(format!("{}/{}/{}", filer, bucket, object_key))
}
