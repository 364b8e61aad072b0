use std::collections::{BTreeMap, HashMap};

use crate::error::{FilerError, Result};

/// Source of key/value settings, normally the process environment.
///
/// Lookups are expected to be live: implementations must not cache, so a
/// rotated credential is picked up by the next call.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// All variable names currently defined, in the source's own order.
    fn keys(&self) -> Vec<String>;
}

/// The real process environment. Variables whose name or value is not
/// valid UTF-8 are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn keys(&self) -> Vec<String> {
        std::env::vars_os()
            .filter_map(|(k, v)| {
                v.to_str()?;
                k.into_string().ok()
            })
            .collect()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        HashMap::keys(self).cloned().collect()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        BTreeMap::keys(self).cloned().collect()
    }
}

/// Hard lookup: absence is an error naming the variable.
pub fn require(env: &dyn EnvSource, key: &str) -> Result<String> {
    env.var(key)
        .ok_or_else(|| FilerError::MissingEnvironmentVariable(key.to_string()))
}
