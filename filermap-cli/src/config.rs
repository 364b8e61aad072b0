use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::init::DEFAULT_DONE_FILE;

#[derive(Debug, Clone, Deserialize)]
pub struct InitConfig {
    #[serde(default = "default_mc_binary")]
    pub mc_binary: String,
    #[serde(default = "default_done_file")]
    pub done_file: PathBuf,
    #[serde(default)]
    pub quiet: bool,
}

fn default_mc_binary() -> String {
    "mc".to_string()
}

fn default_done_file() -> PathBuf {
    PathBuf::from(DEFAULT_DONE_FILE)
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            mc_binary: default_mc_binary(),
            done_file: default_done_file(),
            quiet: false,
        }
    }
}

impl InitConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: InitConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mc_binary.trim().is_empty() {
            anyhow::bail!("mc_binary must not be empty");
        }
        if self.done_file.as_os_str().is_empty() {
            anyhow::bail!("done_file must not be empty");
        }
        Ok(())
    }
}
