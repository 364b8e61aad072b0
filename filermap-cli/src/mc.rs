//! Registration of filer aliases with the MinIO client (`mc`).

use std::process::{Command, Stdio};

use filermap_common::FilerConfig;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("filer {alias} has no {field} configured")]
    MissingField { alias: String, field: &'static str },
    #[error("failed to run {binary} for filer {alias}: {source}")]
    Spawn {
        alias: String,
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{binary} alias set for filer {alias} exited with {}", describe_code(.code))]
    ExitStatus {
        alias: String,
        binary: String,
        code: Option<i32>,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Something that can register a filer as a named storage-client alias.
pub trait AliasRegistrar {
    fn set_alias(&self, filer: &FilerConfig) -> Result<(), RegistrationError>;
}

/// Runs `<binary> alias set <alias> <url> <access> <secret>` per filer.
///
/// The call blocks until the child exits; there is no timeout.
pub struct McClient {
    binary: String,
    quiet: bool,
}

impl McClient {
    pub fn new(binary: impl Into<String>, quiet: bool) -> Self {
        Self {
            binary: binary.into(),
            quiet,
        }
    }

    fn output(&self) -> Stdio {
        if self.quiet {
            Stdio::null()
        } else {
            Stdio::inherit()
        }
    }
}

fn field<'a>(
    filer: &FilerConfig,
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, RegistrationError> {
    value.as_deref().ok_or_else(|| RegistrationError::MissingField {
        alias: filer.base.clone(),
        field: name,
    })
}

impl AliasRegistrar for McClient {
    fn set_alias(&self, filer: &FilerConfig) -> Result<(), RegistrationError> {
        let url = field(filer, &filer.url, "url")?;
        let access_key = field(filer, &filer.access_key, "access key")?;
        let secret_key = field(filer, &filer.secret_key, "secret key")?;

        debug!(alias = %filer.base, binary = %self.binary, "Running alias set");
        let status = Command::new(&self.binary)
            .args(["alias", "set", filer.base.as_str(), url, access_key, secret_key])
            .stdin(Stdio::null())
            .stdout(self.output())
            .stderr(self.output())
            .status()
            .map_err(|source| RegistrationError::Spawn {
                alias: filer.base.clone(),
                binary: self.binary.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RegistrationError::ExitStatus {
                alias: filer.base.clone(),
                binary: self.binary.clone(),
                code: status.code(),
            })
        }
    }
}
