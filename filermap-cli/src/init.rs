use std::path::Path;

use filermap_common::{get_all_filers, EnvSource};
use tracing::{error, info, warn};

use crate::mc::AliasRegistrar;

pub const DEFAULT_DONE_FILE: &str = "/tmp/_filer_minio_client_init.done";
const DONE_MARKER: &[u8] = b"Done mc init.";

#[derive(Debug, Default)]
pub struct InitReport {
    pub attempted: usize,
    pub succeeded: Vec<String>,
    /// (alias, error message)
    pub failed: Vec<(String, String)>,
    pub marker_written: bool,
}

impl InitReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && self.marker_written
    }
}

/// Register every filer found in `env` as a storage-client alias, then
/// write the done marker.
///
/// Best effort throughout: a failing alias is logged and the loop moves
/// on, and the marker is written regardless. Nothing here returns an error;
/// the outcome is in the report.
pub fn init_all_filers(
    env: &dyn EnvSource,
    registrar: &dyn AliasRegistrar,
    done_file: &Path,
) -> InitReport {
    info!("Setting MinIO client alias for each filer");
    let filers = get_all_filers(env);
    info!(count = filers.len(), "Found filers to initialize");

    let mut report = InitReport {
        attempted: filers.len(),
        ..Default::default()
    };

    for filer in &filers {
        info!(alias = %filer.base, url = ?filer.url, "Adding filer");
        match registrar.set_alias(filer) {
            Ok(()) => {
                info!(alias = %filer.base, "Added filer");
                report.succeeded.push(filer.base.clone());
            }
            Err(e) => {
                warn!(alias = %filer.base, error = %e, "Failed to add filer");
                report.failed.push((filer.base.clone(), e.to_string()));
            }
        }
    }

    info!(path = %done_file.display(), "Creating MinIO client init done marker");
    match std::fs::write(done_file, DONE_MARKER) {
        Ok(()) => {
            report.marker_written = true;
            info!("Created done marker");
        }
        Err(e) => {
            error!(path = %done_file.display(), error = %e, "Failed to create done marker");
        }
    }

    report
}
