//! Resolution of network-filer paths into object-storage coordinates.
//!
//! A filer path such as `\\fld3file1\shareA\dir\obj.txt` or
//! `/home/jovyan/filers/fld3file1/shareA/dir/obj.txt` is reduced to its
//! filer, share and object key, the filer hostname is mapped onto its
//! canonical storage alias, and the alias is combined with per-filer
//! settings read from the environment.

pub mod aliases;
pub mod config;
pub mod env;
pub mod error;
pub mod path;

pub use aliases::{remap_filer_aliases, FILER_ALIASES};
pub use config::{get_all_filers, get_filer_env_config, get_mc_path, FilerConfig, FilerEnvConfig};
pub use env::{EnvSource, ProcessEnv};
pub use error::{FilerError, Result};
pub use path::{check_filer_path, get_components, process_filer_path, PathComponents};
