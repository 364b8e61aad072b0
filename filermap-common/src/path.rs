//! Filer path normalization and component extraction.
//!
//! Paths arrive in whatever shape the caller had at hand: UNC paths with
//! backslashes, paths under the notebook user's filer mount, or bare
//! `filer/share/key` strings. Normalization only strips known leading
//! markers; it is not path canonicalization.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::aliases::remap_filer_aliases;

/// Local directory under which filer shares are mounted.
pub const FILER_MOUNT_ROOT: &str = "/home/jovyan/filers/";

/// Leading-prefix rules, applied in this order. Each one strips at most
/// one match anchored at the start of the string.
fn prefix_rules() -> &'static [Regex; 4] {
    static RULES: OnceLock<[Regex; 4]> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            Regex::new(r"(?i)^[/.]*home/+").expect("valid home prefix regex"),
            Regex::new(r"(?i)^[/.]*jovyan/+").expect("valid jovyan prefix regex"),
            Regex::new(r"(?i)^[/.]*filers?/+").expect("valid filer prefix regex"),
            Regex::new(r"^[/.]*").expect("valid leading separator regex"),
        ]
    })
}

/// Remove the leading mount markers from a filer path.
///
/// Backslashes become forward slashes, then `home/`, `jovyan/` and
/// `filer/` (or `filers/`) segments are stripped in that order, each with
/// any run of `/` and `.` in front of it, and finally any remaining leading
/// `/` and `.` characters. Everything after the prefix is left untouched.
pub fn process_filer_path(path: &str) -> String {
    let mut path = path.replace('\\', "/");
    for rule in prefix_rules() {
        path = rule.replace(&path, "").into_owned();
    }
    path
}

/// Filer, share and object key of a path, populated left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathComponents {
    pub filer: Option<String>,
    pub share: Option<String>,
    pub object_key: Option<String>,
}

impl PathComponents {
    pub fn new(filer: Option<&str>, share: Option<&str>, object_key: Option<&str>) -> Self {
        Self {
            filer: filer.map(str::to_string),
            share: share.map(str::to_string),
            object_key: object_key.map(str::to_string),
        }
    }
}

/// Split a filer path into its filer, share and object key.
///
/// The filer segment goes through [`remap_filer_aliases`]; the share is
/// kept verbatim; the object key is the remainder with its leading slashes
/// trimmed (it keeps internal slashes and may be empty). A path that is
/// empty after normalization has no components at all.
pub fn get_components(path: &str) -> PathComponents {
    let path = process_filer_path(path);
    if path.is_empty() {
        return PathComponents::default();
    }

    let mut parts = path.splitn(3, '/');
    let filer = parts.next().map(remap_filer_aliases);
    let share = parts.next().map(str::to_string);
    let object_key = parts.next().map(|key| key.trim_start_matches('/').to_string());

    PathComponents {
        filer,
        share,
        object_key,
    }
}

/// Whether `path` points at a filer rather than at local storage.
///
/// UNC paths (`//host/...` or `\\host\...`) always do. Anything else is made
/// absolute against the current working directory and must fall under
/// [`FILER_MOUNT_ROOT`], so the answer for a relative path depends on where
/// the process is running.
pub fn check_filer_path(path: &str) -> bool {
    check_filer_path_with(path, std::env::current_dir())
}

/// [`check_filer_path`] against the outcome of reading the working
/// directory. Without a working directory only UNC and absolute paths can
/// be placed; relative ones are reported as local.
pub fn check_filer_path_with(path: &str, cwd: io::Result<PathBuf>) -> bool {
    let path = path.replace('\\', "/");
    if is_unc(&path) {
        return true;
    }
    match cwd {
        Ok(cwd) => check_filer_path_in(&path, &cwd),
        Err(e) if path.starts_with('/') => {
            warn!(error = %e, "Current directory unavailable");
            check_filer_path_in(&path, Path::new("/"))
        }
        Err(e) => {
            warn!(path = %path, error = %e, "Cannot resolve relative path without a current directory");
            false
        }
    }
}

/// [`check_filer_path`] with an explicit working directory.
pub fn check_filer_path_in(path: &str, cwd: &Path) -> bool {
    let path = path.replace('\\', "/");
    if is_unc(&path) {
        return true;
    }
    absolute_path(&path, cwd).starts_with(FILER_MOUNT_ROOT)
}

fn is_unc(path: &str) -> bool {
    path.starts_with("//")
}

/// Lexical absolute path: joins with `cwd`, drops `.` and empty segments and
/// resolves `..` without consulting the filesystem. Never ends with `/`
/// unless it is the root.
fn absolute_path(path: &str, cwd: &Path) -> String {
    let joined = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{}", cwd.to_string_lossy().replace('\\', "/"), path)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}
