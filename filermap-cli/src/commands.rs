//! Subcommand bodies. Each writes its result to `out` and reads settings
//! through an [`EnvSource`], so none of them touch stdout or the process
//! environment directly.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use filermap_common::aliases::{alternates_for, canonical_names};
use filermap_common::{
    check_filer_path, get_all_filers, get_components, get_filer_env_config, get_mc_path, EnvSource,
};
use serde::Serialize;
use tracing::info;

use crate::config::InitConfig;
use crate::init::{init_all_filers, InitReport};
use crate::mc::McClient;

fn print_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Initializer settings: the config file (or defaults) with flags on top.
pub fn init_config(
    config_path: Option<&PathBuf>,
    mc_binary: Option<String>,
    done_file: Option<PathBuf>,
    quiet: bool,
) -> anyhow::Result<InitConfig> {
    let mut config = match config_path {
        Some(path) => InitConfig::load(path)?,
        None => InitConfig::default(),
    };
    if let Some(bin) = mc_binary {
        config.mc_binary = bin;
    }
    if let Some(path) = done_file {
        config.done_file = path;
    }
    config.quiet |= quiet;
    config.validate()?;
    Ok(config)
}

/// Always succeeds once the config is valid; per-alias failures only show
/// up in the report.
pub fn init(env: &dyn EnvSource, config: &InitConfig) -> InitReport {
    let client = McClient::new(config.mc_binary.clone(), config.quiet);
    let report = init_all_filers(env, &client, &config.done_file);
    info!(
        attempted = report.attempted,
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        marker_written = report.marker_written,
        "Filer initialization finished"
    );
    report
}

pub fn resolve(env: &dyn EnvSource, path: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let mc_path = get_mc_path(env, path).with_context(|| format!("Cannot resolve {}", path))?;
    writeln!(out, "{}", mc_path)?;
    Ok(())
}

pub fn components(path: &str, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let components = get_components(path);
    if json {
        return print_json(out, &components);
    }
    writeln!(out, "filer:      {}", components.filer.as_deref().unwrap_or("-"))?;
    writeln!(out, "share:      {}", components.share.as_deref().unwrap_or("-"))?;
    writeln!(out, "object_key: {}", components.object_key.as_deref().unwrap_or("-"))?;
    Ok(())
}

/// Credentials are reported as set or unset, never echoed.
pub fn env_config(env: &dyn EnvSource, path: &str, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let config = get_filer_env_config(env, path).with_context(|| format!("Cannot configure {}", path))?;
    if json {
        let view = serde_json::json!({
            "url": config.url,
            "access_key_set": config.access_key.is_some(),
            "secret_key_set": config.secret_key.is_some(),
            "bucket_name": config.bucket_name,
            "object_key": config.object_key,
        });
        return print_json(out, &view);
    }
    let credentials = match (&config.access_key, &config.secret_key) {
        (Some(_), Some(_)) => "set",
        _ => "-",
    };
    writeln!(out, "url:         {}", config.url.as_deref().unwrap_or("-"))?;
    writeln!(out, "credentials: {}", credentials)?;
    writeln!(out, "bucket:      {}", config.bucket_name.as_deref().unwrap_or("-"))?;
    writeln!(out, "object_key:  {}", config.object_key.as_deref().unwrap_or("-"))?;
    Ok(())
}

pub fn check(path: &str, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", check_filer_path(path))?;
    Ok(())
}

pub fn list(env: &dyn EnvSource, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let summaries: Vec<_> = get_all_filers(env).iter().map(|f| f.summary()).collect();
    if json {
        return print_json(out, &summaries);
    }
    for s in &summaries {
        writeln!(
            out,
            "{}\t{}\taccess={}\tsecret={}",
            s.base,
            s.url.as_deref().unwrap_or("-"),
            if s.access_key_set { "set" } else { "unset" },
            if s.secret_key_set { "set" } else { "unset" },
        )?;
    }
    Ok(())
}

pub fn aliases(out: &mut impl Write) -> anyhow::Result<()> {
    for canonical in canonical_names() {
        let alternates = alternates_for(canonical).unwrap_or_default();
        writeln!(out, "{}\t{}", canonical, alternates.join(","))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const SECRET: &str = "wJalrXUtnFEMI-secret";
    const ACCESS: &str = "AKIAEXAMPLEACCESS";

    fn tax_env() -> BTreeMap<String, String> {
        [
            ("taxfilersvm_url", "http://minio.tax:9000"),
            ("taxfilersvm_access", ACCESS),
            ("taxfilersvm_secret", SECRET),
            ("taxfilersvm_docs", "bucket9"),
            ("fld4filersvm_url", "http://minio.fld4:9000"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn output(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_resolve_prints_mc_path() {
        let env = tax_env();
        let text = output(|out| resolve(&env, r"\\taxadmin\docs\report.pdf", out));
        assert_eq!(text, "taxfilersvm/bucket9/report.pdf\n");
    }

    #[test]
    fn test_resolve_fails_without_bucket() {
        let env = tax_env();
        let mut buf = Vec::new();
        let err = resolve(&env, "taxadmin/unmapped/report.pdf", &mut buf).unwrap_err();
        assert!(format!("{:#}", err).contains("Bucket for share not found."));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_env_config_text_hides_credentials() {
        let env = tax_env();
        let text = output(|out| env_config(&env, "taxadmin/docs/a/b.pdf", false, out));
        assert!(text.contains("http://minio.tax:9000"));
        assert!(text.contains("credentials: set"));
        assert!(text.contains("bucket9"));
        assert!(text.contains("a/b.pdf"));
        assert!(!text.contains(SECRET));
        assert!(!text.contains(ACCESS));
    }

    #[test]
    fn test_env_config_json_hides_credentials() {
        let env = tax_env();
        let text = output(|out| env_config(&env, "taxadmin/docs/a/b.pdf", true, out));
        assert!(!text.contains(SECRET));
        assert!(!text.contains(ACCESS));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["url"], "http://minio.tax:9000");
        assert_eq!(value["access_key_set"], true);
        assert_eq!(value["secret_key_set"], true);
        assert_eq!(value["bucket_name"], "bucket9");
        assert_eq!(value["object_key"], "a/b.pdf");
    }

    #[test]
    fn test_env_config_fails_on_missing_credentials() {
        let env = tax_env();
        let mut buf = Vec::new();
        let err = env_config(&env, "fld4filer/share", false, &mut buf).unwrap_err();
        assert!(format!("{:#}", err).contains("fld4filersvm_access"));
    }

    #[test]
    fn test_components_text_and_json() {
        let text = output(|out| components("/home/jovyan/filers/fld3file1/shareA/dir/obj.txt", false, out));
        assert_eq!(
            text,
            "filer:      fld3filersvm\nshare:      shareA\nobject_key: dir/obj.txt\n"
        );

        let json = output(|out| components("fld3file1", true, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["filer"], "fld3filersvm");
        assert!(value["share"].is_null());
        assert!(value["object_key"].is_null());
    }

    #[test]
    fn test_check_prints_bool() {
        assert_eq!(output(|out| check("//host/share", out)), "true\n");
    }

    #[test]
    fn test_list_redacts_credentials() {
        let env = tax_env();
        let text = output(|out| list(&env, false, out));
        assert!(text.contains("fld4filersvm\thttp://minio.fld4:9000\taccess=unset\tsecret=unset"));
        assert!(text.contains("taxfilersvm\thttp://minio.tax:9000\taccess=set\tsecret=set"));
        assert!(!text.contains(SECRET));

        let json = output(|out| list(&env, true, out));
        assert!(!json.contains(SECRET));
        assert!(!json.contains(ACCESS));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_aliases_lists_table() {
        let text = output(|out| aliases(out));
        assert_eq!(text.lines().count(), canonical_names().count());
        assert!(text.contains("taxfilersvm\ttaxfiler,taxadmin\n"));
    }

    #[test]
    fn test_init_config_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filermap.toml");
        std::fs::write(&path, "mc_binary = \"/usr/bin/mc\"\ndone_file = \"/run/a.done\"\n").unwrap();

        let config = init_config(Some(&path), None, Some(PathBuf::from("/run/b.done")), true).unwrap();
        assert_eq!(config.mc_binary, "/usr/bin/mc");
        assert_eq!(config.done_file, PathBuf::from("/run/b.done"));
        assert!(config.quiet);

        assert!(init_config(None, Some(String::new()), None, false).is_err());
    }

    #[test]
    fn test_init_without_filers_writes_marker() {
        let dir = tempfile::tempdir().unwrap();
        let config = InitConfig {
            mc_binary: "/nonexistent/mc".to_string(),
            done_file: dir.path().join("init.done"),
            quiet: true,
        };
        let env: BTreeMap<String, String> = BTreeMap::new();

        let report = init(&env, &config);

        assert_eq!(report.attempted, 0);
        assert!(report.marker_written);
        assert!(config.done_file.exists());
    }
}
