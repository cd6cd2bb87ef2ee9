//! Clean operation - remove the adapter output directory.

use std::path::Path;

use eyre::Result;
use firekit_codegen::{ArtifactPaths, Builder, FsBuilder};
use firekit_config::AdapterConfig;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    pub project_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Delete the configured output directory.
pub fn clean(config: &AdapterConfig, opts: CleanOptions) -> Result<CleanReport> {
    let out_dir = ArtifactPaths::rooted(config, opts.project_dir).out_dir;
    let existed = out_dir.exists();

    if existed && !opts.dry_run {
        FsBuilder::new(opts.project_dir.join(&config.framework_output)).rimraf(&out_dir)?;
        tracing::debug!(path = %out_dir.display(), "removed output directory");
    }

    Ok(CleanReport {
        out_dir,
        existed,
        dry_run: opts.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use firekit_config::{AdapterOptions, resolve};
    use tempfile::TempDir;

    use super::*;

    fn setup() -> (TempDir, AdapterConfig) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("build/function")).unwrap();
        fs::write(temp.path().join("build/package.json"), "{}").unwrap();
        (temp, resolve(&AdapterOptions::default()).unwrap())
    }

    #[test]
    fn test_clean_removes_output() {
        let (temp, config) = setup();
        let report = clean(
            &config,
            CleanOptions {
                project_dir: temp.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(report.existed);
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn test_dry_run_keeps_output() {
        let (temp, config) = setup();
        let report = clean(
            &config,
            CleanOptions {
                project_dir: temp.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert!(report.existed && report.dry_run);
        assert!(temp.path().join("build/package.json").exists());
    }

    #[test]
    fn test_missing_output() {
        let temp = TempDir::new().unwrap();
        let config = resolve(&AdapterOptions::default()).unwrap();
        let report = clean(
            &config,
            CleanOptions {
                project_dir: temp.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(!report.existed);
    }

    #[test]
    fn test_clean_removes_stray_file_at_out_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("build"), "not a directory").unwrap();
        let config = resolve(&AdapterOptions::default()).unwrap();

        let report = clean(
            &config,
            CleanOptions {
                project_dir: temp.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(report.existed);
        assert!(!temp.path().join("build").exists());
    }
}
