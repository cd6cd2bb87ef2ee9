//! Adapt operation - package the framework output for Cloud Functions.

use std::path::Path;

use eyre::{Context, Result};
use firekit_codegen::{Adapter, Builder, FsBuilder};
use firekit_config::AdapterConfig;

use crate::reports::{AdaptReport, AdaptResult};

/// Options for the adapt operation.
pub struct AdaptOptions<'a> {
    /// Directory holding package.json and the framework output.
    pub project_dir: &'a Path,
    /// Render the generated files instead of writing them.
    pub dry_run: bool,
}

/// Execute the adapt operation against the framework output on disk.
pub fn adapt(config: AdapterConfig, opts: AdaptOptions) -> Result<AdaptReport> {
    let builder = FsBuilder::new(opts.project_dir.join(&config.framework_output));
    run(Adapter::new(config, opts.project_dir), &builder, opts.dry_run)
}

/// Run `adapter` with an explicit builder.
pub fn run(adapter: Adapter, builder: &dyn Builder, dry_run: bool) -> Result<AdaptReport> {
    let config = adapter.config();
    let function_name = config.function_name.clone();
    let target = if config.web_framework {
        "web frameworks".to_string()
    } else {
        config.runtime.to_string()
    };
    let out_dir = adapter.paths().out_dir.clone();

    let result = if dry_run {
        let manifest = builder
            .generate_manifest(&firekit_codegen::ManifestOptions {
                relative_path: firekit_codegen::MANIFEST_RELATIVE_PATH.to_string(),
                format: firekit_codegen::ModuleFormat::Esm,
            })
            .wrap_err("Failed to read the server manifest")?;
        AdaptResult::Preview {
            files: adapter.preview(&manifest)?,
        }
    } else {
        let outcome = adapter.adapt(builder).wrap_err("Adapter failed")?;
        let paths = adapter.paths();
        let (generated, copied): (Vec<_>, Vec<_>) = outcome
            .written
            .iter()
            .partition(|path| path.starts_with(&paths.function_dir) || **path == paths.package_json);

        AdaptResult::Written {
            generated: generated
                .into_iter()
                .map(|path| paths.relative(path).to_string_lossy().replace('\\', "/"))
                .collect(),
            copied: copied.len(),
            install: outcome.install,
        }
    };

    Ok(AdaptReport {
        out_dir,
        function_name,
        target,
        result,
    })
}

#[cfg(test)]
mod tests {
    use firekit_codegen::{
        InstallOutcome,
        testing::{RecordingInstaller, write_project_fixture},
    };
    use firekit_config::{AdapterOptions, resolve};
    use tempfile::TempDir;

    use super::*;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        write_project_fixture(temp.path()).unwrap();
        temp
    }

    fn adapter(root: &Path, options: AdapterOptions) -> (Adapter, FsBuilder) {
        let config = resolve(&options).unwrap();
        let builder = FsBuilder::new(root.join(&config.framework_output));
        let adapter = Adapter::new(config, root).with_installer(RecordingInstaller::succeeding());
        (adapter, builder)
    }

    #[test]
    fn test_adapt_report() {
        let temp = project();
        let (adapter, builder) = adapter(temp.path(), AdapterOptions::default());

        let report = run(adapter, &builder, false).unwrap();

        assert_eq!(report.function_name, "handler");
        assert_eq!(report.target, "v2");
        match report.result {
            AdaptResult::Written {
                generated,
                copied,
                install,
            } => {
                assert_eq!(
                    generated,
                    [
                        "function/function.js",
                        "function/_tslib.js",
                        "function/entrypoint.js",
                        "package.json"
                    ]
                );
                // 2 client, 2 prerendered, 3 server
                assert_eq!(copied, 7);
                assert_eq!(install, InstallOutcome::Succeeded);
            }
            other => panic!("expected written result, got {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = project();
        let (adapter, builder) =
            adapter(temp.path(), AdapterOptions::default().with_web_framework_beta(true));

        let report = run(adapter, &builder, true).unwrap();

        assert_eq!(report.target, "web frameworks");
        assert_eq!(report.function_name, "handle");
        match report.result {
            AdaptResult::Preview { files } => {
                assert_eq!(files.len(), 4);
                assert!(files[2].content.contains("import('../server/nodes/0.js')"));
            }
            other => panic!("expected preview, got {other:?}"),
        }
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn test_missing_output_reports_context() {
        let temp = TempDir::new().unwrap();
        let (adapter, builder) = adapter(temp.path(), AdapterOptions::default());

        let err = run(adapter, &builder, false).unwrap_err();
        assert!(format!("{:#}", err).contains("build the app"));
    }
}
