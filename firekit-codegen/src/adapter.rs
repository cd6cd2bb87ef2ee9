//! The adapter: a resolved configuration bound to a project directory.

use std::path::PathBuf;

use eyre::Result;
use firekit_config::AdapterConfig;
use firekit_core::GeneratedFile;

use crate::{
    ArtifactPaths, Builder, Installer, ProcessInstaller,
    files::{Entrypoint, PackageJson, SupportFile},
    pipeline::{AdaptContext, AdaptOutcome, Pipeline},
};

/// A file that would be written, as produced by [`Adapter::preview`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory, `/`-separated
    pub path: String,
    pub content: String,
}

/// Runs the artifact pipeline for one project.
pub struct Adapter {
    config: AdapterConfig,
    paths: ArtifactPaths,
    project_dir: PathBuf,
    installer: Box<dyn Installer>,
}

impl Adapter {
    /// `project_dir` holds the project's package.json; a relative `out_dir`
    /// is resolved against it.
    pub fn new(config: AdapterConfig, project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let paths = ArtifactPaths::rooted(&config, &project_dir);
        Self {
            config,
            paths,
            project_dir,
            installer: Box::new(ProcessInstaller),
        }
    }

    /// Replace the installer (the default spawns the package manager).
    pub fn with_installer(mut self, installer: impl Installer + 'static) -> Self {
        self.installer = Box::new(installer);
        self
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// Run the full pipeline.
    pub fn adapt(&self, builder: &dyn Builder) -> Result<AdaptOutcome> {
        self.run(&Pipeline::standard(), builder)
    }

    /// Run a custom pipeline with this adapter's inputs.
    pub fn run(&self, pipeline: &Pipeline, builder: &dyn Builder) -> Result<AdaptOutcome> {
        tracing::debug!(out_dir = %self.paths.out_dir.display(), "adapting");
        let ctx = AdaptContext::new(
            &self.config,
            &self.paths,
            &self.project_dir,
            builder,
            self.installer.as_ref(),
        );
        pipeline.run(ctx)
    }

    /// Render the generated files without writing anything.
    ///
    /// Reads the project's package.json. Copied trees (assets, server
    /// bundle) are not part of the preview.
    pub fn preview(&self, manifest: &str) -> Result<Vec<PreviewFile>> {
        let mut files: Vec<(PathBuf, String)> = SupportFile::ALL
            .iter()
            .map(|file| (file.path(&self.paths.function_dir), file.render()))
            .collect();

        let entrypoint = Entrypoint::new(&self.config, manifest);
        files.push((entrypoint.path(&self.paths.function_dir), entrypoint.render()));

        let package = PackageJson::new(
            PackageJson::read(&self.project_dir)?,
            &self.config,
            self.paths.main.as_str(),
        );
        files.push((package.path(&self.paths.out_dir), package.render()));

        Ok(files
            .into_iter()
            .map(|(path, content)| PreviewFile {
                path: self.paths.relative(&path).to_string_lossy().replace('\\', "/"),
                content,
            })
            .collect())
    }
}
