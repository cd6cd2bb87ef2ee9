//! State threaded through the pipeline steps.

use std::path::{Path, PathBuf};

use firekit_config::AdapterConfig;

use crate::{ArtifactPaths, Builder, InstallOutcome, Installer};

/// Inputs and accumulated results of one adapter run.
pub struct AdaptContext<'a> {
    pub config: &'a AdapterConfig,
    pub paths: &'a ArtifactPaths,
    /// Directory holding the project's package.json
    pub project_dir: &'a Path,
    pub builder: &'a dyn Builder,
    pub installer: &'a dyn Installer,
    /// Files written so far, in order
    pub written: Vec<PathBuf>,
    pub install: InstallOutcome,
    /// Names of the steps that completed
    pub completed: Vec<&'static str>,
}

impl<'a> AdaptContext<'a> {
    pub fn new(
        config: &'a AdapterConfig,
        paths: &'a ArtifactPaths,
        project_dir: &'a Path,
        builder: &'a dyn Builder,
        installer: &'a dyn Installer,
    ) -> Self {
        Self {
            config,
            paths,
            project_dir,
            builder,
            installer,
            written: Vec::new(),
            install: InstallOutcome::Skipped,
            completed: Vec::new(),
        }
    }

    pub fn record(&mut self, files: impl IntoIterator<Item = PathBuf>) {
        self.written.extend(files);
    }

    pub fn into_outcome(self) -> AdaptOutcome {
        AdaptOutcome {
            out_dir: self.paths.out_dir.clone(),
            main: self.paths.main.clone(),
            written: self.written,
            install: self.install,
            steps: self.completed,
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptOutcome {
    pub out_dir: PathBuf,
    /// `main` of the generated package.json
    pub main: String,
    pub written: Vec<PathBuf>,
    pub install: InstallOutcome,
    pub steps: Vec<&'static str>,
}
