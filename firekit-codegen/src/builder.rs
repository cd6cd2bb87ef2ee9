//! The framework-side collaborator the adapter drives.
//!
//! The adapter never reaches into the framework's build state directly; it
//! asks a [`Builder`] to remove, create and copy directories, to emit the
//! framework's client, prerendered and server trees, and to render the
//! server manifest.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use eyre::Result;

/// Capability exposed by the framework's build step.
pub trait Builder {
    /// Recursively delete a path. Missing paths are not an error.
    fn rimraf(&self, path: &Path) -> Result<()>;

    /// Create a directory and its parents.
    fn mkdirp(&self, path: &Path) -> Result<()>;

    /// Copy a file or directory tree, returning the files written.
    fn copy(&self, from: &Path, to: &Path, options: &CopyOptions) -> Result<Vec<PathBuf>>;

    /// Write the compiled client/static assets into `dest`.
    fn write_client(&self, dest: &Path) -> Result<Vec<PathBuf>>;

    /// Write prerendered pages into `dest`.
    fn write_prerendered(&self, dest: &Path) -> Result<Vec<PathBuf>>;

    /// Write the server runtime bundle into `dest`.
    fn write_server(&self, dest: &Path) -> Result<Vec<PathBuf>>;

    /// Render the server manifest as a JavaScript expression.
    fn generate_manifest(&self, options: &ManifestOptions) -> Result<String>;

    /// Logger for progress messages.
    fn log(&self) -> &dyn Log;
}

/// Structured progress logger with the framework's two levels.
pub trait Log {
    /// Low-importance progress detail.
    fn minor(&self, message: &str);

    /// A step the user should see.
    fn info(&self, message: &str);

    /// Something went wrong but the run continues.
    fn warn(&self, message: &str);
}

/// [`Log`] implementation that forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Log for TracingLog {
    fn minor(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Options for [`Builder::copy`].
#[derive(Default)]
pub struct CopyOptions {
    /// Keep an entry only if this returns true for its file name
    pub filter: Option<Box<dyn Fn(&str) -> bool>>,
    /// Textual replacements applied to every copied file
    pub replace: Vec<(String, String)>,
}

impl CopyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Fn(&str) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn replace(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.replace.push((from.into(), to.into()));
        self
    }

    /// Whether an entry with this file name should be copied.
    pub fn accepts(&self, name: &str) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(name))
    }

    /// Apply the replacements to file content.
    pub fn apply(&self, content: &str) -> String {
        self.replace
            .iter()
            .fold(content.to_string(), |acc, (from, to)| acc.replace(from, to))
    }
}

impl fmt::Debug for CopyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOptions")
            .field("filter", &self.filter.is_some())
            .field("replace", &self.replace)
            .finish()
    }
}

/// Module system used for the generated manifest's lazy imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFormat {
    Esm,
    Cjs,
}

/// Options for [`Builder::generate_manifest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    /// Path from the importing module to the server bundle
    pub relative_path: String,
    pub format: ModuleFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_options_default_accepts_everything() {
        let options = CopyOptions::new();
        assert!(options.accepts("index.js"));
        assert_eq!(options.apply("0SERVER"), "0SERVER");
    }

    #[test]
    fn test_copy_options_filter_and_replace() {
        let options = CopyOptions::new()
            .filter(|name| name.ends_with(".js"))
            .replace("0SERVER", "./server/index.js")
            .replace("ENV", "production");

        assert!(options.accepts("function.js"));
        assert!(!options.accepts("function.js.map"));
        assert_eq!(
            options.apply("import '0SERVER'; // ENV"),
            "import './server/index.js'; // production"
        );
    }
}
