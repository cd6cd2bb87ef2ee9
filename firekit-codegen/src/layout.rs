//! Where each generated artifact lands under the output directory.

use std::path::{Path, PathBuf};

use firekit_config::{AdapterConfig, OutputLayout};

pub const FUNCTION_DIR: &str = "function";
pub const SERVER_DIR: &str = "server";
/// Static asset segment used by the web frameworks integration.
pub const HOSTING_DIR: &str = "hosting";
/// Root of the generated function in the legacy layout.
pub const LEGACY_ROOT: &str = ".firebase";
pub const ENTRYPOINT_FILE: &str = "entrypoint.js";
pub const PACKAGE_JSON: &str = "package.json";

/// Import path of the server bundle, as seen from the function directory.
pub const SERVER_IMPORT: &str = "./../server/index.js";
/// Path from the entrypoint to the server bundle, handed to the manifest generator.
pub const MANIFEST_RELATIVE_PATH: &str = "../server";

/// Resolved artifact locations for one adapter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub out_dir: PathBuf,
    /// Client assets and prerendered pages
    pub static_dir: PathBuf,
    pub function_dir: PathBuf,
    pub server_dir: PathBuf,
    pub package_json: PathBuf,
    /// `main` field of the generated package.json, always `/`-separated
    pub main: String,
}

impl ArtifactPaths {
    /// Locations relative to the working directory.
    pub fn new(config: &AdapterConfig) -> Self {
        Self::rooted(config, Path::new(""))
    }

    /// Locations under `root`; an absolute `out_dir` ignores `root`.
    pub fn rooted(config: &AdapterConfig, root: &Path) -> Self {
        let out_dir = root.join(&config.out_dir);

        let prefix = match config.layout {
            OutputLayout::Standard => None,
            OutputLayout::Legacy => Some(LEGACY_ROOT),
        };
        let bundle_root = match prefix {
            Some(prefix) => out_dir.join(prefix),
            None => out_dir.clone(),
        };

        let mut static_dir = out_dir.clone();
        if config.web_framework {
            static_dir.push(HOSTING_DIR);
        }
        if !config.base_path.is_empty() {
            static_dir.push(&config.base_path);
        }

        let main = prefix
            .into_iter()
            .chain([FUNCTION_DIR, ENTRYPOINT_FILE])
            .collect::<Vec<_>>()
            .join("/");

        Self {
            static_dir,
            function_dir: bundle_root.join(FUNCTION_DIR),
            server_dir: bundle_root.join(SERVER_DIR),
            package_json: out_dir.join(PACKAGE_JSON),
            out_dir,
            main,
        }
    }

    pub fn entrypoint(&self) -> PathBuf {
        self.function_dir.join(ENTRYPOINT_FILE)
    }

    /// Path of `path` relative to the output directory, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.out_dir).unwrap_or(path)
    }
}
