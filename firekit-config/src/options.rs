//! Raw, user-supplied options as they appear in `firekit.toml`.
//!
//! Every field is optional so the resolver can tell an explicit value
//! apart from a default; several exclusion rules depend on that.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::runtime::{InstallPolicy, NodeVersion, OutputLayout, RuntimeVersion};

/// Cloud Functions `HttpsOptions`, passed through verbatim in key order.
pub type FunctionOptions = IndexMap<String, serde_json::Value>;

/// Root of `firekit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// `[adapter]` options
    #[serde(default)]
    pub adapter: AdapterOptions,

    /// `[framework]` build output location
    #[serde(default)]
    pub framework: FrameworkOptions,

    /// `[install]` dependency installation
    #[serde(default)]
    pub install: InstallOptions,
}

/// The adapter's public options object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterOptions {
    /// Output directory (default `build`)
    pub out_dir: Option<PathBuf>,

    /// Name of the exported function (default `handler`)
    pub function_name: Option<String>,

    /// Cloud Functions generation (default `v2`)
    pub version: Option<RuntimeVersion>,

    /// Legacy boolean spelling of `version`
    pub v2: Option<bool>,

    /// Node.js engine pin (default `16`)
    pub node_version: Option<NodeVersion>,

    /// `HttpsOptions` for v2 functions
    pub function_options: Option<FunctionOptions>,

    /// Package for Firebase Hosting's web frameworks integration
    pub use_web_framework_beta: Option<bool>,

    /// Placement of the function bundle (default `standard`)
    pub layout: Option<OutputLayout>,

    /// The framework's `paths.base`
    pub base_path: Option<String>,
}

impl AdapterOptions {
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: RuntimeVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_node_version(mut self, node_version: NodeVersion) -> Self {
        self.node_version = Some(node_version);
        self
    }

    pub fn with_function_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.function_options
            .get_or_insert_with(FunctionOptions::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_web_framework_beta(mut self, enabled: bool) -> Self {
        self.use_web_framework_beta = Some(enabled);
        self
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// The runtime version the user asked for, from either spelling.
    pub fn explicit_runtime(&self) -> Option<RuntimeVersion> {
        self.version
            .or_else(|| self.v2.map(RuntimeVersion::from_v2_flag))
    }

    pub fn web_framework(&self) -> bool {
        self.use_web_framework_beta.unwrap_or(false)
    }
}

/// `[framework]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameworkOptions {
    /// Directory holding the framework's `client/`, `prerendered/` and `server/` output
    pub output: Option<PathBuf>,
}

/// `[install]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallOptions {
    pub policy: Option<InstallPolicy>,
    pub package_manager: Option<String>,
    pub args: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let settings: Settings = toml::from_str(
            r#"
            [adapter]
            out_dir = "dist"
            function_name = "ssr"
            version = "v2"
            node_version = "14"
            base_path = "/app"

            [adapter.function_options]
            region = "europe-west1"
            minInstances = 1

            [framework]
            output = "apps/web/.svelte-kit/output"

            [install]
            policy = "skip"
            package_manager = "pnpm"
            args = ["install", "--prod"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.adapter.out_dir, Some(PathBuf::from("dist")));
        assert_eq!(settings.adapter.version, Some(RuntimeVersion::V2));
        assert_eq!(settings.adapter.node_version, Some(NodeVersion::Node14));

        let options = settings.adapter.function_options.unwrap();
        let keys: Vec<_> = options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["region", "minInstances"]);

        assert_eq!(settings.install.policy, Some(InstallPolicy::Skip));
        assert_eq!(settings.install.package_manager.as_deref(), Some("pnpm"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = toml::from_str::<Settings>(
            r#"
            [adapter]
            outDir = "dist"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_runtime_from_legacy_flag() {
        let options = AdapterOptions {
            v2: Some(false),
            ..Default::default()
        };
        assert_eq!(options.explicit_runtime(), Some(RuntimeVersion::V1));
        assert_eq!(AdapterOptions::default().explicit_runtime(), None);
    }

    #[test]
    fn test_with_function_option_preserves_order() {
        let options = AdapterOptions::default()
            .with_function_option("memory", "1GiB")
            .with_function_option("concurrency", 80);

        let keys: Vec<_> = options
            .function_options
            .as_ref()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["memory", "concurrency"]);
    }
}
