//! Starter `firekit.toml` written by `firekit init`.

use std::path::{Path, PathBuf};

use firekit_config::{CONFIG_FILE, NodeVersion, RuntimeVersion};
use firekit_core::{FileRules, GeneratedFile};

/// The firekit.toml configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirekitToml {
    pub out_dir: String,
    pub function_name: String,
    pub version: RuntimeVersion,
    pub node_version: NodeVersion,
    pub web_framework: bool,
}

impl Default for FirekitToml {
    fn default() -> Self {
        Self {
            out_dir: firekit_config::DEFAULT_OUT_DIR.to_string(),
            function_name: firekit_config::DEFAULT_FUNCTION_NAME.to_string(),
            version: RuntimeVersion::default(),
            node_version: NodeVersion::default(),
            web_framework: false,
        }
    }
}

impl FirekitToml {
    pub fn with_out_dir(mut self, out_dir: impl Into<String>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn with_version(mut self, version: RuntimeVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_node_version(mut self, node_version: NodeVersion) -> Self {
        self.node_version = node_version;
        self
    }

    pub fn with_web_framework(mut self, enabled: bool) -> Self {
        self.web_framework = enabled;
        self
    }

    fn render_adapter(&self) -> String {
        if self.web_framework {
            // Name, version and options are fixed by the web frameworks integration.
            return format!(
                "[adapter]\nout_dir = \"{}\"\nnode_version = \"{}\"\nuse_web_framework_beta = true\n",
                self.out_dir,
                self.node_version.as_str()
            );
        }

        let mut adapter = format!(
            "[adapter]\nout_dir = \"{}\"\nfunction_name = \"{}\"\nversion = \"{}\"\nnode_version = \"{}\"\n",
            self.out_dir,
            self.function_name,
            self.version,
            self.node_version.as_str()
        );
        if self.version == RuntimeVersion::V2 {
            adapter.push_str(
                "\n# Passed to onRequest() as HttpsOptions; concurrency defaults to 500.\n\
                 # [adapter.function_options]\n\
                 # memory = \"1GiB\"\n\
                 # region = \"europe-west1\"\n",
            );
        }
        adapter
    }
}

impl GeneratedFile for FirekitToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            r#"{}
[framework]
output = ".svelte-kit/output"

[install]
# best-effort | fail-fast | skip
policy = "best-effort"
package_manager = "npm"
"#,
            self.render_adapter()
        )
    }
}

#[cfg(test)]
mod tests {
    use firekit_config::{AdapterConfig, FirekitToml as ConfigFile, resolve_settings};

    use super::*;

    fn resolve_rendered(file: &FirekitToml) -> AdapterConfig {
        let settings = ConfigFile::parse_str(&file.render(), CONFIG_FILE).unwrap();
        resolve_settings(&settings).unwrap()
    }

    #[test]
    fn test_default_template_resolves_to_defaults() {
        let config = resolve_rendered(&FirekitToml::default());
        assert_eq!(config, firekit_config::resolve(&Default::default()).unwrap());
    }

    #[test]
    fn test_v1_template_has_no_function_options() {
        let file = FirekitToml::default()
            .with_version(RuntimeVersion::V1)
            .with_function_name("api");
        assert!(!file.render().contains("function_options"));

        let config = resolve_rendered(&file);
        assert_eq!(config.runtime, RuntimeVersion::V1);
        assert_eq!(config.function_name, "api");
    }

    #[test]
    fn test_web_framework_template_passes_rules() {
        let file = FirekitToml::default().with_web_framework(true);
        let config = resolve_rendered(&file);
        assert!(config.web_framework);
        assert_eq!(config.function_name, "handle");
    }

    #[test]
    fn test_written_once() {
        assert_eq!(FirekitToml::default().rules(), FileRules::create_once());
    }
}
