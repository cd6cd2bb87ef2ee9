//! Layered option resolution.
//!
//! Resolution runs in a fixed order: exclusion rules, built-in defaults,
//! explicit overrides, then mode-specific post-processing. The result is an
//! [`AdapterConfig`] that is never mutated afterwards.

use std::path::{Component, Path, PathBuf};

use firekit_core::validate_js_identifier;

use crate::{
    AdapterOptions, Error, FunctionOptions, InstallOptions, Result, Settings,
    rules,
    runtime::{InstallPolicy, NodeVersion, OutputLayout, RuntimeVersion},
};

pub const DEFAULT_OUT_DIR: &str = "build";
pub const DEFAULT_FUNCTION_NAME: &str = "handler";
/// Export name Firebase Hosting's web frameworks integration looks for.
pub const WEB_FRAMEWORK_FUNCTION_NAME: &str = "handle";
pub const DEFAULT_CONCURRENCY: u64 = 500;
pub const DEFAULT_FRAMEWORK_OUTPUT: &str = ".svelte-kit/output";
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Fully resolved, internally consistent adapter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    pub out_dir: PathBuf,
    pub runtime: RuntimeVersion,
    pub function_name: String,
    pub node_version: NodeVersion,
    /// Present only for v2 functions outside web framework mode
    pub function_options: Option<FunctionOptions>,
    pub web_framework: bool,
    pub layout: OutputLayout,
    /// `paths.base` without leading or trailing slashes
    pub base_path: String,
    pub framework_output: PathBuf,
    pub install: InstallConfig,
}

/// How dependencies get installed into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub policy: InstallPolicy,
    pub package_manager: String,
    pub args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            policy: InstallPolicy::default(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            args: vec!["install".to_string()],
        }
    }
}

impl InstallConfig {
    fn overlay(options: &InstallOptions) -> Self {
        let mut config = Self::default();
        if let Some(policy) = options.policy {
            config.policy = policy;
        }
        if let Some(pm) = &options.package_manager {
            config.package_manager = pm.clone();
        }
        if let Some(args) = &options.args {
            config.args = args.clone();
        }
        config
    }
}

impl AdapterConfig {
    /// Built-in defaults, before any option or mode rule is applied.
    fn base() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            runtime: RuntimeVersion::default(),
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            node_version: NodeVersion::default(),
            function_options: None,
            web_framework: false,
            layout: OutputLayout::default(),
            base_path: String::new(),
            framework_output: PathBuf::from(DEFAULT_FRAMEWORK_OUTPUT),
            install: InstallConfig::default(),
        }
    }
}

/// Resolve the `[adapter]` options alone, with default framework and install settings.
pub fn resolve(options: &AdapterOptions) -> Result<AdapterConfig> {
    resolve_settings(&Settings {
        adapter: options.clone(),
        ..Default::default()
    })
}

/// Resolve a whole `firekit.toml`.
pub fn resolve_settings(settings: &Settings) -> Result<AdapterConfig> {
    let options = &settings.adapter;
    rules::check(options)?;

    // Defaults first, then every explicit field.
    let mut config = AdapterConfig::base();
    if let Some(out_dir) = &options.out_dir {
        config.out_dir = out_dir.clone();
    }
    if let Some(runtime) = options.explicit_runtime() {
        config.runtime = runtime;
    }
    if let Some(name) = &options.function_name {
        if let Some(reason) = validate_js_identifier(name) {
            return Err(Box::new(Error::InvalidFunctionName {
                name: name.clone(),
                reason,
            }));
        }
        config.function_name = name.clone();
    }
    if let Some(node_version) = options.node_version {
        config.node_version = node_version;
    }
    if let Some(layout) = options.layout {
        config.layout = layout;
    }
    if let Some(base) = &options.base_path {
        config.base_path = base.trim_matches('/').to_string();
    }
    if let Some(output) = &settings.framework.output {
        config.framework_output = output.clone();
    }
    if contains(&config.out_dir, &config.framework_output) {
        return Err(Box::new(Error::Configuration {
            rule: "out-dir-contains-framework-output",
            message: "out_dir cannot contain the framework output",
            hint: "out_dir is cleared before the framework output is copied; pick a sibling such as \"build\"",
        }));
    }
    config.web_framework = options.web_framework();
    config.install = InstallConfig::overlay(&settings.install);

    // Mode-specific final pass.
    config.function_options = match (config.web_framework, config.runtime) {
        (true, _) | (false, RuntimeVersion::V1) => None,
        (false, RuntimeVersion::V2) => Some(with_default_concurrency(
            options.function_options.as_ref(),
        )),
    };
    if config.web_framework {
        config.function_name = WEB_FRAMEWORK_FUNCTION_NAME.to_string();
    }

    Ok(config)
}

/// Whether `dir` is `path` or one of its ancestors, ignoring `.` components.
fn contains(dir: &Path, path: &Path) -> bool {
    let lexical = |p: &Path| -> PathBuf {
        p.components().filter(|c| *c != Component::CurDir).collect()
    };
    lexical(path).starts_with(lexical(dir))
}

/// Put the default concurrency underneath user options; user values win
/// and keep the default's position.
fn with_default_concurrency(user: Option<&FunctionOptions>) -> FunctionOptions {
    let mut merged = FunctionOptions::new();
    merged.insert("concurrency".to_string(), DEFAULT_CONCURRENCY.into());
    if let Some(user) = user {
        for (key, value) in user {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

impl AdapterConfig {
    /// JSON form of the function options, as embedded in the entrypoint.
    pub fn function_options_json(&self) -> Option<String> {
        self.function_options.as_ref().map(|options| {
            let object: serde_json::Map<String, serde_json::Value> =
                options.clone().into_iter().collect();
            serde_json::Value::Object(object).to_string()
        })
    }
}
