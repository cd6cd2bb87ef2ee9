//! Check operation - validate and resolve firekit.toml.

use firekit_config::{AdapterConfig, FirekitToml};

use crate::reports::CheckReport;

/// Summarize a configuration that resolved successfully.
pub fn check(file: &FirekitToml, config: &AdapterConfig) -> CheckReport {
    let mut warnings = Vec::new();
    let adapter = &file.settings().adapter;
    if adapter.version.is_some() && adapter.v2.is_some() {
        warnings.push("both `version` and `v2` are set; `version` wins".to_string());
    }
    if config.web_framework && adapter.node_version.is_some() {
        warnings.push("`node_version` is not written to package.json in web frameworks mode".to_string());
    }

    let mut settings = vec![
        ("out_dir", config.out_dir.display().to_string()),
        ("function_name", config.function_name.clone()),
        ("runtime", config.runtime.to_string()),
    ];
    if !config.web_framework {
        settings.push(("node_version", config.node_version.as_str().to_string()));
    }
    if let Some(options) = config.function_options_json() {
        settings.push(("function_options", options));
    }
    settings.push(("web_framework", config.web_framework.to_string()));
    settings.push(("layout", config.layout.to_string()));
    if !config.base_path.is_empty() {
        settings.push(("base_path", config.base_path.clone()));
    }
    settings.push(("framework_output", config.framework_output.display().to_string()));
    settings.push((
        "install",
        format!("{} ({})", config.install.policy, config.install.package_manager),
    ));

    CheckReport {
        config_path: (!file.is_default()).then(|| file.path().to_path_buf()),
        settings,
        warnings,
    }
}
