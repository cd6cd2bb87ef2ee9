//! Resolution of whole firekit.toml files.

use std::path::PathBuf;

use firekit_config::{
    AdapterConfig, FirekitToml, InstallPolicy, NodeVersion, OutputLayout, RuntimeVersion,
    resolve_settings,
};
use serde_json::json;

fn resolve_str(content: &str) -> firekit_config::Result<AdapterConfig> {
    resolve_settings(&FirekitToml::parse_str(content, "firekit.toml")?)
}

fn rule(content: &str) -> Option<&'static str> {
    resolve_str(content).err().and_then(|e| e.rule())
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = resolve_str("").unwrap();

    assert_eq!(config.out_dir, PathBuf::from("build"));
    assert_eq!(config.function_name, "handler");
    assert_eq!(config.runtime, RuntimeVersion::V2);
    assert_eq!(config.node_version, NodeVersion::Node16);
    assert_eq!(config.layout, OutputLayout::Standard);
    assert_eq!(config.install.policy, InstallPolicy::BestEffort);
    assert_eq!(config.install.args, ["install"]);
    assert_eq!(config.function_options_json().as_deref(), Some(r#"{"concurrency":500}"#));
}

#[test]
fn test_v1_never_carries_function_options() {
    for content in ["[adapter]\nversion = \"v1\"\n", "[adapter]\nv2 = false\n"] {
        let config = resolve_str(content).unwrap();
        assert_eq!(config.runtime, RuntimeVersion::V1);
        assert!(config.function_options.is_none());
    }
}

#[test]
fn test_v1_with_function_options_is_rejected() {
    let content = "[adapter]\nversion = \"v1\"\n\n[adapter.function_options]\nmemory = \"1GiB\"\n";
    assert_eq!(rule(content), Some("v1-function-options"));
}

#[test]
fn test_web_framework_conflicts_are_rejected() {
    let cases = [
        ("function_name = \"api\"", "web-framework-function-name"),
        ("version = \"v2\"", "web-framework-version"),
        ("v2 = true", "web-framework-version"),
    ];
    for (line, expected) in cases {
        let content = format!("[adapter]\nuse_web_framework_beta = true\n{}\n", line);
        assert_eq!(rule(&content), Some(expected), "{}", line);
    }

    let content = "[adapter]\nuse_web_framework_beta = true\n\n[adapter.function_options]\nregion = \"us-east1\"\n";
    assert_eq!(rule(content), Some("web-framework-function-options"));
}

#[test]
fn test_web_framework_mode() {
    let config = resolve_str("[adapter]\nuse_web_framework_beta = true\n").unwrap();

    assert!(config.web_framework);
    assert_eq!(config.function_name, "handle");
    assert!(config.function_options.is_none());
}

#[test]
fn test_user_options_keep_order_and_override_concurrency() {
    let config = resolve_str(
        "[adapter.function_options]\nregion = \"europe-west1\"\nconcurrency = 80\nminInstances = 1\n",
    )
    .unwrap();

    let options = config.function_options.unwrap();
    let keys: Vec<&str> = options.keys().map(String::as_str).collect();
    assert_eq!(keys, ["concurrency", "region", "minInstances"]);
    assert_eq!(options["concurrency"], json!(80));
}

#[test]
fn test_install_and_framework_tables() {
    let config = resolve_str(
        "[framework]\noutput = \"web/.svelte-kit/output\"\n\n[install]\npolicy = \"skip\"\npackage_manager = \"pnpm\"\n",
    )
    .unwrap();

    assert_eq!(config.framework_output, PathBuf::from("web/.svelte-kit/output"));
    assert_eq!(config.install.policy, InstallPolicy::Skip);
    assert_eq!(config.install.package_manager, "pnpm");
}

#[test]
fn test_unknown_key_is_a_parse_error() {
    let err = resolve_str("[adapter]\nfunctionName = \"api\"\n").unwrap_err();
    assert!(err.rule().is_none());
    assert!(!err.is_configuration());
}

#[test]
fn test_invalid_function_name() {
    let err = resolve_str("[adapter]\nfunction_name = \"my-handler\"\n").unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("my-handler"));
}

#[test]
fn test_out_dir_that_would_clear_the_project_is_rejected() {
    for dir in [".", "..", "../sibling", "/"] {
        let content = format!("[adapter]\nout_dir = \"{dir}\"\n");
        assert_eq!(rule(&content), Some("out-dir-outside-project"), "{dir}");
    }
    assert_eq!(
        rule("[adapter]\nout_dir = \".svelte-kit\"\n"),
        Some("out-dir-contains-framework-output")
    );
    assert_eq!(rule("[adapter]\nout_dir = \"dist/functions\"\n"), None);
}
