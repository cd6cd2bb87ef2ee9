//! Production `package.json` derived from the project's own.
//!
//! The project descriptor is overlaid key by key: keys that already exist
//! keep their position, new keys are appended. `devDependencies` is dropped
//! because the functions builder cannot reconcile overlapping dev and prod
//! dependency trees. The request shim loads `@sveltejs/kit` at runtime, so a
//! dev-only kit dependency is carried over into `dependencies` first.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};
use firekit_config::{AdapterConfig, NodeVersion};
use firekit_core::GeneratedFile;
use serde_json::{Map, Value, json};

use crate::layout::{HOSTING_DIR, PACKAGE_JSON};

pub const FIREBASE_FUNCTIONS: &str = "firebase-functions";
pub const FIREBASE_FUNCTIONS_VERSION: &str = "^4.0.1";
/// Framework package the request shim imports its polyfills from.
pub const SVELTEKIT: &str = "@sveltejs/kit";
/// Build script installed in web frameworks mode; the bundle is already built.
pub const NOOP_BUILD_SCRIPT: &str = "true";

/// The transformed descriptor written to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageJson {
    source: Map<String, Value>,
    main: String,
    node_version: NodeVersion,
    web_framework: bool,
}

impl PackageJson {
    /// Parse the project's descriptor.
    pub fn parse(content: &str) -> Result<Map<String, Value>> {
        match serde_json::from_str(content).wrap_err("package.json is not valid JSON")? {
            Value::Object(map) => Ok(map),
            _ => bail!("package.json must contain a JSON object"),
        }
    }

    /// Read and parse `<project_dir>/package.json`.
    pub fn read(project_dir: &Path) -> Result<Map<String, Value>> {
        let path = project_dir.join(PACKAGE_JSON);
        let content = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("in '{}'", path.display()))
    }

    pub fn new(source: Map<String, Value>, config: &AdapterConfig, main: impl Into<String>) -> Self {
        Self {
            source,
            main: main.into(),
            node_version: config.node_version,
            web_framework: config.web_framework,
        }
    }

    /// Apply the production overrides.
    pub fn transform(&self) -> Map<String, Value> {
        let mut package = self.source.clone();

        let mut dependencies = match package.get("dependencies") {
            Some(Value::Object(deps)) => deps.clone(),
            _ => Map::new(),
        };
        if !dependencies.contains_key(SVELTEKIT) {
            if let Some(kit) = package
                .get("devDependencies")
                .and_then(|dev| dev.get(SVELTEKIT))
            {
                dependencies.insert(SVELTEKIT.to_string(), kit.clone());
            }
        }
        if self.web_framework {
            dependencies.shift_remove(FIREBASE_FUNCTIONS);
        } else {
            dependencies.insert(FIREBASE_FUNCTIONS.to_string(), json!(FIREBASE_FUNCTIONS_VERSION));
        }

        package.insert("dependencies".to_string(), Value::Object(dependencies));
        package.insert("main".to_string(), json!(self.main));
        if self.web_framework {
            package.shift_remove("engines");
        } else {
            package.insert("engines".to_string(), json!({ "node": self.node_version.as_str() }));
        }
        package.insert("type".to_string(), json!("module"));
        package.shift_remove("devDependencies");

        if self.web_framework {
            merge_object(&mut package, "directories", "serve", json!(HOSTING_DIR));
            merge_object(&mut package, "scripts", "build", json!(NOOP_BUILD_SCRIPT));
        }

        package
    }
}

/// Set `package[object][key]`, keeping the object's other entries.
fn merge_object(package: &mut Map<String, Value>, object: &str, key: &str, value: Value) {
    let entry = package
        .entry(object.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(map) = entry {
        map.insert(key.to_string(), value);
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(PACKAGE_JSON)
    }

    /// Two-space indented JSON without a trailing newline.
    fn render(&self) -> String {
        format!("{:#}", Value::Object(self.transform()))
    }
}

#[cfg(test)]
mod tests {
    use firekit_config::{AdapterOptions, resolve};

    use super::*;

    const SOURCE: &str = r#"{
        "name": "app",
        "version": "0.0.1",
        "scripts": { "build": "vite build" },
        "devDependencies": { "@sveltejs/kit": "^1.5.0", "vite": "^4.0.0" },
        "dependencies": { "cookie": "^0.5.0" },
        "type": "commonjs"
    }"#;

    fn transform(options: AdapterOptions) -> Map<String, Value> {
        let config = resolve(&options).unwrap();
        PackageJson::new(PackageJson::parse(SOURCE).unwrap(), &config, "function/entrypoint.js")
            .transform()
    }

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_standard_transform() {
        let package = transform(AdapterOptions::default());

        assert_eq!(
            keys(&package),
            ["name", "version", "scripts", "dependencies", "type", "main", "engines"]
        );
        assert_eq!(
            package["dependencies"],
            json!({
                "cookie": "^0.5.0",
                "@sveltejs/kit": "^1.5.0",
                "firebase-functions": "^4.0.1"
            })
        );
        assert_eq!(package["main"], json!("function/entrypoint.js"));
        assert_eq!(package["engines"], json!({ "node": "16" }));
        assert_eq!(package["type"], json!("module"));
        assert_eq!(package["scripts"], json!({ "build": "vite build" }));
    }

    #[test]
    fn test_node_version_pin() {
        let package = transform(AdapterOptions::default().with_node_version(NodeVersion::Node14));
        assert_eq!(package["engines"], json!({ "node": "14" }));
    }

    #[test]
    fn test_web_framework_transform() {
        let package = transform(AdapterOptions::default().with_web_framework_beta(true));

        assert!(!package.contains_key("engines"));
        assert!(!package.contains_key("devDependencies"));
        assert_eq!(
            package["dependencies"],
            json!({ "cookie": "^0.5.0", "@sveltejs/kit": "^1.5.0" })
        );
        assert_eq!(package["directories"], json!({ "serve": "hosting" }));
        assert_eq!(package["scripts"], json!({ "build": "true" }));
    }

    #[test]
    fn test_missing_dependencies() {
        let config = resolve(&AdapterOptions::default()).unwrap();
        let source = PackageJson::parse(r#"{"name":"bare"}"#).unwrap();
        let package = PackageJson::new(source, &config, "function/entrypoint.js").transform();

        assert_eq!(package["dependencies"], json!({ "firebase-functions": "^4.0.1" }));
    }

    #[test]
    fn test_sveltekit_promoted_from_dev_dependencies() {
        let package = transform(AdapterOptions::default());

        assert!(!package.contains_key("devDependencies"));
        assert_eq!(package["dependencies"]["@sveltejs/kit"], json!("^1.5.0"));
        assert!(package["dependencies"].get("vite").is_none());
    }

    #[test]
    fn test_production_sveltekit_version_is_kept() {
        let config = resolve(&AdapterOptions::default()).unwrap();
        let source = PackageJson::parse(
            r#"{"dependencies":{"@sveltejs/kit":"1.2.3"},"devDependencies":{"@sveltejs/kit":"^1.5.0"}}"#,
        )
        .unwrap();
        let package = PackageJson::new(source, &config, "function/entrypoint.js").transform();

        assert_eq!(
            package["dependencies"],
            json!({ "@sveltejs/kit": "1.2.3", "firebase-functions": "^4.0.1" })
        );
    }

    #[test]
    fn test_render_format() {
        let config = resolve(&AdapterOptions::default()).unwrap();
        let source = PackageJson::parse(r#"{"name":"bare","devDependencies":{}}"#).unwrap();
        let rendered = PackageJson::new(source, &config, "function/entrypoint.js").render();

        assert_eq!(
            rendered,
            "{\n  \"name\": \"bare\",\n  \"dependencies\": {\n    \"firebase-functions\": \"^4.0.1\"\n  },\n  \"main\": \"function/entrypoint.js\",\n  \"engines\": {\n    \"node\": \"16\"\n  },\n  \"type\": \"module\"\n}"
        );
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(PackageJson::parse("[]").is_err());
        assert!(PackageJson::parse("{").is_err());
    }
}
