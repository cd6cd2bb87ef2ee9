//! Option combinations the adapter refuses.
//!
//! Rules are evaluated in order before any default is applied; the first
//! violation wins. Adding a mode means adding a row to [`RULES`].

use std::path::{Component, Path};

use crate::{AdapterOptions, Error, RuntimeVersion};

/// A single exclusion rule.
pub struct Rule {
    /// Stable identifier, reported on the error
    pub name: &'static str,
    pub violated: fn(&AdapterOptions) -> bool,
    pub message: &'static str,
    pub hint: &'static str,
}

impl Rule {
    fn error(&self) -> Box<Error> {
        Box::new(Error::Configuration {
            rule: self.name,
            message: self.message,
            hint: self.hint,
        })
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "conflicting-version",
        violated: conflicting_version,
        message: "`version` and `v2` disagree",
        hint: "drop the legacy `v2` flag and keep `version`",
    },
    Rule {
        name: "v1-function-options",
        violated: v1_with_function_options,
        message: "function options can only be used with v2 functions",
        hint: "remove [adapter.function_options] or set version = \"v2\"",
    },
    Rule {
        name: "web-framework-function-name",
        violated: web_framework_with_function_name,
        message: "function_name cannot be set when use_web_framework_beta is enabled",
        hint: "Firebase Hosting names the function itself; remove function_name",
    },
    Rule {
        name: "web-framework-function-options",
        violated: web_framework_with_function_options,
        message: "function_options cannot be set when use_web_framework_beta is enabled",
        hint: "configure the function through firebase.json instead",
    },
    Rule {
        name: "web-framework-version",
        violated: web_framework_with_version,
        message: "version cannot be set when use_web_framework_beta is enabled",
        hint: "remove version (and v2); Firebase Hosting picks the runtime",
    },
    Rule {
        name: "empty-out-dir",
        violated: empty_out_dir,
        message: "out_dir cannot be empty",
        hint: "set out_dir to a directory such as \"build\"",
    },
    Rule {
        name: "out-dir-outside-project",
        violated: out_dir_outside_project,
        message: "out_dir must name a directory inside the project",
        hint: "out_dir is cleared on every run; use a dedicated directory such as \"build\"",
    },
];

/// Return the first violated rule as an error.
pub fn check(options: &AdapterOptions) -> Result<(), Box<Error>> {
    match RULES.iter().find(|rule| (rule.violated)(options)) {
        Some(rule) => Err(rule.error()),
        None => Ok(()),
    }
}

fn conflicting_version(o: &AdapterOptions) -> bool {
    match (o.version, o.v2) {
        (Some(version), Some(v2)) => version != RuntimeVersion::from_v2_flag(v2),
        _ => false,
    }
}

fn v1_with_function_options(o: &AdapterOptions) -> bool {
    o.explicit_runtime() == Some(RuntimeVersion::V1) && o.function_options.is_some()
}

fn web_framework_with_function_name(o: &AdapterOptions) -> bool {
    o.web_framework() && o.function_name.is_some()
}

fn web_framework_with_function_options(o: &AdapterOptions) -> bool {
    o.web_framework() && o.function_options.is_some()
}

fn web_framework_with_version(o: &AdapterOptions) -> bool {
    o.web_framework() && (o.version.is_some() || o.v2.is_some())
}

fn empty_out_dir(o: &AdapterOptions) -> bool {
    o.out_dir
        .as_ref()
        .is_some_and(|dir| dir.as_os_str().is_empty())
}

/// Out dirs like `.` or `../x` that point at the project root or above it.
fn out_dir_outside_project(o: &AdapterOptions) -> bool {
    o.out_dir.as_deref().is_some_and(|dir| {
        !dir.as_os_str().is_empty() && (!has_normal_component(dir) || climbs_out(dir))
    })
}

fn has_normal_component(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::Normal(_)))
}

fn climbs_out(path: &Path) -> bool {
    path.components().any(|c| c == Component::ParentDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violated(options: &AdapterOptions) -> Option<&'static str> {
        check(options).err().and_then(|e| e.rule())
    }

    #[test]
    fn test_defaults_pass() {
        assert_eq!(violated(&AdapterOptions::default()), None);
    }

    #[test]
    fn test_v1_with_options() {
        let options = AdapterOptions::default()
            .with_version(RuntimeVersion::V1)
            .with_function_option("concurrency", 500);
        assert_eq!(violated(&options), Some("v1-function-options"));
    }

    #[test]
    fn test_legacy_v1_flag_with_options() {
        let options = AdapterOptions {
            v2: Some(false),
            ..Default::default()
        }
        .with_function_option("concurrency", 500);
        assert_eq!(violated(&options), Some("v1-function-options"));
    }

    #[test]
    fn test_conflicting_version_is_reported_first() {
        let options = AdapterOptions {
            v2: Some(true),
            ..Default::default()
        }
        .with_version(RuntimeVersion::V1)
        .with_function_option("concurrency", 1);
        assert_eq!(violated(&options), Some("conflicting-version"));
    }

    #[test]
    fn test_web_framework_exclusions() {
        let base = AdapterOptions::default().with_web_framework_beta(true);

        assert_eq!(
            violated(&base.clone().with_function_name("custom")),
            Some("web-framework-function-name")
        );
        assert_eq!(
            violated(&base.clone().with_function_option("memory", "1GiB")),
            Some("web-framework-function-options")
        );
        assert_eq!(
            violated(&base.clone().with_version(RuntimeVersion::V2)),
            Some("web-framework-version")
        );
        assert_eq!(violated(&base), None);
    }

    #[test]
    fn test_web_framework_disabled_allows_everything() {
        let options = AdapterOptions::default()
            .with_web_framework_beta(false)
            .with_function_name("custom")
            .with_version(RuntimeVersion::V2)
            .with_function_option("memory", "1GiB");
        assert_eq!(violated(&options), None);
    }

    #[test]
    fn test_empty_out_dir() {
        let options = AdapterOptions::default().with_out_dir("");
        assert_eq!(violated(&options), Some("empty-out-dir"));
    }

    #[test]
    fn test_out_dir_outside_project() {
        for dir in [".", "./", "/", "..", "../build", "build/../.."] {
            let options = AdapterOptions::default().with_out_dir(dir);
            assert_eq!(violated(&options), Some("out-dir-outside-project"), "{dir}");
        }
    }

    #[test]
    fn test_out_dir_inside_project() {
        for dir in ["build", "./build", "dist/functions"] {
            let options = AdapterOptions::default().with_out_dir(dir);
            assert_eq!(violated(&options), None, "{dir}");
        }
    }
}
