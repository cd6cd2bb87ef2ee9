//! Runtime files shipped next to the entrypoint.
//!
//! `function.js` imports the server bundle through [`SERVER_PLACEHOLDER`];
//! the token is replaced with the bundle's relative path when written.

use std::path::{Path, PathBuf};

use firekit_core::{GeneratedFile, SERVER_PLACEHOLDER};

use crate::layout::SERVER_IMPORT;

const FUNCTION_JS: &str = include_str!("../../assets/function.js");
const TSLIB_JS: &str = include_str!("../../assets/_tslib.js");

/// One embedded runtime file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportFile {
    pub name: &'static str,
    template: &'static str,
    substitute: bool,
}

impl SupportFile {
    /// The request shim: initializes the server once, translates requests.
    pub const FUNCTION: SupportFile = SupportFile {
        name: "function.js",
        template: FUNCTION_JS,
        substitute: true,
    };

    /// Helpers imported by the shim.
    pub const TSLIB: SupportFile = SupportFile {
        name: "_tslib.js",
        template: TSLIB_JS,
        substitute: false,
    };

    /// Every support file, in write order.
    pub const ALL: [SupportFile; 2] = [Self::FUNCTION, Self::TSLIB];

    pub fn template(&self) -> &'static str {
        self.template
    }
}

impl GeneratedFile for SupportFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.name)
    }

    fn render(&self) -> String {
        if self.substitute {
            SERVER_PLACEHOLDER.substitute(self.template, SERVER_IMPORT)
        } else {
            self.template.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_template_carries_placeholder() {
        assert!(SERVER_PLACEHOLDER.is_present_in(SupportFile::FUNCTION.template()));
    }

    #[test]
    fn test_function_placeholder_substituted() {
        let rendered = SupportFile::FUNCTION.render();
        assert!(!SERVER_PLACEHOLDER.is_present_in(&rendered));
        assert!(rendered.contains("import { Server } from './../server/index.js';"));
    }

    #[test]
    fn test_tslib_is_verbatim() {
        assert_eq!(SupportFile::TSLIB.render(), SupportFile::TSLIB.template());
    }

    #[test]
    fn test_polyfills_installed_before_request_is_built() {
        let rendered = SupportFile::FUNCTION.render();
        let import = rendered
            .find("import { installPolyfills } from '@sveltejs/kit/node/polyfills';")
            .expect("polyfill import");
        let install = rendered.find("\ninstallPolyfills();\n").expect("polyfill call");
        let init = rendered.find("export function init(").unwrap();
        let request = rendered.find("new Request(").unwrap();

        assert!(import < install);
        assert!(install < init);
        assert!(init < request);
    }

    #[test]
    fn test_shim_answers_bad_requests_with_400() {
        let rendered = SupportFile::FUNCTION.render();
        assert!(rendered.contains("'Invalid request body'"));
        assert!(rendered.contains("|| 400"));
    }
}
