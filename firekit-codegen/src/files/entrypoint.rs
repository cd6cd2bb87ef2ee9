//! `entrypoint.js`: the module the functions runtime loads.
//!
//! Standard mode:
//!
//! ```text
//! import { init } from './function.js';
//! import { onRequest } from 'firebase-functions/v2/https';
//!
//! export const handler = onRequest({"concurrency":500}, init(<manifest>));
//! ```
//!
//! Web frameworks mode exports `handle = init(<manifest>)` and has no
//! trigger import.

use std::path::{Path, PathBuf};

use firekit_config::{AdapterConfig, RuntimeVersion};
use firekit_core::GeneratedFile;

use crate::{
    CodeFile,
    ast::{Call, Const, Import},
    layout::ENTRYPOINT_FILE,
};

const INIT_MODULE: &str = "./function.js";
const INIT_FN: &str = "init";
const TRIGGER_FN: &str = "onRequest";

/// Rendered from the resolved configuration and the server manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrypoint {
    pub function_name: String,
    pub runtime: RuntimeVersion,
    /// Compact JSON, passed as the trigger's first argument
    pub function_options: Option<String>,
    pub web_framework: bool,
    /// JavaScript expression produced by the builder
    pub manifest: String,
}

impl Entrypoint {
    pub fn new(config: &AdapterConfig, manifest: impl Into<String>) -> Self {
        Self {
            function_name: config.function_name.clone(),
            runtime: config.runtime,
            function_options: config.function_options_json(),
            web_framework: config.web_framework,
            manifest: manifest.into(),
        }
    }

    fn trigger_module(&self) -> String {
        format!("firebase-functions/{}/https", self.runtime.as_str())
    }

    fn code_file(&self) -> CodeFile {
        let init = Call::new(INIT_FN).arg(self.manifest.as_str());
        let file = CodeFile::new().import(Import::new(INIT_MODULE).named(INIT_FN));

        if self.web_framework {
            return file.add(Const::new(&self.function_name, init));
        }

        let handler = Call::new(TRIGGER_FN)
            .arg_opt(self.function_options.as_deref())
            .arg(init);

        file.import(Import::new(self.trigger_module()).named(TRIGGER_FN))
            .add(Const::new(&self.function_name, handler))
    }
}

impl GeneratedFile for Entrypoint {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ENTRYPOINT_FILE)
    }

    fn render(&self) -> String {
        self.code_file().render()
    }
}
