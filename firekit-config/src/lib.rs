//! Configuration for the firekit deployment adapter.
//!
//! Raw options come from `firekit.toml` (or are built in code), are checked
//! against the exclusion [`rules`], and are resolved into an immutable
//! [`AdapterConfig`].
//!
//! ```ignore
//! use firekit_config::{AdapterOptions, RuntimeVersion, resolve};
//!
//! let config = resolve(&AdapterOptions::default().with_version(RuntimeVersion::V1))?;
//! assert!(config.function_options.is_none());
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod options;
mod resolve;
pub mod rules;
mod runtime;

pub use error::{Error, Result};
pub use file::{CONFIG_FILE, FirekitToml};
pub use options::{AdapterOptions, FrameworkOptions, FunctionOptions, InstallOptions, Settings};
pub use resolve::{
    AdapterConfig, DEFAULT_CONCURRENCY, DEFAULT_FRAMEWORK_OUTPUT, DEFAULT_FUNCTION_NAME,
    DEFAULT_OUT_DIR, DEFAULT_PACKAGE_MANAGER, InstallConfig, WEB_FRAMEWORK_FUNCTION_NAME, resolve,
    resolve_settings,
};
pub use runtime::{InstallPolicy, NodeVersion, OutputLayout, RuntimeVersion};
