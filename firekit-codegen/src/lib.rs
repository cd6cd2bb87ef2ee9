//! Artifact generation for the firekit deployment adapter.
//!
//! Given a resolved [`AdapterConfig`](firekit_config::AdapterConfig) and a
//! [`Builder`] over the framework's build output, the [`Adapter`] produces a
//! deployable Cloud Functions bundle.
//!
//! # Module Organization
//!
//! - [`builder`] - the framework-side collaborator ([`Builder`], [`Log`])
//! - [`pipeline`] - the ordered steps and their runner
//! - [`files`] - generated files (entrypoint, package.json, runtime support)
//! - [`ast`] - JavaScript syntax builders used by the entrypoint
//! - [`testing`] - recording builder and fixtures (feature-gated)

mod adapter;
pub mod ast;
pub mod builder;
mod code_builder;
mod code_file;
pub mod files;
mod fs_builder;
mod install;
mod layout;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use adapter::{Adapter, PreviewFile};
pub use builder::{Builder, CopyOptions, Log, ManifestOptions, ModuleFormat, TracingLog};
pub use code_builder::CodeBuilder;
pub use code_file::CodeFile;
pub use fs_builder::FsBuilder;
pub use install::{
    InstallCommand, InstallOutcome, InstallStatus, Installer, ProcessInstaller, install,
};
pub use layout::{
    ArtifactPaths, ENTRYPOINT_FILE, FUNCTION_DIR, HOSTING_DIR, LEGACY_ROOT,
    MANIFEST_RELATIVE_PATH, PACKAGE_JSON, SERVER_DIR, SERVER_IMPORT,
};
pub use pipeline::AdaptOutcome;
