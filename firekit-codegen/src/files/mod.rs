//! Generated files.

mod entrypoint;
mod firekit_toml;
mod package_json;
mod support;

pub use entrypoint::Entrypoint;
pub use firekit_toml::FirekitToml;
pub use package_json::{
    FIREBASE_FUNCTIONS, FIREBASE_FUNCTIONS_VERSION, NOOP_BUILD_SCRIPT, PackageJson,
};
pub use support::SupportFile;
