//! The ordered artifact-generation pipeline.
//!
//! A [`Pipeline`] runs [`Step`]s in order against an [`AdaptContext`]. The
//! standard order is:
//!
//! 1. [`Clean`] - remove the output directory
//! 2. [`CopyAssets`] - client assets, then prerendered pages
//! 3. [`ServerBundle`] - function directory and server bundle
//! 4. [`SupportFiles`] - `function.js` and `_tslib.js`
//! 5. [`WriteEntrypoint`] - manifest and `entrypoint.js`
//! 6. [`WritePackageJson`] - production `package.json`
//! 7. [`Install`] - dependency install, per the install policy
//!
//! A failing step stops the run; nothing already written is rolled back.

mod context;
mod runner;
mod step;
mod steps;

pub use context::{AdaptContext, AdaptOutcome};
pub use runner::Pipeline;
pub use step::Step;
pub use steps::{
    Clean, CopyAssets, Install, ServerBundle, SupportFiles, WriteEntrypoint, WritePackageJson,
};
