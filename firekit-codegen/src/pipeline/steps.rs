//! The built-in pipeline steps.

use eyre::{Result, WrapErr};
use firekit_config::InstallPolicy;
use firekit_core::GeneratedFile;

use super::{AdaptContext, Step};
use crate::{
    InstallCommand, InstallOutcome, ManifestOptions, ModuleFormat,
    files::{Entrypoint, PackageJson, SupportFile},
    install,
    layout::MANIFEST_RELATIVE_PATH,
};

/// Removes the previous output directory.
pub struct Clean;

impl Step for Clean {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn description(&self) -> &'static str {
        "Remove the previous output directory"
    }

    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()> {
        ctx.builder.rimraf(&ctx.paths.out_dir)?;
        ctx.builder
            .log()
            .minor(&format!("Publishing to \"{}\"", ctx.config.out_dir.display()));
        Ok(())
    }
}

/// Copies client assets, then prerendered pages, into the static directory.
pub struct CopyAssets;

impl Step for CopyAssets {
    fn name(&self) -> &'static str {
        "copy-assets"
    }

    fn description(&self) -> &'static str {
        "Copy client assets and prerendered pages"
    }

    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()> {
        ctx.builder.log().minor("Copying assets...");
        let static_dir = &ctx.paths.static_dir;
        let client = ctx.builder.write_client(static_dir)?;
        let prerendered = ctx.builder.write_prerendered(static_dir)?;
        ctx.record(client);
        ctx.record(prerendered);
        Ok(())
    }
}

/// Creates the function directory and writes the server bundle.
pub struct ServerBundle;

impl Step for ServerBundle {
    fn name(&self) -> &'static str {
        "server-bundle"
    }

    fn description(&self) -> &'static str {
        "Write the server runtime bundle"
    }

    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()> {
        ctx.builder.log().info("Generating cloud function for Firebase...");
        ctx.builder.mkdirp(&ctx.paths.function_dir)?;
        let server = ctx.builder.write_server(&ctx.paths.server_dir)?;
        ctx.record(server);
        Ok(())
    }
}

/// Writes the request shim and its helpers next to the entrypoint.
///
/// The files are embedded in the binary rather than read from the framework
/// output, so they are written directly instead of through [`Builder::copy`].
///
/// [`Builder::copy`]: crate::Builder::copy
pub struct SupportFiles;

impl Step for SupportFiles {
    fn name(&self) -> &'static str {
        "support-files"
    }

    fn description(&self) -> &'static str {
        "Write the request shim and runtime helpers"
    }

    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()> {
        for file in SupportFile::ALL {
            let (path, _) = file.write(&ctx.paths.function_dir)?;
            ctx.record([path]);
        }
        Ok(())
    }
}

/// Renders the server manifest into `entrypoint.js`.
pub struct WriteEntrypoint;

impl Step for WriteEntrypoint {
    fn name(&self) -> &'static str {
        "entrypoint"
    }

    fn description(&self) -> &'static str {
        "Generate the function entrypoint"
    }

    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()> {
        ctx.builder.log().minor("Generating cloud function...");
        let manifest = ctx
            .builder
            .generate_manifest(&ManifestOptions {
                relative_path: MANIFEST_RELATIVE_PATH.to_string(),
                format: ModuleFormat::Esm,
            })
            .wrap_err("failed to generate the server manifest")?;

        let (path, _) = Entrypoint::new(ctx.config, manifest).write(&ctx.paths.function_dir)?;
        ctx.record([path]);
        Ok(())
    }
}

/// Writes the production package.json.
pub struct WritePackageJson;

impl Step for WritePackageJson {
    fn name(&self) -> &'static str {
        "package-json"
    }

    fn description(&self) -> &'static str {
        "Generate the production package.json"
    }

    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()> {
        ctx.builder
            .log()
            .info("Generating production package.json for Firebase...");
        let source = PackageJson::read(ctx.project_dir)?;
        let (path, _) = PackageJson::new(source, ctx.config, ctx.paths.main.as_str())
            .write(&ctx.paths.out_dir)?;
        ctx.record([path]);
        Ok(())
    }
}

/// Installs dependencies in the output directory.
pub struct Install;

impl Step for Install {
    fn name(&self) -> &'static str {
        "install"
    }

    fn description(&self) -> &'static str {
        "Install dependencies in the output directory"
    }

    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()> {
        let config = &ctx.config.install;
        if config.policy == InstallPolicy::Skip {
            ctx.builder.log().minor("Skipping dependency install");
        } else {
            ctx.builder.log().info(
                "Installing dependencies in functions directory. This might take a while...",
            );
        }

        let command = InstallCommand::new(config, &ctx.paths.out_dir);
        let outcome = install(ctx.installer, config.policy, &command)?;
        if let InstallOutcome::Failed { reason } = &outcome {
            ctx.builder
                .log()
                .warn(&format!("Dependency install failed: {}", reason));
        }
        ctx.install = outcome;
        Ok(())
    }
}
