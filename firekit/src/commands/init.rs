use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use firekit_codegen::files::FirekitToml;
use firekit_config::{NodeVersion, RuntimeVersion};
use firekit_core::{GeneratedFile, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create firekit.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Output directory written by `firekit adapt`
    #[arg(long, default_value = firekit_config::DEFAULT_OUT_DIR)]
    pub out_dir: String,

    /// Name of the exported function
    #[arg(long, default_value = firekit_config::DEFAULT_FUNCTION_NAME)]
    pub function_name: String,

    /// Target: v1, v2 or web-frameworks (prompts when omitted)
    #[arg(short, long)]
    pub target: Option<Target>,

    /// Node.js engine: 14 or 16
    #[arg(long)]
    pub node_version: Option<NodeVersion>,
}

/// Deployment flavour picked at init time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
    V1,
    V2,
    WebFrameworks,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let target = match self.target {
            Some(target) => target,
            None => Self::prompt_target()?,
        };

        let (path, result) = self.template(target).write(&self.dir)?;
        match result {
            WriteResult::Written => println!("Created {}", path.display()),
            WriteResult::Skipped => println!("{} already exists, leaving it untouched", path.display()),
        }
        Ok(())
    }

    fn template(&self, target: Target) -> FirekitToml {
        let template = FirekitToml::default()
            .with_out_dir(&self.out_dir)
            .with_function_name(&self.function_name)
            .with_node_version(self.node_version.unwrap_or_default());

        match target {
            Target::V1 => template.with_version(RuntimeVersion::V1),
            Target::V2 => template.with_version(RuntimeVersion::V2),
            Target::WebFrameworks => template.with_web_framework(true),
        }
    }

    fn prompt_target() -> Result<Target> {
        let targets = [
            "Cloud Functions v2",
            "Cloud Functions v1",
            "Firebase Hosting web frameworks (beta)",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a deployment target")
            .items(&targets)
            .default(0)
            .interact()
            .wrap_err("Failed to get target selection")?;

        Ok(match selection {
            0 => Target::V2,
            1 => Target::V1,
            _ => Target::WebFrameworks,
        })
    }
}
