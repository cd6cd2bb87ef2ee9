use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use firekit_config::{FirekitToml, InstallPolicy, NodeVersion, OutputLayout, RuntimeVersion, Settings};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct AdaptCommand {
    /// Path to firekit.toml, relative to the project (optional)
    #[arg(short, long, default_value = "firekit.toml")]
    pub config: PathBuf,

    /// Project directory holding package.json
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Output directory (overrides firekit.toml)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Name of the exported function
    #[arg(long)]
    pub function_name: Option<String>,

    /// Cloud Functions generation: v1 or v2
    #[arg(long)]
    pub version: Option<RuntimeVersion>,

    /// Node.js engine: 14 or 16
    #[arg(long)]
    pub node_version: Option<NodeVersion>,

    /// Package for Firebase Hosting's web frameworks integration
    #[arg(long)]
    pub web_framework: bool,

    /// Function bundle placement: standard or legacy
    #[arg(long)]
    pub layout: Option<OutputLayout>,

    /// Dependency install policy: best-effort, fail-fast or skip
    #[arg(long)]
    pub install: Option<InstallPolicy>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl AdaptCommand {
    pub fn run(&self) -> Result<()> {
        let mut file = FirekitToml::open_or_default(self.project.join(&self.config)).unwrap_or_exit();
        self.apply_overrides(file.settings_mut());
        let config = file.resolve().unwrap_or_exit();

        let report = ops::adapt(
            config,
            ops::adapt::AdaptOptions {
                project_dir: &self.project,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Command-line flags win over firekit.toml.
    fn apply_overrides(&self, settings: &mut Settings) {
        let adapter = &mut settings.adapter;
        if let Some(out_dir) = &self.out_dir {
            adapter.out_dir = Some(out_dir.clone());
        }
        if let Some(name) = &self.function_name {
            adapter.function_name = Some(name.clone());
        }
        if let Some(version) = self.version {
            adapter.version = Some(version);
            adapter.v2 = None;
        }
        if let Some(node_version) = self.node_version {
            adapter.node_version = Some(node_version);
        }
        if self.web_framework {
            adapter.use_web_framework_beta = Some(true);
        }
        if let Some(layout) = self.layout {
            adapter.layout = Some(layout);
        }
        if let Some(policy) = self.install {
            settings.install.policy = Some(policy);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        adapt: AdaptCommand,
    }

    fn parse(args: &[&str]) -> AdaptCommand {
        Wrapper::try_parse_from(std::iter::once("adapt").chain(args.iter().copied()))
            .unwrap()
            .adapt
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut settings = FirekitToml::parse_str(
            "[adapter]\nout_dir = \"dist\"\nv2 = false\n\n[install]\npolicy = \"fail-fast\"\n",
            "firekit.toml",
        )
        .unwrap();

        parse(&["--out-dir", "public", "--version", "v2", "--install", "skip"])
            .apply_overrides(&mut settings);

        assert_eq!(settings.adapter.out_dir, Some(PathBuf::from("public")));
        assert_eq!(settings.adapter.explicit_runtime(), Some(RuntimeVersion::V2));
        assert_eq!(settings.install.policy, Some(InstallPolicy::Skip));
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let mut settings =
            FirekitToml::parse_str("[adapter]\nfunction_name = \"ssr\"\n", "firekit.toml").unwrap();

        parse(&[]).apply_overrides(&mut settings);

        assert_eq!(settings.adapter.function_name.as_deref(), Some("ssr"));
        assert_eq!(settings.adapter.use_web_framework_beta, None);
    }

    #[test]
    fn test_invalid_version_is_rejected() {
        assert!(
            Wrapper::try_parse_from(["adapt", "--version", "v3"]).is_err()
        );
    }
}
