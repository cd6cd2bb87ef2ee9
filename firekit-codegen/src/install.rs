//! Dependency installation in the output directory.

use std::{
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, WrapErr, bail};
use firekit_config::{InstallConfig, InstallPolicy};

/// A package manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl InstallCommand {
    pub fn new(config: &InstallConfig, cwd: &Path) -> Self {
        Self {
            program: config.package_manager.clone(),
            args: config.args.clone(),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit state of an install command that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Success,
    /// Non-zero exit, or killed by a signal (`None`)
    Failed(Option<i32>),
}

/// Runs install commands. Errors mean the command could not be started.
pub trait Installer {
    fn run(&self, command: &InstallCommand) -> Result<InstallStatus>;
}

/// Spawns the package manager with inherited stdio and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInstaller;

impl Installer for ProcessInstaller {
    fn run(&self, command: &InstallCommand) -> Result<InstallStatus> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .status()
            .wrap_err_with(|| format!("failed to run `{}`", command))?;

        Ok(if status.success() {
            InstallStatus::Success
        } else {
            InstallStatus::Failed(status.code())
        })
    }
}

/// What the install step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped,
    Succeeded,
    /// Only produced under the best-effort policy
    Failed { reason: String },
}

impl InstallOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, InstallOutcome::Failed { .. })
    }
}

/// Run `command` and apply `policy` to the result.
pub fn install(
    installer: &dyn Installer,
    policy: InstallPolicy,
    command: &InstallCommand,
) -> Result<InstallOutcome> {
    if policy == InstallPolicy::Skip {
        return Ok(InstallOutcome::Skipped);
    }

    let reason = match installer.run(command) {
        Ok(InstallStatus::Success) => return Ok(InstallOutcome::Succeeded),
        Ok(InstallStatus::Failed(Some(code))) => format!("`{}` exited with code {}", command, code),
        Ok(InstallStatus::Failed(None)) => format!("`{}` was terminated by a signal", command),
        Err(err) if policy == InstallPolicy::FailFast => return Err(err),
        Err(err) => format!("{:#}", err),
    };

    if policy == InstallPolicy::FailFast {
        bail!("dependency install failed: {}", reason);
    }
    Ok(InstallOutcome::Failed { reason })
}

#[cfg(test)]
mod tests {
    use eyre::eyre;

    use super::*;

    struct Fixed(fn() -> Result<InstallStatus>);

    impl Installer for Fixed {
        fn run(&self, _command: &InstallCommand) -> Result<InstallStatus> {
            (self.0)()
        }
    }

    fn command() -> InstallCommand {
        InstallCommand::new(&InstallConfig::default(), Path::new("build"))
    }

    #[test]
    fn test_command_display() {
        assert_eq!(command().to_string(), "npm install");
        assert_eq!(command().cwd, PathBuf::from("build"));
    }

    #[test]
    fn test_skip_never_runs() {
        let installer = Fixed(|| panic!("installer must not run"));
        let outcome = install(&installer, InstallPolicy::Skip, &command()).unwrap();
        assert_eq!(outcome, InstallOutcome::Skipped);
    }

    #[test]
    fn test_best_effort_records_failure() {
        let installer = Fixed(|| Ok(InstallStatus::Failed(Some(1))));
        let outcome = install(&installer, InstallPolicy::BestEffort, &command()).unwrap();
        assert_eq!(
            outcome,
            InstallOutcome::Failed {
                reason: "`npm install` exited with code 1".to_string()
            }
        );
    }

    #[test]
    fn test_best_effort_records_spawn_error() {
        let installer = Fixed(|| Err(eyre!("npm: not found")));
        let outcome = install(&installer, InstallPolicy::BestEffort, &command()).unwrap();
        assert!(outcome.is_failed());
    }

    #[test]
    fn test_fail_fast_propagates() {
        let installer = Fixed(|| Ok(InstallStatus::Failed(None)));
        let err = install(&installer, InstallPolicy::FailFast, &command()).unwrap_err();
        assert!(err.to_string().contains("terminated by a signal"));
    }

    #[test]
    fn test_success() {
        let installer = Fixed(|| Ok(InstallStatus::Success));
        for policy in [InstallPolicy::BestEffort, InstallPolicy::FailFast] {
            assert_eq!(
                install(&installer, policy, &command()).unwrap(),
                InstallOutcome::Succeeded
            );
        }
    }
}
