//! Adapt command report.

use std::path::PathBuf;

use firekit_codegen::{InstallOutcome, PreviewFile};

use super::output::{Output, Report};

/// Report data from an adapter run.
#[derive(Debug)]
pub struct AdaptReport {
    pub out_dir: PathBuf,
    /// `function_name` exported by the entrypoint
    pub function_name: String,
    /// e.g. `v2` or `web frameworks`
    pub target: String,
    pub result: AdaptResult,
}

#[derive(Debug)]
pub enum AdaptResult {
    Written {
        /// Generated files, relative to the output directory
        generated: Vec<String>,
        /// Files copied from the framework output
        copied: usize,
        install: InstallOutcome,
    },
    Preview { files: Vec<PreviewFile> },
}

impl Report for AdaptReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            AdaptResult::Written {
                generated,
                copied,
                install,
            } => {
                if let InstallOutcome::Failed { reason } = install {
                    out.warning(&format!("dependency install failed: {}", reason));
                }

                out.key_value("Adapted", &self.out_dir.display().to_string());
                out.key_value_indented("function", &format!("{} ({})", self.function_name, self.target));
                out.key_value_indented("copied", &format!("{} files", copied));
                out.key_value_indented("install", install_label(install));
                out.newline();
                out.section("Generated");
                for path in generated {
                    out.added_item(path);
                }
            }
            AdaptResult::Preview { files } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be generated in {}",
                    files.len(),
                    self.out_dir.display()
                ));
            }
        }
    }
}

fn install_label(outcome: &InstallOutcome) -> &'static str {
    match outcome {
        InstallOutcome::Skipped => "skipped",
        InstallOutcome::Succeeded => "done",
        InstallOutcome::Failed { .. } => "failed",
    }
}
