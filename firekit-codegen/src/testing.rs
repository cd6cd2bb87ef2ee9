//! Test utilities for the adapter pipeline.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use eyre::Result;

use crate::{
    Builder, CopyOptions, InstallCommand, InstallStatus, Installer, Log, ManifestOptions,
};

/// A call made against a [`RecordingBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderCall {
    Rimraf(PathBuf),
    Mkdirp(PathBuf),
    Copy { from: PathBuf, to: PathBuf },
    WriteClient(PathBuf),
    WritePrerendered(PathBuf),
    WriteServer(PathBuf),
    GenerateManifest(ManifestOptions),
}

/// Severity of a recorded log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Minor,
    Info,
    Warn,
}

/// [`Log`] that keeps every message.
#[derive(Debug, Default)]
pub struct RecordingLog {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingLog {
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    fn push(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl Log for RecordingLog {
    fn minor(&self, message: &str) {
        self.push(Level::Minor, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }
}

/// [`Builder`] that records calls and touches nothing on disk.
#[derive(Debug)]
pub struct RecordingBuilder {
    manifest: String,
    calls: RefCell<Vec<BuilderCall>>,
    log: RecordingLog,
}

impl RecordingBuilder {
    /// A builder whose manifest is the expression `M`.
    pub fn new() -> Self {
        Self::with_manifest("M")
    }

    pub fn with_manifest(manifest: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            calls: RefCell::new(Vec::new()),
            log: RecordingLog::default(),
        }
    }

    pub fn calls(&self) -> Vec<BuilderCall> {
        self.calls.borrow().clone()
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.log.messages()
    }

    fn push(&self, call: BuilderCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Default for RecordingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for RecordingBuilder {
    fn rimraf(&self, path: &Path) -> Result<()> {
        self.push(BuilderCall::Rimraf(path.to_path_buf()));
        Ok(())
    }

    fn mkdirp(&self, path: &Path) -> Result<()> {
        self.push(BuilderCall::Mkdirp(path.to_path_buf()));
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path, _options: &CopyOptions) -> Result<Vec<PathBuf>> {
        self.push(BuilderCall::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        Ok(Vec::new())
    }

    fn write_client(&self, dest: &Path) -> Result<Vec<PathBuf>> {
        self.push(BuilderCall::WriteClient(dest.to_path_buf()));
        Ok(Vec::new())
    }

    fn write_prerendered(&self, dest: &Path) -> Result<Vec<PathBuf>> {
        self.push(BuilderCall::WritePrerendered(dest.to_path_buf()));
        Ok(Vec::new())
    }

    fn write_server(&self, dest: &Path) -> Result<Vec<PathBuf>> {
        self.push(BuilderCall::WriteServer(dest.to_path_buf()));
        Ok(Vec::new())
    }

    fn generate_manifest(&self, options: &ManifestOptions) -> Result<String> {
        self.push(BuilderCall::GenerateManifest(options.clone()));
        Ok(self.manifest.clone())
    }

    fn log(&self) -> &dyn Log {
        &self.log
    }
}

/// [`Installer`] that records commands and returns a fixed status.
#[derive(Debug)]
pub struct RecordingInstaller {
    status: InstallStatus,
    commands: RefCell<Vec<InstallCommand>>,
}

impl RecordingInstaller {
    pub fn succeeding() -> Self {
        Self::with_status(InstallStatus::Success)
    }

    pub fn failing(code: i32) -> Self {
        Self::with_status(InstallStatus::Failed(Some(code)))
    }

    pub fn with_status(status: InstallStatus) -> Self {
        Self {
            status,
            commands: RefCell::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<InstallCommand> {
        self.commands.borrow().clone()
    }
}

impl Installer for RecordingInstaller {
    fn run(&self, command: &InstallCommand) -> Result<InstallStatus> {
        self.commands.borrow_mut().push(command.clone());
        Ok(self.status)
    }
}

/// package.json used by [`write_project_fixture`].
pub const FIXTURE_PACKAGE_JSON: &str = r#"{
  "name": "fixture-app",
  "version": "0.0.1",
  "private": true,
  "scripts": {
    "build": "vite build"
  },
  "devDependencies": {
    "@sveltejs/kit": "^1.0.0",
    "vite": "^4.0.0"
  },
  "type": "module",
  "dependencies": {
    "cookie": "^0.5.0"
  }
}
"#;

/// Server manifest used by [`write_project_fixture`].
pub const FIXTURE_MANIFEST: &str = "export const manifest = {\n\tappDir: \"_app\",\n\tnodes: [\n\t\t() => import('./nodes/0.js'),\n\t\t() => import('./nodes/1.js')\n\t]\n};\n";

/// Write a project with a compiled framework output under `root`:
/// `package.json` and `.svelte-kit/output/{client,prerendered,server}`.
pub fn write_project_fixture(root: &Path) -> Result<()> {
    let output = root.join(".svelte-kit").join("output");
    let files = [
        (root.join("package.json"), FIXTURE_PACKAGE_JSON),
        (output.join("client/_app/immutable/start.js"), "export {};\n"),
        (output.join("client/favicon.png"), "png"),
        (output.join("prerendered/pages/about.html"), "<h1>About</h1>\n"),
        (output.join("prerendered/dependencies/_app/version.json"), "{\"version\":\"1\"}"),
        (output.join("server/index.js"), "export class Server {}\n"),
        (output.join("server/nodes/0.js"), "export const index = 0;\n"),
        (output.join("server/manifest.js"), FIXTURE_MANIFEST),
    ];

    for (path, content) in files {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(())
}

/// Every file below `dir` with its content, sorted by relative path.
pub fn read_tree(dir: &Path) -> Result<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            let relative = entry.path().strip_prefix(dir)?;
            files.push((
                relative.to_string_lossy().replace('\\', "/"),
                fs::read(entry.path())?,
            ));
        }
    }
    Ok(files)
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        for i in 0..expected_lines.len().max(actual_lines.len()) {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");
            if exp != act {
                diff.push_str(&format!("Line {}:\n  expected: {}\n  actual:   {}\n", i + 1, exp, act));
            }
        }
        if diff.is_empty() {
            diff.push_str("(line endings differ)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
