//! Enumerated option values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Cloud Functions generation the bundle targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeVersion {
    V1,
    #[default]
    V2,
}

impl RuntimeVersion {
    /// Returns the version identifier as used in `firebase-functions/<v>/https`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeVersion::V1 => "v1",
            RuntimeVersion::V2 => "v2",
        }
    }

    /// Map the legacy boolean `v2` flag onto a version.
    pub fn from_v2_flag(v2: bool) -> Self {
        if v2 {
            RuntimeVersion::V2
        } else {
            RuntimeVersion::V1
        }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuntimeVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" | "1" => Ok(RuntimeVersion::V1),
            "v2" | "2" => Ok(RuntimeVersion::V2),
            _ => Err(format!("unknown function version '{}', expected 'v1' or 'v2'", s)),
        }
    }
}

/// Node.js major version pinned in the generated `engines` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "NodeVersionRepr", into = "String")]
pub enum NodeVersion {
    Node14,
    #[default]
    Node16,
}

impl NodeVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeVersion::Node14 => "14",
            NodeVersion::Node16 => "16",
        }
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "14" => Ok(NodeVersion::Node14),
            "16" => Ok(NodeVersion::Node16),
            _ => Err(format!("unsupported node version '{}', expected '14' or '16'", s)),
        }
    }
}

impl From<NodeVersion> for String {
    fn from(version: NodeVersion) -> Self {
        version.as_str().to_string()
    }
}

/// TOML users write both `node_version = "16"` and `node_version = 16`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NodeVersionRepr {
    Text(String),
    Number(u32),
}

impl TryFrom<NodeVersionRepr> for NodeVersion {
    type Error = String;

    fn try_from(repr: NodeVersionRepr) -> Result<Self, Self::Error> {
        match repr {
            NodeVersionRepr::Text(s) => s.parse(),
            NodeVersionRepr::Number(n) => n.to_string().parse(),
        }
    }
}

/// Where the function and server bundles live inside the output directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// `function/` and `server/` at the output root.
    #[default]
    Standard,
    /// `.firebase/function/` and `.firebase/server/`.
    Legacy,
}

impl OutputLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLayout::Standard => "standard",
            OutputLayout::Legacy => "legacy",
        }
    }
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(OutputLayout::Standard),
            "legacy" => Ok(OutputLayout::Legacy),
            _ => Err(format!(
                "unknown layout '{}', expected 'standard' or 'legacy'",
                s
            )),
        }
    }
}

/// What to do when the dependency install step fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallPolicy {
    /// Run the install, report failures as warnings.
    #[default]
    BestEffort,
    /// Run the install, fail the whole run on a non-zero exit.
    FailFast,
    /// Do not install.
    Skip,
}

impl InstallPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallPolicy::BestEffort => "best-effort",
            InstallPolicy::FailFast => "fail-fast",
            InstallPolicy::Skip => "skip",
        }
    }
}

impl fmt::Display for InstallPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstallPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best-effort" => Ok(InstallPolicy::BestEffort),
            "fail-fast" => Ok(InstallPolicy::FailFast),
            "skip" => Ok(InstallPolicy::Skip),
            _ => Err(format!(
                "unknown install policy '{}', expected 'best-effort', 'fail-fast' or 'skip'",
                s
            )),
        }
    }
}
