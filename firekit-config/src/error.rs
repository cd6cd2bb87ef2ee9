use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'firekit init' to create a firekit.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(firekit::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    /// Two or more options were combined in a way the adapter cannot honour.
    #[error("{message}")]
    #[diagnostic(code(firekit::configuration), help("{hint}"))]
    Configuration {
        rule: &'static str,
        message: &'static str,
        hint: &'static str,
    },

    #[error("invalid function name '{name}'")]
    #[diagnostic(
        code(firekit::invalid_function_name),
        help("{reason}. The name becomes an exported JavaScript binding.")
    )]
    InvalidFunctionName { name: String, reason: &'static str },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// The name of the violated rule, for configuration errors.
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            Error::Configuration { rule, .. } => Some(*rule),
            _ => None,
        }
    }

    /// Whether this error is an invalid combination of options.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. } | Error::InvalidFunctionName { .. }
        )
    }
}
