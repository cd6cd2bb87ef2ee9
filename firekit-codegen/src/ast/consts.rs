//! `const` declaration builder.

use crate::CodeBuilder;

/// Builder for exported `const` declarations.
///
/// The value is emitted verbatim, so a multi-line expression (such as a
/// server manifest) keeps its own line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    name: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!("export const {} = {};", self.name, self.value))
    }

    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}
