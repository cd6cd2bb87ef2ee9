//! Reserved tokens in bundled runtime files.
//!
//! Runtime files are shipped with a token where a module path belongs and
//! the token is replaced once, at generation time. A token must start with
//! an ASCII digit: a digit can never begin a JavaScript identifier, so an
//! unsubstituted token cannot silently resolve to a variable, and a bundler
//! that renames identifiers can never rewrite it.

/// The token standing in for the server bundle import path.
pub const SERVER_PLACEHOLDER: Placeholder = Placeholder::new("0SERVER");

/// A reserved textual token inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    token: &'static str,
}

impl Placeholder {
    /// Create a placeholder. Panics (at compile time in const context) if the
    /// token does not start with an ASCII digit.
    pub const fn new(token: &'static str) -> Self {
        let bytes = token.as_bytes();
        assert!(
            !bytes.is_empty() && bytes[0].is_ascii_digit(),
            "placeholder tokens must start with an ASCII digit"
        );
        Self { token }
    }

    /// The raw token text.
    pub fn token(&self) -> &'static str {
        self.token
    }

    /// Whether the template still contains the token.
    pub fn is_present_in(&self, template: &str) -> bool {
        template.contains(self.token)
    }

    /// Replace every occurrence of the token with `value`.
    pub fn substitute(&self, template: &str, value: &str) -> String {
        template.replace(self.token, value)
    }
}
