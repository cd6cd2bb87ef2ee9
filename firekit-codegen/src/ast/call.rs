//! Function call expression builder.

use std::fmt;

/// A call expression such as `onRequest(options, init(manifest))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    callee: String,
    args: Vec<String>,
}

impl Call {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add an argument only when present.
    pub fn arg_opt(self, arg: Option<impl Into<String>>) -> Self {
        match arg {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.callee, self.args.join(", "))
    }
}

impl From<Call> for String {
    fn from(call: Call) -> Self {
        call.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_call() {
        let call = Call::new("onRequest")
            .arg(r#"{"concurrency":500}"#)
            .arg(Call::new("init").arg("M"));
        assert_eq!(call.to_string(), r#"onRequest({"concurrency":500}, init(M))"#);
    }

    #[test]
    fn test_optional_arg_skipped() {
        let call = Call::new("onRequest")
            .arg_opt(None::<String>)
            .arg(Call::new("init").arg("M"));
        assert_eq!(call.to_string(), "onRequest(init(M))");
    }
}
