//! Synchronous external command invocation.
//!
//! The invocation model is "single shell command string": tokens are joined
//! with spaces and handed to `sh -c`, so callers must pre-quote any token
//! containing spaces (file paths, SQL fragments). There is no timeout; a
//! hung engine blocks the caller until it exits.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{DumpError, Result};

/// Single-use builder for one external engine invocation.
///
/// Consumed by [`run`](Invocation::run), so no token state is ever shared
/// between invocations.
#[derive(Debug, Default)]
pub struct Invocation {
    tokens: Vec<String>,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one command token. Tokens containing spaces must already be
    /// wrapped in double quotes by the caller.
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Runs the command, blocking until the subprocess exits, and returns
    /// everything it wrote to stdout as one text blob (embedded newlines
    /// included). Stderr passes through to the parent's stderr.
    ///
    /// A non-zero exit status is not an error; whatever stdout was captured
    /// is returned as-is.
    pub fn run(self) -> Result<String> {
        let program = self.tokens.first().cloned().unwrap_or_default();
        let command_line = self.tokens.join(" ");
        debug!(command = %command_line, "Invoking external engine");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| DumpError::Launch { program, source })?;

        if !output.status.success() {
            debug!(
                command = %command_line,
                status = ?output.status.code(),
                "External engine exited with non-zero status"
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_with_embedded_newlines() {
        let out = Invocation::new()
            .arg("printf")
            .arg("'line1\\nline2\\n'")
            .run()
            .unwrap();
        assert_eq!(out, "line1\nline2\n");
    }

    #[test]
    fn test_tokens_join_with_single_spaces() {
        let out = Invocation::new().arg("echo").arg("a").arg("b").run().unwrap();
        assert_eq!(out, "a b\n");
    }

    #[test]
    fn test_quoted_token_survives_as_one_word() {
        let out = Invocation::new()
            .arg("echo")
            .arg("\"two words\"")
            .run()
            .unwrap();
        assert_eq!(out, "two words\n");
    }

    #[test]
    fn test_nonzero_exit_still_returns_stdout() {
        let out = Invocation::new()
            .arg("sh")
            .arg("-c")
            .arg("'echo partial; exit 3'")
            .run()
            .unwrap();
        assert_eq!(out, "partial\n");
    }
}
