//! Command execution
//!
//! This module handles executing shell commands behind a mockable seam.

use crate::error::{ExecutionError, ExecutionResult};
use crate::pipeline::Context;
use std::process::{Command as StdCommand, Stdio};

/// A fully-built shell command, ready to execute
///
/// The display string is what gets logged. It defaults to the executed
/// string, but commands carrying secrets supply a masked version instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    exec: String,
    display: String,
}

impl ShellCommand {
    /// Create a command whose display string is the command itself
    pub fn new(exec: impl Into<String>) -> Self {
        let exec = exec.into();
        ShellCommand {
            display: exec.clone(),
            exec,
        }
    }

    /// Create a command with a separate display string
    ///
    /// Used for commands that embed credentials: `display` must not
    /// contain the secret values.
    pub fn masked(exec: impl Into<String>, display: impl Into<String>) -> Self {
        ShellCommand {
            exec: exec.into(),
            display: display.into(),
        }
    }

    /// The command string handed to the interpreter
    pub fn exec(&self) -> &str {
        &self.exec
    }

    /// The string safe to log
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// The boundary to the outside world: run a command, report success or failure
pub trait Executor {
    fn run(&self, cmd: &ShellCommand, ctx: &Context) -> ExecutionResult<()>;
}

/// Production executor spawning the context's interpreter
pub struct Shell;

impl Executor for Shell {
    fn run(&self, cmd: &ShellCommand, ctx: &Context) -> ExecutionResult<()> {
        ctx.print_run(cmd.display());

        // Build the command
        let mut command = StdCommand::new(&ctx.interpreter[0]);

        // Add interpreter args (e.g., "-c" for sh/bash)
        if ctx.interpreter.len() > 1 {
            command.args(&ctx.interpreter[1..]);
        }

        // Add the actual command to execute
        command.arg(cmd.exec());

        // Set working directory
        command.current_dir(&ctx.working_dir);

        // Set up stdio
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        // Set environment variables from context
        for (key, value) in &ctx.vars {
            command.env(key, value);
        }

        // Execute the command
        let status = command
            .status()
            .map_err(|_e| ExecutionError::CommandFailed(None))?;

        // Check exit status
        if !status.success() {
            return Err(ExecutionError::CommandFailed(status.code()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Verbosity;
    use std::collections::HashMap;

    fn quiet_ctx() -> Context {
        Context::new().with_verbosity(Verbosity::Silent)
    }

    #[test]
    fn test_execute_simple_command() {
        let cmd = ShellCommand::new("true");
        let result = Shell.run(&cmd, &quiet_ctx());
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_failing_command() {
        let cmd = ShellCommand::new("false");
        let result = Shell.run(&cmd, &quiet_ctx());
        assert!(matches!(
            result,
            Err(ExecutionError::CommandFailed(Some(1)))
        ));
    }

    #[test]
    fn test_exit_code_is_preserved() {
        let cmd = ShellCommand::new("exit 7");
        let result = Shell.run(&cmd, &quiet_ctx());
        assert!(matches!(
            result,
            Err(ExecutionError::CommandFailed(Some(7)))
        ));
    }

    #[test]
    fn test_context_vars_reach_the_child() {
        let mut vars = HashMap::new();
        vars.insert("SITEPIPE_EXEC_TEST".to_string(), "yes".to_string());

        let ctx = quiet_ctx().with_vars(vars);
        let cmd = ShellCommand::new("test \"$SITEPIPE_EXEC_TEST\" = yes");
        assert!(Shell.run(&cmd, &ctx).is_ok());
    }

    #[test]
    fn test_masked_command_keeps_exec_and_display_apart() {
        let cmd = ShellCommand::masked("login --key=secret", "login --key=***");
        assert_eq!(cmd.exec(), "login --key=secret");
        assert_eq!(cmd.display(), "login --key=***");
        assert!(!cmd.display().contains("secret"));
    }
}
