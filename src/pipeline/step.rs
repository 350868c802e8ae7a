//! Pipeline steps and their sequencing
//!
//! The pipeline is an explicit ordered list of steps. A series runs them
//! one after another and stops at the first failure.

use crate::config::Config;
use crate::error::{ExecutionError, Result};
use crate::pipeline::{expand, Context, Executor, ShellCommand};
use std::env;
use std::fs;

/// Hosting credentials, materialized from the environment once per run
///
/// Unset variables substitute as empty strings; the hosting CLI is the one
/// that decides whether that is acceptable.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub private_api_key: String,
    pub api_key: String,
}

impl Credentials {
    /// Read credentials from the environment variables named in the config
    pub fn from_env(config: &Config) -> Self {
        Credentials {
            private_api_key: env::var(&config.hosting.private_key_env).unwrap_or_default(),
            api_key: env::var(&config.hosting.api_key_env).unwrap_or_default(),
        }
    }
}

/// A single pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clean,
    Generate,
    Deploy,
}

impl Step {
    /// Step name for status output
    pub fn name(&self) -> &'static str {
        match self {
            Step::Clean => "clean",
            Step::Generate => "generate",
            Step::Deploy => "deploy",
        }
    }

    /// Execute this step in the given context
    pub fn execute(
        &self,
        config: &Config,
        credentials: &Credentials,
        ctx: &Context,
        executor: &dyn Executor,
    ) -> Result<()> {
        ctx.print_step_start(self.name());

        match self {
            Step::Clean => clean(config, ctx)?,
            Step::Generate => {
                let cmd = generate_command(config, ctx)?;
                executor.run(&cmd, ctx)?;
            }
            Step::Deploy => {
                for cmd in deploy_commands(config, credentials, ctx)? {
                    executor.run(&cmd, ctx)?;
                }
            }
        }

        ctx.print_step_complete(self.name());
        Ok(())
    }
}

/// Run a series of steps, aborting on the first failure
pub fn run_series(
    steps: &[Step],
    config: &Config,
    credentials: &Credentials,
    ctx: &Context,
    executor: &dyn Executor,
) -> Result<()> {
    for step in steps {
        step.execute(config, credentials, ctx, executor)?;
    }
    Ok(())
}

/// Remove every configured clean target
///
/// Targets are glob patterns resolved against the working directory. A
/// pattern matching nothing is a no-op, so clean is idempotent.
fn clean(config: &Config, ctx: &Context) -> Result<()> {
    for target in &config.clean {
        let pattern = expand(target, &ctx.vars)?;
        let full_pattern = ctx.working_dir.join(&pattern);

        let matches = glob::glob(&full_pattern.to_string_lossy()).map_err(|e| {
            ExecutionError::Clean {
                path: pattern.clone(),
                reason: e.to_string(),
            }
        })?;

        for entry in matches {
            let path = entry.map_err(|e| ExecutionError::Clean {
                path: pattern.clone(),
                reason: e.to_string(),
            })?;

            ctx.print_debug(&format!("Removing {}", path.display()));

            let removed = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };

            removed.map_err(|e| ExecutionError::Clean {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
    }

    Ok(())
}

/// Build the generator invocation
///
/// The arguments are a deterministic function of the configured source
/// directory.
pub fn generate_command(config: &Config, ctx: &Context) -> Result<ShellCommand> {
    let bin = expand(&config.site.bin, &ctx.vars)?;
    let source = expand(&config.site.source, &ctx.vars)?;

    let exec = format!(
        "{} --config {}/config.toml --contentDir {}/content/ --themesDir {}/themes/",
        bin, source, source, source
    );

    Ok(ShellCommand::new(exec))
}

/// Build the hosting login invocation
///
/// The executed string carries the real credentials; the display string
/// masks them.
pub fn login_command(
    config: &Config,
    credentials: &Credentials,
    ctx: &Context,
) -> Result<ShellCommand> {
    let bin = expand(&config.hosting.bin, &ctx.vars)?;

    let exec = format!(
        "{} login --private-api-key={} --api-key={} --yes",
        bin, credentials.private_api_key, credentials.api_key
    );
    let display = format!("{} login --private-api-key=*** --api-key=*** --yes", bin);

    Ok(ShellCommand::masked(exec, display))
}

/// Build the hosting import invocation
pub fn import_command(config: &Config, ctx: &Context) -> Result<ShellCommand> {
    let bin = expand(&config.hosting.bin, &ctx.vars)?;
    Ok(ShellCommand::new(format!(
        "{} import --include-hosting --yes",
        bin
    )))
}

/// Build the deploy invocations, login first
pub fn deploy_commands(
    config: &Config,
    credentials: &Credentials,
    ctx: &Context,
) -> Result<Vec<ShellCommand>> {
    Ok(vec![
        login_command(config, credentials, ctx)?,
        import_command(config, ctx)?,
    ])
}
