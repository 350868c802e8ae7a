//! Main CLI application

use crate::config::{parse_config_auto, parse_config_file, validate_config, Config};
use crate::error::Result;
use crate::pipeline::{run_series, Context, Credentials, Shell, Step, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::{generate, Shell as CompletionShell};
use std::io;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed configuration
    config: Config,
    /// Config file path, when one was found
    config_path: Option<PathBuf>,
}

impl App {
    /// Create a new app, discovering the configuration file if present
    pub fn new() -> Result<Self> {
        let (config, config_path) = parse_config_auto()?;
        validate_config(&config)?;

        let command = build_command(&config);

        Ok(App {
            command,
            config,
            config_path,
        })
    }

    /// Create app with a specific config file
    pub fn with_config_file(path: PathBuf) -> Result<Self> {
        let config = parse_config_file(&path)?;
        validate_config(&config)?;

        let command = build_command(&config);

        Ok(App {
            command,
            config,
            config_path: Some(path),
        })
    }

    /// Run the application with command line arguments
    pub fn run(mut self) -> Result<()> {
        let matches = self.command.clone().get_matches();

        // Handle global flags first
        let verbosity = get_verbosity(&matches);

        // Check if a subcommand was specified
        let (name, sub_matches) = match matches.subcommand() {
            Some((name, sub_matches)) => (name.to_string(), sub_matches),
            None => {
                // No subcommand, show help
                self.command.print_help()?;
                println!();
                return Ok(());
            }
        };

        if name == "completions" {
            if let Some(shell) = sub_matches.get_one::<CompletionShell>("shell").copied() {
                let mut command = build_command(&self.config);
                let bin_name = command.get_name().to_string();
                generate(shell, &mut command, bin_name, &mut io::stdout());
            }
            return Ok(());
        }

        let steps = match series_for(&name) {
            Some(steps) => steps,
            // clap has already rejected unknown subcommands
            None => return Ok(()),
        };

        // Create execution context
        let mut ctx = Context::new()
            .with_verbosity(verbosity)
            .with_vars(self.config.env.clone());

        // Set interpreter if specified in config
        if let Some(interpreter) = &self.config.interpreter {
            ctx = ctx.with_interpreter(interpreter.clone());
        }

        if let Some(path) = &self.config_path {
            ctx.print_debug(&format!("Using config file: {}", path.display()));
        }

        // Credentials are read once, before the series starts
        let credentials = Credentials::from_env(&self.config);

        run_series(&steps, &self.config, &credentials, &ctx, &Shell)
    }
}

/// Map a subcommand to its step series
fn series_for(subcommand: &str) -> Option<Vec<Step>> {
    match subcommand {
        "clean" => Some(vec![Step::Clean]),
        "generate" => Some(vec![Step::Generate]),
        "build" => Some(vec![Step::Clean, Step::Generate]),
        "deploy" => Some(vec![Step::Clean, Step::Generate, Step::Deploy]),
        _ => None,
    }
}

/// Build the clap command from configuration
fn build_command(config: &Config) -> Command {
    Command::new(config.name.clone().unwrap_or_else(|| "sitepipe".to_string()))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and deploy a Hugo-based static site")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to sitepipe.yml config file")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("clean").about("Remove the generated site and hosting files"))
        .subcommand(Command::new("generate").about("Run the static-site generator"))
        .subcommand(Command::new("build").about("Clean, then generate the site"))
        .subcommand(Command::new("deploy").about("Clean, generate, then push to hosting"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(clap::value_parser!(CompletionShell)),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application with provided arguments
pub fn run() -> Result<()> {
    // Load a .env file from the working directory, if present
    dotenvy::dotenv().ok();

    // Check if --file flag is provided first
    let args: Vec<String> = std::env::args().collect();
    let file_path = extract_file_arg(&args);

    let app = if let Some(path) = file_path {
        App::with_config_file(path)?
    } else {
        App::new()?
    };

    app.run()
}

/// Extract --file argument before clap parsing
fn extract_file_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if (args[i] == "--file" || args[i] == "-f") && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}
