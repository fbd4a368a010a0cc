//! The probe command.
//!
//! Opens the native runtime, runs the check sequence, and renders the report.
//! [`CommandResult`] carries the process exit code back to `main`.

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::probe::{self, HumanFormatter, JsonFormatter, OutputFormat, ProbeOutcome};
use crate::runtime::{ApplicationType, NativeRuntime};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Executes the probe against the native runtime.
pub struct ProbeCommand {
    library: Option<PathBuf>,
    app_type: ApplicationType,
    format: OutputFormat,
    quiet: bool,
}

impl ProbeCommand {
    /// Build the command from parsed CLI arguments.
    pub fn new(cli: &Cli) -> Self {
        Self {
            library: cli.library.clone(),
            app_type: cli.app_type,
            format: cli.format,
            quiet: cli.quiet,
        }
    }

    /// Execute the probe and render the report.
    ///
    /// Human format: success prints the result line to stdout, failure
    /// propagates so `main` prints it to stderr. JSON format: the report is
    /// printed either way and the exit code alone signals failure.
    pub fn execute(&self) -> Result<CommandResult> {
        if !self.quiet && self.format == OutputFormat::Human {
            println!("VR runtime probe");
        }

        let result = self.probe();
        let stdout = std::io::stdout();

        match self.format {
            OutputFormat::Human => {
                let outcome = result?;
                HumanFormatter.format(&outcome, &mut stdout.lock())?;
                Ok(CommandResult::success())
            }
            OutputFormat::Json => {
                JsonFormatter.format(&result, &mut stdout.lock())?;
                Ok(match result {
                    Ok(_) => CommandResult::success(),
                    Err(_) => CommandResult::failure(1),
                })
            }
        }
    }

    /// Load the runtime library and run the check sequence.
    fn probe(&self) -> Result<ProbeOutcome> {
        let runtime = match &self.library {
            Some(path) => NativeRuntime::load_path(path)?,
            None => NativeRuntime::load()?,
        };
        probe::sequence::run(&runtime, self.app_type)
    }
}
