use std::process::ExitCode;

use clap::Parser;
use slidespeak_mcp::cli::{Arguments, Command, ExitStatus};
use slidespeak_mcp::config::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose);

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = serve(args) {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match slidespeak_mcp::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}

fn serve(args: Arguments) -> anyhow::Result<()> {
    let settings = Settings::resolve(args.api_key, args.base_url)?;
    slidespeak_mcp::mcp::run_server(&settings)
}

// Logs go to stderr: stdout carries command output, or the MCP transport
// when serving.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "slidespeak_mcp=debug"
    } else {
        "slidespeak_mcp=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
