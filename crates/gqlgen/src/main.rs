mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let result = match cli.cmd.take() {
        Some(command) => command.run(cli).await,
        None => match cli.run_default().await {
            Ok(()) => CommandResult::success(),
            Err(e) => CommandResult::stderr(format_args!("{e:#}")),
        },
    };

    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

/// Maps a `LOG_LEVEL` environment value onto a tracing level.
fn parse_log_level(value: &str) -> Result<tracing::Level, String> {
    match value.trim() {
        "DEBUG" | "debug" | "VERBOSE" | "verbose" => Ok(tracing::Level::DEBUG),
        "INFO" | "info" => Ok(tracing::Level::INFO),
        "TRACE" | "trace" => Ok(tracing::Level::TRACE),
        "WARN" | "warn" => Ok(tracing::Level::WARN),
        other => Err(format!(
            "Invalid `LOG_LEVEL` environment variable value: `{other}`"
        )),
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_log_level(&value).unwrap_or_else(|warning| {
                    log_level_warnings.push(warning);
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    // Logs go to stderr so that JSON written to stdout stays parseable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
