use anyhow::{Context, Result};
use clap::Parser;
use nodectl_console::{
    CommandParserExecutor, ConsoleOutput, ConsoleSettings, LoggingExecutor, Shell, VERSION,
};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(
    name = "nodectl",
    version = VERSION,
    about = "Interactive node control console"
)]
struct Cli {
    /// Path to the TOML settings file.
    #[arg(long, default_value = "nodectl.toml", value_name = "PATH")]
    config: PathBuf,

    /// Overrides the configured log filter (e.g. `debug`, `nodectl=trace`).
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Overrides the configured prompt.
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = ConsoleSettings::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if let Some(prompt) = cli.prompt {
        settings.shell.prompt = prompt;
    }

    let reload_handle = init_tracing(&settings.logging.level);
    info!(
        target: "nodectl",
        config = %cli.config.display(),
        prompt = %settings.shell.prompt,
        "nodectl console starting"
    );

    let executor = LoggingExecutor::new().with_level_hook(Box::new(move |level: Level| {
        match reload_handle.reload(EnvFilter::new(level.as_str().to_ascii_lowercase())) {
            Ok(()) => true,
            Err(err) => {
                warn!(target: "nodectl", error = %err, "failed to reload log filter");
                false
            }
        }
    }));

    let dispatcher = CommandParserExecutor::with_output(executor, ConsoleOutput::stdout())
        .with_address_versions(settings.address_versions());
    let mut shell = Shell::new(dispatcher, settings.shell.prompt.clone());

    shell
        .run(io::stdin().lock())
        .context("console session failed")?;

    let stopped = shell.dispatcher().executor().is_stopped();
    info!(target: "nodectl", daemon_stopped = stopped, "exiting");
    Ok(())
}

fn init_tracing(default_filter: &str) -> reload::Handle<EnvFilter, Registry> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let (filter, handle) = reload::Layer::new(env_filter);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
    handle
}
