use crate::cli::{actions::Action, commands, dispatch::handler, telemetry};
use anyhow::Result;

/// Start the CLI
/// # Errors
/// Returns an error if logging cannot be initialized or the arguments are inconsistent.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    // Global args are read from the subcommand so values given after it count.
    let leaf = matches.subcommand().map_or(&matches, |(_, sub)| sub);

    let verbosity_level = match leaf.get_one::<u8>("verbosity").map_or(0, |&v| v) {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let log_format = leaf
        .get_one::<String>("log-format")
        .map_or(telemetry::LogFormat::Pretty, |format| {
            telemetry::LogFormat::parse(format)
        });

    telemetry::init(Some(verbosity_level), log_format)?;

    let action = handler(&matches)?;

    Ok(action)
}
