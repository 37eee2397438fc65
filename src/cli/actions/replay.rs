use crate::authform::{FormConfig, FormEvent};
use crate::cli::console;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub config: FormConfig,
    pub script: PathBuf,
}

/// Applies every event of the script, in order, to a fresh controller.
/// # Errors
/// Returns an error if the script cannot be read or parsed, or a submission aborts.
pub async fn execute(args: Args) -> Result<()> {
    let script = tokio::fs::read_to_string(&args.script)
        .await
        .with_context(|| format!("Failed to read event script at {}", args.script.display()))?;
    let events = FormEvent::parse_script(&script)
        .with_context(|| format!("Invalid event script {}", args.script.display()))?;
    info!(events = events.len(), script = %args.script.display(), "replaying events");

    let form = console::controller(args.config)?;

    for (index, event) in events.into_iter().enumerate() {
        debug!(index, event = event.name(), "event");
        if let Some(report) = form.dispatch(event).await? {
            console::print_report(&report);
        }
    }
    form.notifier().flush().await;

    Ok(())
}
