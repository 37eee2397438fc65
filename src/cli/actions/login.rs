use crate::authform::{FieldId, FormConfig};
use crate::cli::console;
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub config: FormConfig,
    pub email: String,
    pub password: SecretString,
}

/// Types the credentials into the login panel and submits it.
/// # Errors
/// Returns an error if the simulator cannot be built or the submission aborts.
pub async fn execute(args: Args) -> Result<()> {
    debug!(email = %args.email, "login");
    let form = console::controller(args.config)?;

    form.input(FieldId::LoginEmail, args.email);
    form.input(FieldId::LoginPassword, args.password.expose_secret());

    let report = form.submit().await?;
    console::print_report(&report);
    form.notifier().flush().await;

    Ok(())
}
