use crate::authform::{FieldId, FormConfig, Panel};
use crate::cli::console;
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub config: FormConfig,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
    pub role: String,
    pub agree_terms: bool,
}

/// Switches to the signup panel, fills it in and submits it.
/// # Errors
/// Returns an error if the simulator cannot be built or the submission aborts.
pub async fn execute(args: Args) -> Result<()> {
    debug!(email = %args.email, role = %args.role, "signup");
    let form = console::controller(args.config)?;

    form.switch_panel(Panel::Signup);
    form.input(FieldId::SignupFirstName, args.first_name);
    form.input(FieldId::SignupLastName, args.last_name);
    form.input(FieldId::SignupEmail, args.email);
    form.input(FieldId::SignupPassword, args.password.expose_secret());
    form.input(FieldId::SignupRole, args.role);
    form.set_terms_agreed(args.agree_terms);

    let report = form.submit().await?;
    console::print_report(&report);
    form.notifier().flush().await;

    Ok(())
}
