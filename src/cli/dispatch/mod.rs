use crate::authform::FormConfig;
use crate::cli::actions::{login, replay, signup, Action};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// # Errors
/// Returns an error if the subcommand is unknown or a timing argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .context("missing subcommand: login, signup or replay")?;

    let config = form_config(sub_m)?;

    match name {
        "login" => Ok(Action::Login(login::Args {
            config,
            email: text(sub_m, "email"),
            password: SecretString::from(text(sub_m, "password")),
        })),
        "signup" => Ok(Action::Signup(signup::Args {
            config,
            first_name: text(sub_m, "first-name"),
            last_name: text(sub_m, "last-name"),
            email: text(sub_m, "email"),
            password: SecretString::from(text(sub_m, "password")),
            role: text(sub_m, "role"),
            agree_terms: sub_m.get_flag("agree-terms"),
        })),
        "replay" => Ok(Action::Replay(replay::Args {
            config,
            script: sub_m
                .get_one::<String>("script")
                .map(PathBuf::from)
                .context("missing required argument: <FILE>")?,
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}

/// Builds the controller configuration from the global timing arguments.
///
/// # Errors
/// Returns an error if one of the timing arguments is absent.
pub fn form_config(matches: &clap::ArgMatches) -> Result<FormConfig> {
    let millis = |name: &str| -> Result<Duration> {
        matches
            .get_one::<u64>(name)
            .copied()
            .map(Duration::from_millis)
            .with_context(|| format!("missing required argument: --{name}"))
    };

    Ok(FormConfig {
        login_delay: millis("login-delay-ms")?,
        signup_delay: millis("signup-delay-ms")?,
        follow_up_delay: millis("follow-up-delay-ms")?,
        notification_ttl: millis("notification-ttl-ms")?,
        success_rate: matches
            .get_one::<f64>("success-rate")
            .copied()
            .unwrap_or(FormConfig::SUCCESS_RATE),
    })
}

fn text(matches: &clap::ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}
