use crate::cli::actions::{login, replay, signup, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Signup(args) => signup::execute(args).await,
        Action::Replay(args) => replay::execute(args).await,
    }
}
