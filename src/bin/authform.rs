use anyhow::Result;
use authform::cli;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Parse arguments and initialize logging
    let action = cli::start()?;

    // Handle the action
    action.execute().await?;

    Ok(())
}
