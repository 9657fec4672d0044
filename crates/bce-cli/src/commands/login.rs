use anyhow::Context as _;
use clap::Args;

use bce_client::BceCredentials;
use bce_client::api::aihc::AihcClient;

use crate::context::{CliContext, ClientCreationError};

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub access_key: Option<String>,
    #[arg(long)]
    pub secret_key: Option<String>,
}

pub fn prompt_login(context: &mut CliContext) -> anyhow::Result<()> {
    context
        .terminal()
        .print("Enter the access key pair from the console's Security Authentication page.");
    let access_key = context.terminal().read_line("Access key: ")?;
    let secret_key = context.terminal().read_password("Secret key")?;

    if access_key.trim().is_empty() || secret_key.trim().is_empty() {
        context.terminal().print("Login cancelled.");
        return Ok(());
    }

    context.set_credentials(BceCredentials::new(access_key.trim(), secret_key.trim()))?;
    Ok(())
}

/// Create a verified client, prompting for keys until one pair works.
pub fn get_client_and_login_if_needed(context: &mut CliContext) -> anyhow::Result<AihcClient> {
    loop {
        match context.create_aihc_client() {
            Ok(client) => return Ok(client),
            Err(ClientCreationError::NoCredentials | ClientCreationError::InvalidCredentials) => {
                prompt_login(context)?;
                if !context.has_credentials() {
                    anyhow::bail!("login aborted");
                }
            }
            Err(ClientCreationError::ServerConnectionError(msg)) => {
                anyhow::bail!("failed to connect to the server: {}", msg);
            }
        }
    }
}

pub fn handle_command(args: LoginArgs, context: &mut CliContext) -> anyhow::Result<()> {
    match (args.access_key, args.secret_key) {
        (Some(access_key), Some(secret_key)) => {
            context.set_credentials(BceCredentials::new(access_key, secret_key))?;
        }
        (None, None) => {
            prompt_login(context).context("Failed to prompt for access keys")?;
            if !context.has_credentials() {
                return Ok(());
            }
        }
        _ => anyhow::bail!("--access-key and --secret-key must be given together"),
    }

    context
        .create_aihc_client()
        .context("Failed to authenticate with the server")?;
    context.terminal().print_success("Logged in.");
    Ok(())
}
