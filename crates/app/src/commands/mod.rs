//! Command implementations.

mod auth;
mod channels;
mod comments;
mod videos;

use std::io::Write;

use lifetube_application::{LifeTubeClient, SessionError};
use lifetube_domain::{SessionStatus, User};
use lifetube_infrastructure::ClientSettings;
use tracing::{debug, warn};

use crate::cli::{Cli, Command};
use crate::error::{CliError, CliResult};

/// Wires the client, restores any stored session, and runs the command.
///
/// # Errors
///
/// Returns the first failure; nothing is retried.
pub async fn run(cli: Cli, out: &mut (dyn Write + Send)) -> CliResult<()> {
    let settings = ClientSettings::resolve(cli.api_url.as_deref(), cli.session_file, cli.timeout)?;
    let client = settings.connect()?;
    restore(&client).await;

    match cli.command {
        Command::Register {
            username,
            email,
            password,
        } => auth::register(&client, out, username, email, password).await,
        Command::Login { username, password } => {
            auth::login(&client, out, username, password).await
        }
        Command::Logout => auth::logout(&client, out).await,
        Command::Whoami => auth::whoami(&client, out),
        Command::Videos(cmd) => videos::run(&client, out, cmd).await,
        Command::Comments(cmd) => comments::run(&client, out, cmd).await,
        Command::Channel { id } => channels::show(&client, out, &id).await,
        Command::Subscribe { id } => channels::toggle(&client, out, &id).await,
        Command::Subscriptions { feed } => channels::subscriptions(&client, out, feed).await,
    }
}

/// A stale or unreachable session degrades to anonymous use.
async fn restore(client: &LifeTubeClient) {
    match client.session().restore().await {
        Ok(SessionStatus::Authenticated(user)) => debug!(user = %user.username, "session active"),
        Ok(_) => debug!("no stored session"),
        Err(SessionError::NetworkUnavailable(e)) => {
            warn!(error = %e, "could not reach the backend to restore the session");
        }
        Err(e) => warn!(error = %e, "stored session is no longer valid"),
    }
}

fn require_login(client: &LifeTubeClient) -> CliResult<User> {
    client.session().current_user().ok_or(CliError::NotLoggedIn)
}
