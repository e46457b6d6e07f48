use std::io::Write;

use lifetube_application::LifeTubeClient;
use lifetube_domain::{Credentials, Registration};

use crate::error::{CliError, CliResult};
use crate::output;

pub async fn register(
    client: &LifeTubeClient,
    out: &mut (dyn Write + Send),
    username: String,
    email: String,
    password: String,
) -> CliResult<()> {
    let session = client
        .session()
        .register(&Registration::new(username, email, password))
        .await?;
    let user = session.user().ok_or(CliError::NotLoggedIn)?;
    writeln!(out, "Welcome to LifeTube, {}!", user.username)?;
    Ok(())
}

pub async fn login(
    client: &LifeTubeClient,
    out: &mut (dyn Write + Send),
    username: String,
    password: String,
) -> CliResult<()> {
    let session = client
        .session()
        .login(&Credentials::new(username, password))
        .await?;
    let user = session.user().ok_or(CliError::NotLoggedIn)?;
    writeln!(out, "Logged in as {}.", user.username)?;
    Ok(())
}

pub async fn logout(client: &LifeTubeClient, out: &mut (dyn Write + Send)) -> CliResult<()> {
    let was_logged_in = client.session().is_authenticated();
    client.session().logout().await?;
    if was_logged_in {
        writeln!(out, "Logged out.")?;
    } else {
        writeln!(out, "Not logged in.")?;
    }
    Ok(())
}

pub fn whoami(client: &LifeTubeClient, out: &mut (dyn Write + Send)) -> CliResult<()> {
    let user = super::require_login(client)?;
    output::user(out, client, &user)?;
    Ok(())
}
