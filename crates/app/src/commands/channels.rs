use std::io::Write;

use lifetube_application::LifeTubeClient;
use lifetube_domain::UserId;

use super::require_login;
use crate::error::CliResult;
use crate::output;

pub async fn show(client: &LifeTubeClient, out: &mut (dyn Write + Send), id: &str) -> CliResult<()> {
    let profile = client.users().profile(&UserId::parse(id)?).await?;
    output::channel(out, client, &profile)?;
    Ok(())
}

pub async fn toggle(client: &LifeTubeClient, out: &mut (dyn Write + Send), id: &str) -> CliResult<()> {
    require_login(client)?;
    let channel = UserId::parse(id)?;
    if client.users().toggle_subscription(&channel).await? {
        writeln!(out, "Subscribed to {channel}.")?;
    } else {
        writeln!(out, "Unsubscribed from {channel}.")?;
    }
    Ok(())
}

pub async fn subscriptions(
    client: &LifeTubeClient,
    out: &mut (dyn Write + Send),
    feed: bool,
) -> CliResult<()> {
    require_login(client)?;
    if feed {
        output::videos(out, &client.users().feed().await?)?;
        return Ok(());
    }
    let channels = client.users().subscriptions().await?;
    if channels.is_empty() {
        writeln!(out, "No subscriptions yet.")?;
    }
    for channel in &channels {
        output::user(out, client, channel)?;
    }
    Ok(())
}
