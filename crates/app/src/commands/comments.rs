use std::io::Write;

use lifetube_application::LifeTubeClient;
use lifetube_domain::{CommentId, VideoId};

use super::require_login;
use crate::cli::CommentsCommand;
use crate::error::CliResult;
use crate::output;

pub async fn run(
    client: &LifeTubeClient,
    out: &mut (dyn Write + Send),
    cmd: CommentsCommand,
) -> CliResult<()> {
    match cmd {
        CommentsCommand::List { video } => {
            let comments = client.comments().list(&VideoId::parse(video)?).await?;
            output::comments(out, &comments)?;
        }
        CommentsCommand::Add { video, text } => {
            require_login(client)?;
            let comments = client
                .comments()
                .post_and_reload(&VideoId::parse(video)?, &text)
                .await?;
            output::comments(out, &comments)?;
        }
        CommentsCommand::Delete { id } => {
            require_login(client)?;
            let id = CommentId::parse(id)?;
            client.comments().delete(&id).await?;
            writeln!(out, "Deleted comment {id}.")?;
        }
    }
    Ok(())
}
