use std::io::Write;

use lifetube_application::{GatewayError, LifeTubeClient};
use lifetube_domain::{Reaction, UPLOAD_FALLBACK_MESSAGE, VideoId, VideoQuery, VideoUpload};
use lifetube_infrastructure::load_upload_file;
use tracing::warn;

use super::require_login;
use crate::cli::{ListArgs, UploadArgs, VideosCommand};
use crate::error::{CliError, CliResult};
use crate::output;

pub async fn run(client: &LifeTubeClient, out: &mut (dyn Write + Send), cmd: VideosCommand) -> CliResult<()> {
    match cmd {
        VideosCommand::List(args) => list(client, out, args).await,
        VideosCommand::Trending => {
            let videos = client.videos().trending().await?;
            output::videos(out, &videos)?;
            Ok(())
        }
        VideosCommand::Show { id } => show(client, out, &VideoId::parse(id)?).await,
        VideosCommand::Upload(args) => upload(client, out, args).await,
        VideosCommand::Like { id } => react(client, out, &VideoId::parse(id)?, Reaction::Like).await,
        VideosCommand::Dislike { id } => {
            react(client, out, &VideoId::parse(id)?, Reaction::Dislike).await
        }
        VideosCommand::Delete { id } => {
            require_login(client)?;
            let id = VideoId::parse(id)?;
            client.videos().delete(&id).await?;
            writeln!(out, "Deleted video {id}.")?;
            Ok(())
        }
    }
}

async fn list(client: &LifeTubeClient, out: &mut (dyn Write + Send), args: ListArgs) -> CliResult<()> {
    let mut query = VideoQuery::new();
    if let Some(category) = args.category {
        query = query.category(category);
    }
    if let Some(search) = args.search {
        query = query.search(search);
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    let videos = client.videos().list(&query).await?;
    output::videos(out, &videos)?;
    Ok(())
}

async fn show(client: &LifeTubeClient, out: &mut (dyn Write + Send), id: &VideoId) -> CliResult<()> {
    if let Err(e) = client.videos().increment_view(id).await {
        warn!(video = %id, error = %e, "failed to record view");
    }
    let video = client.videos().get(id).await?;

    let subscribed = match (&video.owner, client.session().is_authenticated()) {
        (Some(owner), true) => Some(client.users().is_subscribed_or_default(&owner.id).await),
        _ => None,
    };
    output::video_detail(out, client, &video, subscribed)?;

    writeln!(out)?;
    writeln!(out, "Comments:")?;
    let comments = client.comments().list(id).await?;
    output::comments(out, &comments)?;

    writeln!(out)?;
    writeln!(out, "Related:")?;
    output::videos(out, &client.videos().related(id).await)?;
    Ok(())
}

async fn upload(client: &LifeTubeClient, out: &mut (dyn Write + Send), args: UploadArgs) -> CliResult<()> {
    require_login(client)?;

    let mut upload = VideoUpload::new(args.title, load_upload_file(&args.file).await?)
        .description(args.description)
        .tags(args.tags);
    if let Some(category) = args.category {
        upload = upload.category(category);
    }
    if let Some(thumbnail) = &args.thumbnail {
        upload = upload.thumbnail(load_upload_file(thumbnail).await?);
    }

    let video = client.videos().upload(upload).await.map_err(|e| match e {
        GatewayError::InvalidRequest(invalid) => CliError::Invalid(invalid),
        other => CliError::Upload(other.user_message(UPLOAD_FALLBACK_MESSAGE)),
    })?;
    writeln!(out, "Uploaded \"{}\" as video {}.", video.title, video.id)?;
    Ok(())
}

async fn react(
    client: &LifeTubeClient,
    out: &mut (dyn Write + Send),
    id: &VideoId,
    reaction: Reaction,
) -> CliResult<()> {
    require_login(client)?;
    client.videos().react(id, reaction).await?;
    let video = client.videos().get(id).await?;
    writeln!(
        out,
        "{}: {} likes, {} dislikes",
        video.title, video.like_count, video.dislike_count
    )?;
    Ok(())
}
