//! Plain-text rendering of backend records.

use std::io::Write;

use chrono::{DateTime, Utc};
use lifetube_application::LifeTubeClient;
use lifetube_domain::format::{format_count, format_duration, format_subscribers, time_ago};
use lifetube_domain::{ChannelProfile, Comment, User, Video};

/// One line per video: id, title, channel, views, age.
pub fn video_line(video: &Video, now: DateTime<Utc>) -> String {
    let channel = video
        .owner
        .as_ref()
        .map_or("unknown channel", |owner| owner.username.as_str());
    let mut line = format!(
        "[{}] {} - {} - {} views",
        video.id,
        video.title,
        channel,
        format_count(video.views)
    );
    if let Some(created) = video.created_at {
        line.push_str(" - ");
        line.push_str(&time_ago(created, now));
    }
    if video.duration.is_some() {
        line.push_str(" (");
        line.push_str(&format_duration(video.duration));
        line.push(')');
    }
    line
}

/// Writes a video list, or a placeholder when empty.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn videos(out: &mut dyn Write, videos: &[Video]) -> std::io::Result<()> {
    if videos.is_empty() {
        return writeln!(out, "No videos found.");
    }
    let now = Utc::now();
    for video in videos {
        writeln!(out, "{}", video_line(video, now))?;
    }
    Ok(())
}

/// Writes the full detail view of a video.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn video_detail(
    out: &mut dyn Write,
    client: &LifeTubeClient,
    video: &Video,
    subscribed: Option<bool>,
) -> std::io::Result<()> {
    writeln!(out, "{}", video.title)?;
    writeln!(
        out,
        "{} views  {} likes  {} dislikes",
        format_count(video.views),
        format_count(video.like_count),
        format_count(video.dislike_count)
    )?;
    if let Some(owner) = &video.owner {
        let badge = match subscribed {
            Some(true) => " [subscribed]",
            _ => "",
        };
        writeln!(
            out,
            "Channel: {} ({}){badge}",
            owner.username,
            format_subscribers(owner.subscriber_count)
        )?;
    }
    if let Some(category) = &video.category {
        writeln!(out, "Category: {category}")?;
    }
    if !video.tags.is_empty() {
        writeln!(out, "Tags: {}", video.tags.join(", "))?;
    }
    if let Some(url) = video.video_url.as_deref().and_then(|p| client.media_url(p)) {
        writeln!(out, "Watch: {url}")?;
    }
    if !video.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", video.description)?;
    }
    Ok(())
}

/// Writes a comment thread.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn comments(out: &mut dyn Write, comments: &[Comment]) -> std::io::Result<()> {
    if comments.is_empty() {
        return writeln!(out, "No comments yet.");
    }
    let now = Utc::now();
    for comment in comments {
        let author = comment
            .author
            .as_ref()
            .map_or("anonymous", |a| a.username.as_str());
        match comment.created_at {
            Some(at) => writeln!(
                out,
                "[{}] {author} ({}): {}",
                comment.id,
                time_ago(at, now),
                comment.text
            )?,
            None => writeln!(out, "[{}] {author}: {}", comment.id, comment.text)?,
        }
    }
    Ok(())
}

/// Writes a user summary line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn user(out: &mut dyn Write, client: &LifeTubeClient, user: &User) -> std::io::Result<()> {
    write!(
        out,
        "{} [{}] - {}",
        user.username,
        user.id,
        format_subscribers(user.subscriber_count)
    )?;
    match user.avatar_url.as_deref().and_then(|p| client.media_url(p)) {
        Some(avatar) => writeln!(out, " - {avatar}"),
        None => writeln!(out),
    }
}

/// Writes a channel page.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn channel(
    out: &mut dyn Write,
    client: &LifeTubeClient,
    channel: &ChannelProfile,
) -> std::io::Result<()> {
    user(out, client, &channel.user)?;
    writeln!(out)?;
    videos(out, &channel.videos)
}
