//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// LifeTube - browse, upload and discuss videos from the terminal.
#[derive(Debug, Parser)]
#[command(name = "lifetube")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend API root.
    #[arg(long, env = "LIFETUBE_API_URL")]
    pub api_url: Option<String>,

    /// Where the session token is kept.
    #[arg(long, env = "LIFETUBE_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, env = "LIFETUBE_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account and log into it.
    Register {
        /// Unique display name.
        username: String,
        /// Contact address.
        email: String,
        /// Account password.
        #[arg(long, env = "LIFETUBE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log in and remember the session.
    Login {
        /// Account name.
        username: String,
        /// Account password.
        #[arg(long, env = "LIFETUBE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session.
    Logout,

    /// Show the logged-in user.
    Whoami,

    /// Browse, upload and rate videos.
    #[command(subcommand)]
    Videos(VideosCommand),

    /// Read and write comments.
    #[command(subcommand)]
    Comments(CommentsCommand),

    /// Show a channel and its uploads.
    Channel {
        /// Channel (user) identifier.
        id: String,
    },

    /// Subscribe to a channel, or unsubscribe if already subscribed.
    Subscribe {
        /// Channel (user) identifier.
        id: String,
    },

    /// List subscribed channels.
    Subscriptions {
        /// Show the latest videos from subscribed channels instead.
        #[arg(long)]
        feed: bool,
    },
}

/// Video commands.
#[derive(Debug, Subcommand)]
pub enum VideosCommand {
    /// List videos.
    List(ListArgs),

    /// List the most viewed videos.
    Trending,

    /// Show one video with its comments and related videos.
    Show {
        /// Video identifier.
        id: String,
    },

    /// Upload a video file.
    Upload(UploadArgs),

    /// Like a video; liking again removes the like.
    Like {
        /// Video identifier.
        id: String,
    },

    /// Dislike a video; disliking again removes the dislike.
    Dislike {
        /// Video identifier.
        id: String,
    },

    /// Delete one of your videos.
    Delete {
        /// Video identifier.
        id: String,
    },
}

/// Filters for `videos list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only this category; "All" lists everything.
    #[arg(long)]
    pub category: Option<String>,

    /// Free-text search.
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of results.
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Arguments for `videos upload`.
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Video file to upload.
    pub file: PathBuf,

    /// Title shown to viewers.
    #[arg(long)]
    pub title: String,

    /// Longer description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Category name.
    #[arg(long)]
    pub category: Option<String>,

    /// Comma-separated tags.
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Optional thumbnail image.
    #[arg(long)]
    pub thumbnail: Option<PathBuf>,
}

/// Comment commands.
#[derive(Debug, Subcommand)]
pub enum CommentsCommand {
    /// List comments on a video.
    List {
        /// Video identifier.
        video: String,
    },

    /// Comment on a video.
    Add {
        /// Video identifier.
        video: String,
        /// Comment text.
        text: String,
    },

    /// Delete one of your comments.
    Delete {
        /// Comment identifier.
        id: String,
    },
}
