//! Video upload form.

use crate::error::{DomainError, DomainResult};
use crate::request::{MultipartForm, UploadFile};
use crate::video::DEFAULT_CATEGORY;

/// Message shown when an upload fails without a backend explanation.
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Failed to upload video";

/// Everything needed for `POST /videos/upload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUpload {
    /// Title, required.
    pub title: String,
    /// Description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Comma separated tags, sent verbatim.
    pub tags: String,
    /// The media file.
    pub video: UploadFile,
    /// Optional custom thumbnail.
    pub thumbnail: Option<UploadFile>,
}

impl VideoUpload {
    /// Creates an upload in the default category.
    #[must_use]
    pub fn new(title: impl Into<String>, video: UploadFile) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            tags: String::new(),
            video,
            thumbnail: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Attaches a thumbnail.
    #[must_use]
    pub fn thumbnail(mut self, thumbnail: UploadFile) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Checks the form before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUpload`] if the title is blank or the
    /// video file is empty.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidUpload("title is required".to_string()));
        }
        if self.video.bytes.is_empty() {
            return Err(DomainError::InvalidUpload(
                "please select a video file".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates and converts into the multipart form the backend expects.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`validate`](Self::validate).
    pub fn into_form(self) -> DomainResult<MultipartForm> {
        self.validate()?;
        let mut form = MultipartForm::new().file("video", self.video);
        if let Some(thumbnail) = self.thumbnail {
            form = form.file("thumbnail", thumbnail);
        }
        Ok(form
            .text("title", self.title)
            .text("description", self.description)
            .text("category", self.category)
            .text("tags", self.tags))
    }
}
