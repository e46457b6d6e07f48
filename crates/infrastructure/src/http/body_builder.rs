//! Turns the domain request body into what reqwest sends, and loads files
//! from disk for uploads.

use std::path::Path;

use lifetube_domain::request::PartValue;
use lifetube_domain::{MultipartForm, RequestBody, UploadFile};
use reqwest::multipart::{Form, Part};

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// The file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Offending path.
        path: String,
    },

    /// The file exists but could not be read.
    #[error("Failed to read file: {message}")]
    FileReadError {
        /// Path and cause.
        message: String,
    },

    /// A part carried a content type reqwest refuses.
    #[error("Invalid MIME type for {name}: {message}")]
    InvalidMime {
        /// Part name.
        name: String,
        /// Cause.
        message: String,
    },

    /// The JSON body could not be encoded.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Cause.
        message: String,
    },
}

/// A body ready to attach to a reqwest builder.
pub enum BuiltBody {
    /// No body.
    None,
    /// Encoded JSON document.
    Json(Vec<u8>),
    /// Multipart form; reqwest supplies the boundary and its content type.
    Multipart(Form),
}

impl std::fmt::Debug for BuiltBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Json(bytes) => write!(f, "Json({} bytes)", bytes.len()),
            Self::Multipart(form) => write!(f, "Multipart(boundary={})", form.boundary()),
        }
    }
}

/// Builds the wire body for a request.
///
/// # Errors
///
/// Returns an error if JSON encoding fails or a part has an unusable
/// content type.
pub fn build_body(body: &RequestBody) -> Result<BuiltBody, BodyBuildError> {
    match body {
        RequestBody::None => Ok(BuiltBody::None),
        RequestBody::Json(value) => serde_json::to_vec(value)
            .map(BuiltBody::Json)
            .map_err(|e| BodyBuildError::SerializationError {
                message: e.to_string(),
            }),
        RequestBody::Multipart(form) => build_multipart_form(form).map(BuiltBody::Multipart),
    }
}

/// Builds a reqwest form, keeping part order.
fn build_multipart_form(fields: &MultipartForm) -> Result<Form, BodyBuildError> {
    let mut form = Form::new();

    for field in fields.parts() {
        match &field.value {
            PartValue::Text(value) => {
                form = form.text(field.name.clone(), value.clone());
            }
            PartValue::File(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.content_type)
                    .map_err(|e| BodyBuildError::InvalidMime {
                        name: field.name.clone(),
                        message: e.to_string(),
                    })?;
                form = form.part(field.name.clone(), part);
            }
        }
    }

    Ok(form)
}

/// Reads a file for upload, guessing its content type from the extension.
///
/// # Errors
///
/// Returns [`BodyBuildError::FileNotFound`] or
/// [`BodyBuildError::FileReadError`].
pub async fn load_upload_file(path: &Path) -> Result<UploadFile, BodyBuildError> {
    let content = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BodyBuildError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            BodyBuildError::FileReadError {
                message: format!("{}: {}", path.display(), e),
            }
        }
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();

    let content_type = mime_guess::from_path(path).first_or(mime::APPLICATION_OCTET_STREAM);

    Ok(UploadFile::new(file_name, content_type.essence_str(), content))
}
