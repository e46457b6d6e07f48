//! Request payload shapes.
//!
//! The backend accepts exactly two payload kinds: JSON for CRUD calls and
//! multipart form data for media uploads.

use serde_json::Value;

/// Payload attached to an [`ApiRequest`](super::ApiRequest).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    None,
    /// JSON document, sent as `application/json`.
    Json(Value),
    /// Multipart form, sent as `multipart/form-data` with a generated boundary.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// The `Content-Type` the transport must send, if it is fixed.
    ///
    /// Multipart bodies return `None`: the boundary is chosen by the transport.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some("application/json"),
            Self::None | Self::Multipart(_) => None,
        }
    }

    /// Check if this is a multipart form.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// An in-memory file ready for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported to the backend.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Creates an upload file.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Value of a single multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    /// Plain text field.
    Text(String),
    /// File field.
    File(UploadFile),
}

/// A named multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: PartValue,
}

/// Ordered multipart form description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
        self
    }

    /// Appends a file field.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, file: UploadFile) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::File(file),
        });
        self
    }

    /// Fields in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Looks up the first field with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PartValue> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| &part.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_per_kind() {
        assert_eq!(
            RequestBody::Json(serde_json::json!({})).content_type(),
            Some("application/json")
        );
        assert_eq!(RequestBody::None.content_type(), None);
        assert!(RequestBody::Multipart(MultipartForm::new()).is_multipart());
    }

    #[test]
    fn test_form_keeps_order_and_lookup() {
        let form = MultipartForm::new()
            .file("video", UploadFile::new("a.mp4", "video/mp4", vec![1, 2]))
            .text("title", "A");
        assert_eq!(form.parts()[0].name, "video");
        assert_eq!(form.get("title"), Some(&PartValue::Text("A".to_string())));
        assert!(form.get("missing").is_none());
    }
}
