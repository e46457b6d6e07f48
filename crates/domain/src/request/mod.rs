//! Outbound request description.

mod body;
mod method;
mod spec;

pub use body::{FormPart, MultipartForm, PartValue, RequestBody, UploadFile};
pub use method::HttpMethod;
pub use spec::ApiRequest;
