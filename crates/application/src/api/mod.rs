//! Typed endpoint namespaces over the gateway.
//!
//! Each namespace is a thin wrapper: fixed method and path, typed input,
//! the response envelope unwrapped.

mod auth;
mod comments;
mod users;
mod videos;

pub use auth::AuthApi;
pub use comments::CommentsApi;
pub use users::UsersApi;
pub use videos::VideosApi;

use lifetube_domain::{ApiRequest, DomainError};
use serde::Serialize;

use crate::error::GatewayResult;

/// Attaches a JSON body, reporting encoding failures as invalid requests.
fn with_json<T: Serialize + ?Sized>(request: ApiRequest, body: &T) -> GatewayResult<ApiRequest> {
    request
        .json(body)
        .map_err(|e| DomainError::InvalidBody(e.to_string()).into())
}
