//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, TransportError};

const AUTH_HINT: &str =
    "hint: set GH_TOKEN (or github.token in config) to a token with the `project` scope";

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    if is_auth_failure(e) {
        return format!("{}\n{}", e, AUTH_HINT);
    }
    e.to_string()
}

fn is_auth_failure(e: &ApiError) -> bool {
    let unauthorized = |t: &TransportError| {
        matches!(
            t,
            TransportError::Unauthorized { .. } | TransportError::Forbidden { .. }
        )
    };
    match e {
        ApiError::Transport(t) => unauthorized(t),
        ApiError::Listing(l) => unauthorized(&l.source),
        ApiError::NotFound(n) => n.transport_errors().any(unauthorized),
        _ => false,
    }
}
