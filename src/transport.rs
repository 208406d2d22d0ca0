//! GraphQL transport: the seam between project resolution and the network.
//!
//! Resolution logic only ever talks to a [`GraphQlTransport`]; the concrete
//! [`HttpTransport`] is built once by the caller and injected.

use crate::error::TransportError;
use crate::scope::GraphQlQuery;
use crate::types::Variables;
use async_trait::async_trait;
use serde_json::Value;

mod http;

pub use http::{HttpTransport, HttpTransportConfig};

/// Issues one named GraphQL query against a host.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Run `query` with `variables` and return the response `data` object.
    ///
    /// GraphQL-level `errors` must be surfaced as [`TransportError::Query`].
    async fn query(
        &self,
        host: &str,
        query: &GraphQlQuery,
        variables: &Variables,
    ) -> Result<Value, TransportError>;
}

/// Walk `query.root` down from `data`. A null anywhere along the path yields
/// `Value::Null`; a missing field is a decode error.
pub fn extract_root<'a>(query: &GraphQlQuery, data: &'a Value) -> Result<&'a Value, TransportError> {
    let mut current = data;
    for field in query.root {
        if current.is_null() {
            return Ok(current);
        }
        current = current.get(field).ok_or_else(|| TransportError::Decode {
            query: query.name.to_string(),
            message: format!("missing field '{}'", field),
        })?;
    }
    Ok(current)
}
