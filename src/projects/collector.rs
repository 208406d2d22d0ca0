//! Cursor-driven pagination over a listing query.

use crate::error::TransportError;
use crate::scope::{GraphQlQuery, CURSOR_VARIABLE};
use crate::transport::{extract_root, GraphQlTransport};
use crate::types::{Page, Project, Variables};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Fetch every page of `query` and return the projects in server order.
///
/// The cursor variable starts out null and is replaced by each page's
/// `endCursor` until the server reports no further pages. There is no page
/// limit. A failure on any page discards everything collected so far.
pub async fn collect(
    transport: &dyn GraphQlTransport,
    host: &str,
    query: &GraphQlQuery,
    initial_variables: Variables,
) -> Result<Vec<Project>, TransportError> {
    let mut variables = initial_variables;
    variables.insert(CURSOR_VARIABLE.to_string(), Value::Null);

    let mut projects = Vec::new();
    let mut pages = 0usize;
    loop {
        let data = transport.query(host, query, &variables).await?;
        let page = decode_page(query, &data)?;
        pages += 1;

        debug!(
            query = query.name,
            page = pages,
            count = page.nodes.len(),
            has_next_page = page.page_info.has_next_page,
            "Fetched page"
        );

        projects.extend(page.nodes);

        if !page.page_info.has_next_page {
            break;
        }
        let cursor = page.page_info.end_cursor.ok_or_else(|| TransportError::Decode {
            query: query.name.to_string(),
            message: "hasNextPage is true but endCursor is missing".to_string(),
        })?;
        variables.insert(CURSOR_VARIABLE.to_string(), Value::String(cursor));
    }

    Ok(projects)
}

fn decode_page(query: &GraphQlQuery, data: &Value) -> Result<Page, TransportError> {
    let connection = extract_root(query, data)?;
    if connection.is_null() {
        return Err(TransportError::Decode {
            query: query.name.to_string(),
            message: "project connection is null".to_string(),
        });
    }
    Page::deserialize(connection).map_err(|e| TransportError::Decode {
        query: query.name.to_string(),
        message: e.to_string(),
    })
}
