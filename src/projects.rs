//! Project resolution across scopes.
//!
//! [`ProjectsApi`] is the only entry point the presentation layer uses. It
//! owns an injected [`GraphQlTransport`] and offers three operations:
//!
//! - [`ProjectsApi::list_for_scope`]: one scope, chosen by whether an
//!   organization was named.
//! - [`ProjectsApi::list_all`]: current user, organization (when named), and
//!   repository listings concatenated in that order. Projects visible through
//!   more than one scope appear once per scope.
//! - [`ProjectsApi::locate`]: single project by number, trying current user,
//!   repository, then organization, and reporting every tier's failure when
//!   none resolves it.
//!
//! All calls run strictly in sequence; nothing here spawns tasks.

use crate::transport::GraphQlTransport;
use std::sync::Arc;

mod collector;
mod lister;
mod locator;

pub use collector::collect;

use crate::scope::MAX_PAGE_SIZE;

/// Facade over project listing and lookup.
#[derive(Clone)]
pub struct ProjectsApi {
    transport: Arc<dyn GraphQlTransport>,
    page_size: u32,
}

impl ProjectsApi {
    pub fn new(transport: Arc<dyn GraphQlTransport>) -> Self {
        Self {
            transport,
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Page size for listing queries, clamped to `1..=100`.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn transport(&self) -> &dyn GraphQlTransport {
        self.transport.as_ref()
    }
}
