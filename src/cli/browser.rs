//! Opening project URLs in the user's browser.

use crate::error::ApiError;
use tracing::info;

pub trait Browser {
    fn browse(&self, url: &str) -> Result<(), ApiError>;
}

/// System default browser via the `open` crate.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn browse(&self, url: &str) -> Result<(), ApiError> {
        open::that(url).map_err(|e| ApiError::BrowserFailed(format!("{}: {}", url, e)))?;
        info!(url = %url, "Opened browser");
        Ok(())
    }
}
