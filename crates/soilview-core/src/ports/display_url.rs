use crate::error::Result;
use crate::models::{DisplayUrl, FileHandle};

/// Port for issuing and revoking transient preview URLs
pub trait DisplayUrlProvider {
    /// Create a display URL for a local file
    fn acquire(&mut self, handle: &FileHandle) -> Result<DisplayUrl>;

    /// Revoke a display URL previously returned by `acquire`
    fn release(&mut self, url: &DisplayUrl);
}
