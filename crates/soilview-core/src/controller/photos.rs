//! Photo previews with scoped display URLs.
//!
//! Every preview owns at most one live display URL. The URL is released
//! when the preview image reports it has loaded, when the selection is
//! replaced, or when the manager is dropped, whichever comes first. Each URL
//! reaches the provider's `release` exactly once.

use crate::error::Result;
use crate::models::{DisplayUrl, FileHandle, PhotoId};
use crate::ports::DisplayUrlProvider;

/// One selected file and its preview URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPreview {
    id: PhotoId,
    handle: FileHandle,
    url: Option<DisplayUrl>,
}

impl PhotoPreview {
    pub fn id(&self) -> PhotoId {
        self.id
    }

    pub fn handle(&self) -> &FileHandle {
        &self.handle
    }

    /// The preview URL, until it is released
    pub fn display_url(&self) -> Option<&DisplayUrl> {
        self.url.as_ref()
    }

    pub fn is_released(&self) -> bool {
        self.url.is_none()
    }
}

pub struct PhotoPreviewManager<P: DisplayUrlProvider> {
    provider: P,
    selection: Vec<PhotoPreview>,
    next_id: u64,
}

impl<P: DisplayUrlProvider> PhotoPreviewManager<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            selection: Vec::new(),
            next_id: 0,
        }
    }

    /// Replace the selection with `handles`.
    ///
    /// URLs still held by the previous selection are released first. If the
    /// provider fails part way, the URLs acquired so far are released and the
    /// selection is left empty.
    pub fn select_photos<I>(&mut self, handles: I) -> Result<&[PhotoPreview]>
    where
        I: IntoIterator<Item = FileHandle>,
    {
        self.release_all();
        self.selection.clear();

        let mut selection = Vec::new();
        for handle in handles {
            match self.provider.acquire(&handle) {
                Ok(url) => {
                    let id = PhotoId(self.next_id);
                    self.next_id += 1;
                    selection.push(PhotoPreview {
                        id,
                        handle,
                        url: Some(url),
                    });
                }
                Err(e) => {
                    tracing::error!(file = %handle.name, error = %e, "Failed to acquire display URL");
                    for preview in &mut selection {
                        release_preview(&mut self.provider, preview);
                    }
                    return Err(e);
                }
            }
        }

        tracing::info!(count = selection.len(), "Photo selection replaced");
        self.selection = selection;
        Ok(&self.selection)
    }

    /// Image-load callback for a preview.
    ///
    /// Returns `true` if this call released the URL. Repeated calls and ids
    /// from a replaced selection are ignored.
    pub fn release_on_load(&mut self, id: PhotoId) -> bool {
        match self.selection.iter_mut().find(|p| p.id == id) {
            Some(preview) => release_preview(&mut self.provider, preview),
            None => {
                tracing::debug!(photo = id.0, "Load event for a photo no longer selected");
                false
            }
        }
    }

    pub fn selection(&self) -> &[PhotoPreview] {
        &self.selection
    }

    /// Handles in the current selection
    pub fn active_handles(&self) -> impl Iterator<Item = &FileHandle> {
        self.selection.iter().map(|p| &p.handle)
    }

    /// Number of previews whose URL has not been released yet
    pub fn outstanding(&self) -> usize {
        self.selection.iter().filter(|p| !p.is_released()).count()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn release_all(&mut self) {
        for preview in &mut self.selection {
            release_preview(&mut self.provider, preview);
        }
    }
}

impl<P: DisplayUrlProvider> Drop for PhotoPreviewManager<P> {
    fn drop(&mut self) {
        self.release_all();
    }
}

fn release_preview<P: DisplayUrlProvider>(provider: &mut P, preview: &mut PhotoPreview) -> bool {
    match preview.url.take() {
        Some(url) => {
            provider.release(&url);
            tracing::debug!(photo = preview.id.0, url = %url, "Released display URL");
            true
        }
        None => false,
    }
}
