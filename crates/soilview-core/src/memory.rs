//! In-memory collaborators for headless use and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. Clones share state, so a test can hand one clone
//! to the controller and inspect the other.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::{Result, SoilviewError};
use crate::models::{CanvasId, ChartSeries, DisplayUrl, FileHandle};
use crate::ports::{ChartBackend, DisplayUrlProvider};

#[derive(Debug, Default)]
struct RegistryState {
    live: HashMap<DisplayUrl, FileHandle>,
    released: usize,
    double_releases: usize,
    rejected_names: HashSet<String>,
}

/// Issues `blob:soilview/<uuid>` URLs and tracks which are still live
#[derive(Debug, Clone, Default)]
pub struct BlobUrlRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl BlobUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs acquired and not yet released
    pub fn live_count(&self) -> usize {
        self.state.read().unwrap().live.len()
    }

    pub fn released_count(&self) -> usize {
        self.state.read().unwrap().released
    }

    /// Releases of URLs that were not live. Always zero when callers are correct.
    pub fn double_releases(&self) -> usize {
        self.state.read().unwrap().double_releases
    }

    pub fn is_live(&self, url: &DisplayUrl) -> bool {
        self.state.read().unwrap().live.contains_key(url)
    }

    /// Make `acquire` fail for files with this name
    pub fn reject_files_named(&self, name: impl Into<String>) {
        self.state.write().unwrap().rejected_names.insert(name.into());
    }
}

impl DisplayUrlProvider for BlobUrlRegistry {
    fn acquire(&mut self, handle: &FileHandle) -> Result<DisplayUrl> {
        let mut state = self.state.write().unwrap();

        if state.rejected_names.contains(&handle.name) {
            return Err(SoilviewError::DisplayUrl {
                file: handle.name.clone(),
                reason: "file is not readable".to_string(),
            });
        }

        let url = DisplayUrl(format!("blob:soilview/{}", Uuid::new_v4()));
        state.live.insert(url.clone(), handle.clone());
        Ok(url)
    }

    fn release(&mut self, url: &DisplayUrl) {
        let mut state = self.state.write().unwrap();

        if state.live.remove(url).is_some() {
            state.released += 1;
        } else {
            state.double_releases += 1;
            tracing::warn!(url = %url, "Display URL released twice or never acquired");
        }
    }
}

/// Chart instance handed out by [`RecordingChartBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedChart {
    pub id: u64,
    pub canvas: CanvasId,
}

#[derive(Debug, Default)]
struct RecorderState {
    next_id: u64,
    live: HashMap<u64, CanvasId>,
    draws: Vec<(CanvasId, ChartSeries)>,
    destroyed: usize,
    fail_next: Option<String>,
}

/// Records draw and destroy calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingChartBackend {
    state: Arc<RwLock<RecorderState>>,
}

impl RecordingChartBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live charts bound to `canvas`
    pub fn live_on(&self, canvas: &CanvasId) -> usize {
        self.state.read().unwrap().live.values().filter(|c| *c == canvas).count()
    }

    pub fn draw_count(&self) -> usize {
        self.state.read().unwrap().draws.len()
    }

    pub fn destroy_count(&self) -> usize {
        self.state.read().unwrap().destroyed
    }

    /// Series passed to the most recent draw
    pub fn last_series(&self) -> Option<ChartSeries> {
        self.state.read().unwrap().draws.last().map(|(_, series)| series.clone())
    }

    /// Make the next draw fail with `reason`
    pub fn fail_next_draw(&self, reason: impl Into<String>) {
        self.state.write().unwrap().fail_next = Some(reason.into());
    }
}

impl ChartBackend for RecordingChartBackend {
    type Chart = RecordedChart;

    fn draw(&mut self, canvas: &CanvasId, series: &ChartSeries) -> Result<RecordedChart> {
        let mut state = self.state.write().unwrap();

        if let Some(reason) = state.fail_next.take() {
            return Err(SoilviewError::Chart {
                canvas: canvas.to_string(),
                reason,
            });
        }

        let id = state.next_id;
        state.next_id += 1;
        state.live.insert(id, canvas.clone());
        state.draws.push((canvas.clone(), series.clone()));

        Ok(RecordedChart {
            id,
            canvas: canvas.clone(),
        })
    }

    fn destroy(&mut self, chart: RecordedChart) {
        let mut state = self.state.write().unwrap();
        if state.live.remove(&chart.id).is_some() {
            state.destroyed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_urls_are_unique() {
        let mut registry = BlobUrlRegistry::new();
        let handle = FileHandle::new("soil.jpg");

        let first = registry.acquire(&handle).unwrap();
        let second = registry.acquire(&handle).unwrap();

        assert_ne!(first, second);
        assert!(first.as_str().starts_with("blob:soilview/"));
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn test_double_release_is_counted() {
        let mut registry = BlobUrlRegistry::new();
        let url = registry.acquire(&FileHandle::new("soil.jpg")).unwrap();

        registry.release(&url);
        registry.release(&url);

        assert!(!registry.is_live(&url));
        assert_eq!(registry.released_count(), 1);
        assert_eq!(registry.double_releases(), 1);
    }

    #[test]
    fn test_release_count_over_many_cycles() {
        let mut registry = BlobUrlRegistry::new();

        for _ in 0..100 {
            let url = registry.acquire(&FileHandle::new("soil.jpg")).unwrap();
            registry.release(&url);
        }

        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.released_count(), 100);
    }
}
