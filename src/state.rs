use std::path::Path;

use crate::color::ColorMap;
use crate::data::aggregate::DashboardSummary;
use crate::data::filter::{filter_records, Selection};
use crate::data::loader::load_file;
use crate::data::model::EvDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<EvDataset>,

    /// Current brand / segment / drivetrain choice.
    pub selection: Selection,

    /// Chart inputs for the current selection. Rebuilt on every change.
    pub summary: Option<DashboardSummary>,

    /// Segment colours, fixed per dataset.
    pub segment_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and show it unfiltered.
    pub fn set_dataset(&mut self, dataset: EvDataset) {
        self.segment_colors = ColorMap::new(&dataset.segments);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.set_selection(Selection::all());
    }

    /// Replace the selection and recompute every chart input.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.refresh();
    }

    /// Filter and aggregate from scratch for the current selection.
    pub fn refresh(&mut self) {
        self.summary = self.dataset.as_ref().map(|ds| {
            let visible = filter_records(&ds.records, &self.selection);
            log::debug!(
                "selection {:?}: {} of {} vehicles visible",
                self.selection,
                visible.len(),
                ds.len()
            );
            DashboardSummary::compute(&visible)
        });
    }

    /// Number of vehicles passing the current selection.
    pub fn visible_count(&self) -> usize {
        self.summary.as_ref().map_or(0, |s| s.total)
    }

    /// Load `path`, replacing the dataset on success. A failure is logged
    /// and kept as the status message; the previous dataset (if any) stays.
    pub fn load(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} vehicles ({} brands, {} segments) from {}",
                    dataset.len(),
                    dataset.brands.len(),
                    dataset.segments.len(),
                    path.display()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
