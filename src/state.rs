use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::color::ColumnColors;
use crate::data::model::DataFrame;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the central panel currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Plot,
    Table,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded frame (None until the user opens a file).
    pub frame: Option<DataFrame>,

    /// Path the frame was loaded from, for reloading.
    pub source_path: Option<PathBuf>,

    /// Metadata lines to skip on the next load.
    pub skip_rows: usize,

    /// Numeric columns currently drawn in the plot.
    pub plotted: BTreeSet<String>,

    /// Per-column line colours.
    pub colors: ColumnColors,

    /// Central panel mode.
    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            frame: None,
            source_path: None,
            skip_rows: 0,
            plotted: BTreeSet::new(),
            colors: ColumnColors::default(),
            view: View::Plot,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded frame, defaulting to plotting every
    /// numeric column.
    pub fn set_frame(&mut self, frame: DataFrame, path: Option<PathBuf>) {
        let numeric: Vec<String> = frame
            .columns()
            .iter()
            .filter(|c| c.dtype().is_numeric())
            .map(|c| c.name().to_string())
            .collect();

        self.colors = ColumnColors::new(&numeric);
        self.plotted = numeric.into_iter().collect();
        self.frame = Some(frame);
        self.source_path = path;
        self.status_message = None;
    }

    /// Toggle whether a column is drawn.
    pub fn toggle_plotted(&mut self, column: &str) {
        if !self.plotted.remove(column) {
            self.plotted.insert(column.to_string());
        }
    }
}
