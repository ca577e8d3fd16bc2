use eframe::egui::Color32;

use crate::color::bar_colors;
use crate::data::histogram::{Bin, HistogramError, HistogramLabels, bin_counts, bin_edges};
use crate::data::model::{Extraction, Window};

// ---------------------------------------------------------------------------
// Histogram view state
// ---------------------------------------------------------------------------

/// Everything the histogram window draws, independent of rendering.
pub struct HistogramState {
    /// Window the values came from.
    pub window: Window,

    /// Number of extracted values.
    pub total: usize,

    /// Unit-width bins over the extracted values.
    pub bins: Vec<Bin>,

    /// Integer bin edges, one x tick each.
    pub edges: Vec<i64>,

    /// Fill colour per bin (same order as `bins`).
    pub colors: Vec<Color32>,

    /// Title and axis text.
    pub labels: HistogramLabels,

    /// Whether the per-bin count annotations are drawn.
    pub show_counts: bool,
}

impl HistogramState {
    /// Bin an extraction and prepare its chart text.
    pub fn from_extraction(extraction: &Extraction) -> Result<Self, HistogramError> {
        let bins = bin_counts(&extraction.series)?;
        let colors = bar_colors(&bins);
        Ok(Self {
            window: extraction.window,
            total: extraction.len(),
            edges: bin_edges(&bins),
            bins,
            colors,
            labels: HistogramLabels::for_extraction(extraction),
            show_counts: true,
        })
    }

    /// Height of the tallest bar.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn toggle_counts(&mut self) {
        self.show_counts = !self.show_counts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_mirrors_extraction() {
        let ex = Extraction {
            window: Window { start: 11, stop: 16 },
            closed_at: Some(21),
            series: vec![5, 6, 6, 7, 7, 7],
            tail: vec![8, 8, 9],
        };
        let mut state = HistogramState::from_extraction(&ex).unwrap();
        assert_eq!(state.total, 6);
        assert_eq!(state.bins.len(), 2);
        assert_eq!(state.colors.len(), state.bins.len());
        assert_eq!(state.edges, vec![5, 6, 7]);
        // [6, 7] is closed on the right and takes all five 6s and 7s.
        assert_eq!(state.max_count(), 5);
        assert!(state.show_counts);
        state.toggle_counts();
        assert!(!state.show_counts);
    }

    #[test]
    fn unbinnable_span_is_an_error() {
        let ex = Extraction {
            window: Window { start: 1, stop: 2 },
            closed_at: Some(7),
            series: vec![i64::MIN, i64::MAX],
            tail: vec![],
        };
        assert!(HistogramState::from_extraction(&ex).is_err());
    }
}
