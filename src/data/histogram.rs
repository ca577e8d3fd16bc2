use thiserror::Error;

use super::model::Extraction;

// ---------------------------------------------------------------------------
// Integer-width binning
// ---------------------------------------------------------------------------

/// One histogram bin covering `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
    pub lower: i64,
    pub upper: i64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.lower as f64 + self.upper as f64) / 2.0
    }
}

/// Upper bound on unit-width bins in one chart.
pub const MAX_BINS: u64 = 1 << 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistogramError {
    #[error("values span {min}..={max}, more than {} unit-width bins", MAX_BINS)]
    SpanTooWide { min: i64, max: i64 },
}

/// Count `values` into unit-width bins with edges `min, min + 1, ..., max`.
///
/// The last bin is closed on the right so `max` lands in it. A series with a
/// single distinct value gets one bin `[v, v + 1)`.
pub fn bin_counts(values: &[i64]) -> Result<Vec<Bin>, HistogramError> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Ok(Vec::new());
    };

    let span = max
        .checked_sub(min)
        .map(|d| d as u64)
        .filter(|&d| d <= MAX_BINS)
        .ok_or(HistogramError::SpanTooWide { min, max })?;

    let n_bins = span.max(1) as usize;
    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|k| {
            let lower = min + k as i64;
            Bin {
                lower,
                upper: lower.saturating_add(1),
                count: 0,
            }
        })
        .collect();

    for &v in values {
        let idx = ((v - min) as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    Ok(bins)
}

/// Bin edges in ascending order: every lower bound plus the last upper bound.
pub fn bin_edges(bins: &[Bin]) -> Vec<i64> {
    let mut edges: Vec<i64> = bins.iter().map(|b| b.lower).collect();
    edges.extend(bins.last().map(|b| b.upper));
    edges
}

// ---------------------------------------------------------------------------
// Chart text
// ---------------------------------------------------------------------------

/// Title and axis labels summarising an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl HistogramLabels {
    /// The title carries the window size and first value; the x label carries
    /// the last three values (the final one marked `L`) and the tail.
    pub fn for_extraction(ex: &Extraction) -> Self {
        let first = ex
            .series
            .first()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());

        let last = &ex.series[ex.series.len().saturating_sub(3)..];
        let mut parts: Vec<String> = last.iter().map(|v| v.to_string()).collect();
        if let Some(final_value) = parts.last_mut() {
            final_value.insert(0, 'L');
        }
        parts.extend(ex.tail.iter().take(3).map(|v| v.to_string()));

        Self {
            title: format!("Data: total count = {} F{first}", ex.window.len()),
            x_label: format!("ADC Count (LSB) {}", parts.join(" ")),
            y_label: "Number of Entries".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Window;

    #[test]
    fn bins_span_min_to_max() {
        let bins = bin_counts(&[3, 5, 4, 4, 6]).unwrap();
        let summary: Vec<(i64, usize)> = bins.iter().map(|b| (b.lower, b.count)).collect();
        // Edges 3,4,5,6: the final bin [5, 6] also takes the 6.
        assert_eq!(summary, vec![(3, 1), (4, 2), (5, 2)]);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
    }

    #[test]
    fn single_value_gets_one_bin() {
        let bins = bin_counts(&[8188, 8188, 8188]).unwrap();
        assert_eq!(
            bins,
            vec![Bin {
                lower: 8188,
                upper: 8189,
                count: 3
            }]
        );
        assert_eq!(bins[0].center(), 8188.5);
    }

    #[test]
    fn empty_series_has_no_bins() {
        assert!(bin_counts(&[]).unwrap().is_empty());
    }

    #[test]
    fn extreme_span_is_rejected() {
        let err = bin_counts(&[i64::MIN, 0, i64::MAX]).unwrap_err();
        assert_eq!(
            err,
            HistogramError::SpanTooWide {
                min: i64::MIN,
                max: i64::MAX
            }
        );
        assert!(bin_counts(&[0, MAX_BINS as i64 + 1]).is_err());
        assert_eq!(bin_counts(&[0, MAX_BINS as i64]).unwrap().len(), MAX_BINS as usize);
    }

    #[test]
    fn edges_close_over_last_bin() {
        let bins = bin_counts(&[3, 5, 4, 6]).unwrap();
        assert_eq!(bin_edges(&bins), vec![3, 4, 5, 6]);
        assert!(bin_edges(&[]).is_empty());
    }

    #[test]
    fn labels_carry_head_and_tail_values() {
        let ex = Extraction {
            window: Window { start: 11, stop: 16 },
            closed_at: Some(21),
            series: vec![111, 112, 113, 114, 115, 116],
            tail: vec![117, 118, 119],
        };
        let labels = HistogramLabels::for_extraction(&ex);
        assert_eq!(labels.title, "Data: total count = 6 F111");
        assert_eq!(labels.x_label, "ADC Count (LSB) 114 115 L116 117 118 119");
        assert_eq!(labels.y_label, "Number of Entries");
    }

    #[test]
    fn labels_tolerate_short_series() {
        let ex = Extraction {
            window: Window { start: 9, stop: 9 },
            closed_at: None,
            series: vec![42],
            tail: vec![43],
        };
        let labels = HistogramLabels::for_extraction(&ex);
        assert_eq!(labels.title, "Data: total count = 1 F42");
        assert_eq!(labels.x_label, "ADC Count (LSB) L42 43");
    }
}
