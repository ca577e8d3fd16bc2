use std::fmt;

// ---------------------------------------------------------------------------
// Window – the inclusive line range of interest
// ---------------------------------------------------------------------------

/// Inclusive 1-based line range `[start, stop]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub stop: u64,
}

impl Window {
    /// Number of lines covered; zero when `stop < start`.
    pub fn len(&self) -> u64 {
        if self.stop < self.start {
            0
        } else {
            self.stop - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, line: u64) -> bool {
        self.start <= line && line <= self.stop
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start {} stop {}", self.start, self.stop)
    }
}

// ---------------------------------------------------------------------------
// Extraction – the result of one scan
// ---------------------------------------------------------------------------

/// Data-column values pulled from a raw log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub window: Window,
    /// Line carrying the stop code, or `None` when end of file closed the window.
    pub closed_at: Option<u64>,
    /// Values for every line in `window`, in file order.
    pub series: Vec<i64>,
    /// Values for the few lines following `window.stop`.
    pub tail: Vec<i64>,
}

impl Extraction {
    /// Number of extracted values.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// `(min, max)` of the series.
    pub fn range(&self) -> Option<(i64, i64)> {
        let min = *self.series.iter().min()?;
        let max = *self.series.iter().max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_len_is_inclusive() {
        let w = Window { start: 11, stop: 16 };
        assert_eq!(w.len(), 6);
        assert!(w.contains(11) && w.contains(16));
        assert!(!w.contains(17));
        assert_eq!(w.to_string(), "start 11 stop 16");
    }

    #[test]
    fn inverted_window_is_empty() {
        let w = Window { start: 12, stop: 10 };
        assert!(w.is_empty());
    }

    #[test]
    fn range_of_series() {
        let ex = Extraction {
            window: Window { start: 1, stop: 3 },
            closed_at: Some(8),
            series: vec![8190, 8187, 8192],
            tail: vec![],
        };
        assert_eq!(ex.range(), Some((8187, 8192)));
    }
}
