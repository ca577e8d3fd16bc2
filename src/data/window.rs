use std::io::BufRead;

use super::error::{ExtractError, RecordFault};
use super::model::{Extraction, Window};
use crate::config::ExtractorConfig;

// ---------------------------------------------------------------------------
// Boundary scan state machine
// ---------------------------------------------------------------------------

/// One raw line together with its 1-based line number.
#[derive(Debug, Clone)]
struct Row {
    line: u64,
    text: String,
}

/// Progress of the boundary scan.
///
/// `Seeking` keeps the previous row because the window begins one line
/// before the start transition. Once the window is open every row is kept,
/// the stop transition included. `Done` goes on buffering rows until the
/// tail is complete, since a small `stop_offset` puts `stop + tail_len` at
/// or past the stop line.
#[derive(Debug)]
enum Scan {
    Seeking { prev: Option<Row> },
    InWindow { start: u64, rows: Vec<Row> },
    Done { start: u64, closed_at: u64, rows: Vec<Row> },
}

impl Scan {
    fn step(self, row: Row, state: Option<i64>, cfg: &ExtractorConfig) -> Scan {
        match self {
            Scan::Seeking { prev } => {
                if state != Some(cfg.start_state) {
                    return Scan::Seeking { prev: Some(row) };
                }
                let start = row.line.saturating_sub(1);
                let mut rows: Vec<Row> = prev.into_iter().collect();
                rows.push(row);
                Scan::InWindow { start, rows }
            }
            Scan::InWindow { start, mut rows } => {
                let closed_at = row.line;
                rows.push(row);
                if state == Some(cfg.stop_state) {
                    Scan::Done {
                        start,
                        closed_at,
                        rows,
                    }
                } else {
                    Scan::InWindow { start, rows }
                }
            }
            Scan::Done {
                start,
                closed_at,
                mut rows,
            } => {
                rows.push(row);
                Scan::Done {
                    start,
                    closed_at,
                    rows,
                }
            }
        }
    }
}

/// Last line the tail needs once the window closes at `closing_line`.
fn tail_end(closing_line: u64, cfg: &ExtractorConfig) -> u64 {
    closing_line.saturating_sub(cfg.stop_offset) + cfg.tail_len
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Parse field `field` of a `delimiter`-separated record as an integer.
fn parse_field(
    text: &str,
    line: u64,
    field: usize,
    delimiter: &str,
) -> Result<i64, ExtractError> {
    let malformed = |fault| ExtractError::MalformedRecord { line, field, fault };

    let text = text.strip_suffix('\r').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(malformed(RecordFault::BlankLine));
    }
    let raw = text.split(delimiter).nth(field).ok_or_else(|| {
        malformed(RecordFault::MissingField {
            found: text.split(delimiter).count(),
        })
    })?;
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| malformed(RecordFault::NotAnInteger(raw.to_string())))
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Locate the run window in a raw log and pull the data column out of it.
///
/// The state column is parsed up to the line carrying the stop code. After
/// that, reading continues only as far as the tail needs. Lines inside the
/// header span are only parsed when they fall in the window.
pub fn extract<R: BufRead>(reader: R, cfg: &ExtractorConfig) -> Result<Extraction, ExtractError> {
    let mut scan = Scan::Seeking { prev: None };
    let mut last_line = 0u64;

    for (idx, text) in reader.lines().enumerate() {
        let line = idx as u64 + 1;
        let text = text.map_err(|source| ExtractError::Read { line, source })?;
        last_line = line;

        let state = if line > cfg.header_lines && !matches!(scan, Scan::Done { .. }) {
            Some(parse_field(&text, line, cfg.state_column, &cfg.delimiter)?)
        } else {
            None
        };

        scan = scan.step(Row { line, text }, state, cfg);
        if let Scan::Done { closed_at, .. } = &scan {
            if line >= tail_end(*closed_at, cfg) {
                break;
            }
        }
    }

    let (start, closed_at, rows) = match scan {
        Scan::Seeking { .. } => return Err(ExtractError::BoundaryNotFound),
        Scan::InWindow { start, rows } if cfg.allow_open_window => {
            log::warn!("stop code never seen; closing window at end of file (line {last_line})");
            (start, None, rows)
        }
        Scan::InWindow { start, .. } => return Err(ExtractError::WindowNotClosed { start }),
        Scan::Done {
            start,
            closed_at,
            rows,
        } => (start, Some(closed_at), rows),
    };

    let closing_line = closed_at.unwrap_or(last_line);
    let window = Window {
        start,
        stop: closing_line.saturating_sub(cfg.stop_offset),
    };
    if window.is_empty() {
        return Err(ExtractError::EmptyWindow {
            start: window.start,
            stop: window.stop,
        });
    }

    let (series, tail) = collect(&rows, window, cfg)?;
    log::debug!(
        "window {window} closed at line {closing_line}: {} values, {} tail",
        series.len(),
        tail.len()
    );

    Ok(Extraction {
        window,
        closed_at,
        series,
        tail,
    })
}

/// Split buffered rows into the window series and the tail that follows it.
fn collect(
    rows: &[Row],
    window: Window,
    cfg: &ExtractorConfig,
) -> Result<(Vec<i64>, Vec<i64>), ExtractError> {
    let last = window.stop + cfg.tail_len;
    let mut series = Vec::with_capacity(window.len() as usize);
    let mut tail = Vec::with_capacity(cfg.tail_len as usize);

    for row in rows.iter().take_while(|row| row.line <= last) {
        let value = parse_field(&row.text, row.line, cfg.data_column, &cfg.delimiter)?;
        if window.contains(row.line) {
            series.push(value);
        } else {
            tail.push(value);
        }
    }

    Ok((series, tail))
}
