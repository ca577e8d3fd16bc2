use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Extractor parameters
// ---------------------------------------------------------------------------

/// Record layout and window rules for a raw instrument log.
///
/// Every field has a default matching the DDC2 raw format, so an empty TOML
/// file (or no file at all) gives the standard behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Field separator within a record.
    #[serde(default = "ExtractorConfig::default_delimiter")]
    pub delimiter: String,
    /// 0-based index of the value column.
    #[serde(default = "ExtractorConfig::default_data_column")]
    pub data_column: usize,
    /// 0-based index of the run-state column.
    #[serde(default = "ExtractorConfig::default_state_column")]
    pub state_column: usize,
    /// Leading lines whose state column is never inspected.
    #[serde(default = "ExtractorConfig::default_header_lines")]
    pub header_lines: u64,
    /// State code that opens the window.
    #[serde(default = "ExtractorConfig::default_start_state")]
    pub start_state: i64,
    /// State code that closes the window.
    #[serde(default = "ExtractorConfig::default_stop_state")]
    pub stop_state: i64,
    /// `stop = closing_line - stop_offset`.
    #[serde(default = "ExtractorConfig::default_stop_offset")]
    pub stop_offset: u64,
    /// Number of records collected after `stop`.
    #[serde(default = "ExtractorConfig::default_tail_len")]
    pub tail_len: u64,
    /// Treat end of file as the closing line when no stop state is seen.
    #[serde(default)]
    pub allow_open_window: bool,
}

impl ExtractorConfig {
    fn default_delimiter() -> String {
        ", ".to_string()
    }
    fn default_data_column() -> usize {
        4
    }
    fn default_state_column() -> usize {
        46
    }
    fn default_header_lines() -> u64 {
        9
    }
    fn default_start_state() -> i64 {
        2
    }
    fn default_stop_state() -> i64 {
        4
    }
    fn default_stop_offset() -> u64 {
        5
    }
    fn default_tail_len() -> u64 {
        3
    }

    /// Read a TOML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: ExtractorConfig = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject parameter combinations the window scan cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            bail!("delimiter must not be empty");
        }
        if self.header_lines == 0 {
            bail!("header_lines must be at least 1 (the window starts one line before the transition)");
        }
        if self.start_state == self.stop_state {
            bail!(
                "start_state and stop_state are both {}; they must differ",
                self.start_state
            );
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            delimiter: Self::default_delimiter(),
            data_column: Self::default_data_column(),
            state_column: Self::default_state_column(),
            header_lines: Self::default_header_lines(),
            start_state: Self::default_start_state(),
            stop_state: Self::default_stop_state(),
            stop_offset: Self::default_stop_offset(),
            tail_len: Self::default_tail_len(),
            allow_open_window: false,
        }
    }
}
