use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::config::ExtractorConfig;
use crate::data::error::ExtractError;

#[derive(Parser, Debug, Clone)]
#[command(name = "raw_to_hist", author, version, about = "Extract a run window from a raw log and histogram it")]
pub struct Args {
    /// Raw data file from which to read
    #[arg(long, value_name = "PATH")]
    pub fin: Option<PathBuf>,

    /// Output file, one value per line
    #[arg(long, value_name = "PATH", default_value = "./data_hist.txt")]
    pub fout: PathBuf,

    /// Histogram the data
    #[arg(long, default_value_t = false)]
    pub hist: bool,

    /// Print additional debugging info
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Extractor parameters (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data field index (overrides config)
    #[arg(long)]
    pub data_column: Option<usize>,

    /// State field index (overrides config)
    #[arg(long)]
    pub state_column: Option<usize>,

    /// Leading lines never checked for state (overrides config)
    #[arg(long)]
    pub header_lines: Option<u64>,

    /// Close the window at end of file when the stop code never appears
    #[arg(long, default_value_t = false)]
    pub allow_open_window: bool,
}

impl Args {
    pub fn input_path(&self) -> Result<&Path, ExtractError> {
        self.fin.as_deref().ok_or(ExtractError::MissingInputPath)
    }

    /// Config file (or defaults) with command-line overrides applied.
    pub fn extractor_config(&self) -> Result<ExtractorConfig> {
        let mut cfg = match &self.config {
            Some(path) => ExtractorConfig::load(path)?,
            None => ExtractorConfig::default(),
        };
        if let Some(col) = self.data_column {
            cfg.data_column = col;
        }
        if let Some(col) = self.state_column {
            cfg.state_column = col;
        }
        if let Some(n) = self.header_lines {
            cfg.header_lines = n;
        }
        if self.allow_open_window {
            cfg.allow_open_window = true;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["raw_to_hist", "--fin", "run7.txt"]).unwrap();
        assert_eq!(args.fin.as_deref(), Some(Path::new("run7.txt")));
        assert_eq!(args.fout, PathBuf::from("./data_hist.txt"));
        assert!(!args.hist);
        assert!(!args.verbose);
        assert_eq!(args.extractor_config().unwrap(), ExtractorConfig::default());
    }

    #[test]
    fn missing_input_is_reported() {
        let args = Args::try_parse_from(["raw_to_hist", "--hist"]).unwrap();
        assert!(matches!(args.input_path(), Err(ExtractError::MissingInputPath)));
    }

    #[test]
    fn overrides_apply_over_defaults() {
        let args = Args::try_parse_from([
            "raw_to_hist",
            "--fin",
            "a.txt",
            "--data-column",
            "6",
            "--header-lines",
            "3",
            "--allow-open-window",
        ])
        .unwrap();
        let cfg = args.extractor_config().unwrap();
        assert_eq!(cfg.data_column, 6);
        assert_eq!(cfg.header_lines, 3);
        assert_eq!(cfg.state_column, 46);
        assert!(cfg.allow_open_window);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args =
            Args::try_parse_from(["raw_to_hist", "--fin", "a.txt", "--header-lines", "0"]).unwrap();
        assert!(args.extractor_config().is_err());
    }
}
