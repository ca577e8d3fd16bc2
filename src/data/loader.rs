use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::error::ExtractError;
use super::model::Extraction;
use super::window::extract;
use crate::config::ExtractorConfig;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Open a raw log and extract its run window.
///
/// The file handle lives only for the duration of this call, so it is closed
/// on every return path.
pub fn load_file(path: &Path, cfg: &ExtractorConfig) -> Result<Extraction, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("opened {}", path.display());

    let extraction = extract(BufReader::new(file), cfg)?;
    log::info!(
        "{}: {} ({} values)",
        path.display(),
        extraction.window,
        extraction.len()
    );
    if let Some((min, max)) = extraction.range() {
        log::debug!("values span {min}..={max}");
    }
    Ok(extraction)
}
