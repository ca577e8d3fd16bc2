use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Write one decimal integer per line.
pub fn write_values<W: Write>(out: &mut W, values: &[i64]) -> std::io::Result<()> {
    for value in values {
        writeln!(out, "{value}")?;
        log::debug!("{value}");
    }
    Ok(())
}

/// Write `values` to `path`, replacing any existing file.
pub fn write_series(path: &Path, values: &[i64]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_values(&mut out, values).with_context(|| format!("writing {}", path.display()))?;
    out.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    log::info!("wrote {} values to {}", values.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_newline_terminated() {
        let mut buf = Vec::new();
        write_values(&mut buf, &[8188, -3, 0]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "8188\n-3\n0\n");
    }

    #[test]
    fn written_file_reads_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_hist.txt");
        std::fs::write(&path, "stale contents that are longer than the new file\n").unwrap();

        let values = vec![8190, 8187, 8192, 8188];
        write_series(&path, &values).unwrap();

        let back: Vec<i64> = std::fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(back, values);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = write_series(&path, &[1]).unwrap_err();
        assert!(format!("{err:#}").contains("out.txt"));
    }
}
