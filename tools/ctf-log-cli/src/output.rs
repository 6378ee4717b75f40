//! Log loading and JSON output shared by every command

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read a raw log file
pub fn read_log(path: &Path) -> Result<Vec<u8>> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read log: {}", path.display()))?;
    tracing::debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Where and how command results are written
pub struct Output {
    path: Option<PathBuf>,
    pretty: bool,
}

impl Output {
    pub fn new(path: Option<PathBuf>, pretty: bool) -> Self {
        Self { path, pretty }
    }

    /// Serialize `value` as JSON to the output file or stdout
    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = self.render(value)?;

        match &self.path {
            Some(path) => {
                std::fs::write(path, json.as_bytes())
                    .with_context(|| format!("Failed to write output: {}", path.display()))?;
                tracing::info!("Wrote {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(json.as_bytes())
                    .context("Failed to write to stdout")?;
                stdout.write_all(b"\n").context("Failed to write to stdout")?;
            }
        }

        Ok(())
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.context("Failed to serialize output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_compact_and_pretty() {
        let value = serde_json::json!({ "a": [1, 2] });
        assert_eq!(
            Output::new(None, false).render(&value).unwrap(),
            r#"{"a":[1,2]}"#
        );
        assert!(Output::new(None, true).render(&value).unwrap().contains('\n'));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        Output::new(Some(path.clone()), false)
            .write(&vec![1, 2, 3])
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_read_missing_log() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_log(&dir.path().join("missing.bin")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read log"));
    }
}
