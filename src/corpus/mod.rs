//! Loading and holding the regulation corpus.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::regulation::Regulation;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read regulations directory {path}: {source}")]
    ReadDir {
        path: String,
        source: std::io::Error,
    },
}

/// All loaded regulations, in sorted file-name order.
///
/// Loaded once per process and read-only afterwards; there is no hot-reload
/// path.
#[derive(Debug, Default)]
pub struct RegulationCorpus {
    regulations: Vec<Regulation>,
}

impl RegulationCorpus {
    pub fn from_regulations(regulations: Vec<Regulation>) -> Self {
        Self { regulations }
    }

    /// Read every file in `dir` as UTF-8 text. Files that cannot be read or
    /// decoded are skipped with a warning rather than failing the whole load.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| CorpusError::ReadDir {
            path: dir.display().to_string(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable directory entry in {}: {e}", dir.display());
                    continue;
                }
            };
            if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                paths.push(entry.path());
            }
        }
        // read_dir order is platform-dependent; sort for a stable corpus order.
        paths.sort();

        let mut regulations = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(id) = path.file_name().and_then(|name| name.to_str()) else {
                log::warn!("Skipping regulation with non-UTF-8 file name: {}", path.display());
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(text) => regulations.push(Regulation {
                    id: id.to_string(),
                    text,
                }),
                Err(e) => {
                    log::warn!("Skipping regulation {}: {e}", path.display());
                }
            }
        }

        log::info!("Loaded {} regulations from {}", regulations.len(), dir.display());
        Ok(Self { regulations })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Regulation> {
        self.regulations.iter()
    }

    pub fn len(&self) -> usize {
        self.regulations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regulations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::RegulationCorpus;

    #[test]
    fn loads_files_in_sorted_name_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.txt"), "second").expect("write");
        fs::write(dir.path().join("a.txt"), "first").expect("write");

        let corpus = RegulationCorpus::load_from_dir(dir.path()).expect("load");

        let ids: Vec<&str> = corpus.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a.txt", "b.txt"]);
        assert_eq!(corpus.iter().next().map(|r| r.text.as_str()), Some("first"));
    }

    #[test]
    fn skips_files_that_are_not_valid_utf8() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("good.txt"), "ok").expect("write");
        fs::write(dir.path().join("bad.bin"), [0xff, 0xfe, 0x00, 0xff]).expect("write");

        let corpus = RegulationCorpus::load_from_dir(dir.path()).expect("load");

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.iter().next().map(|r| r.id.as_str()), Some("good.txt"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");

        assert!(RegulationCorpus::load_from_dir(&missing).is_err());
    }

    #[test]
    fn empty_directory_yields_empty_corpus() {
        let dir = tempfile::tempdir().expect("tempdir");

        let corpus = RegulationCorpus::load_from_dir(dir.path()).expect("load");

        assert!(corpus.is_empty());
    }
}
