//! Helpers for integration tests.

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use report_checker::processing::embedding::{EmbeddingError, TextEmbedder};

/// Temporary regulations and results directories used in integration tests.
pub struct TestDirs {
    root: TempDir,
}

impl TestDirs {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp directory.");
        fs::create_dir_all(root.path().join("regulations"))
            .expect("Failed to create regulations directory.");
        TestDirs { root }
    }

    pub fn regulations_dir(&self) -> std::path::PathBuf {
        self.root.path().join("regulations")
    }

    pub fn results_dir(&self) -> std::path::PathBuf {
        self.root.path().join("saved_results")
    }

    pub fn write_regulation(&self, file_name: &str, text: &str) {
        fs::write(self.regulations_dir().join(file_name), text)
            .expect("Failed to write regulation file.");
    }

    pub fn rendered_result(&self, document_id: &str) -> String {
        let path = self.results_dir().join(format!("{document_id}_results.txt"));
        fs::read_to_string(&path).expect("Failed to read rendered result.")
    }

    pub fn result_record_path(&self, document_id: &str) -> std::path::PathBuf {
        self.results_dir().join(format!("{document_id}_results.json"))
    }
}

/// Deterministic embedder mapping known texts to fixed vectors; unknown texts
/// fall back to a vector orthogonal to everything registered.
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl StubEmbedder {
    pub fn new(vectors: &[(&str, &[f32])]) -> Self {
        Self {
            vectors: vectors
                .iter()
                .map(|(text, v)| (text.to_string(), v.to_vec()))
                .collect(),
        }
    }
}

impl TextEmbedder for StubEmbedder {
    fn embed(&mut self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0, 0.0, 0.0, 1.0]))
    }
}
