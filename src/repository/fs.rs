//! File-backed result store and regulation embedding cache.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytemuck::cast_slice;

use crate::domain::verdict::CheckResult;
use crate::repository::{
    EmbeddingReader, EmbeddingWriter, RepositoryError, RepositoryResult, ResultReader,
    ResultWriter,
};

/// One record per document id under the results directory.
///
/// The canonical record is JSON, so a cache hit returns the stored verdicts
/// verbatim; a plain-text rendering is written alongside for inspection.
/// Regulation embeddings are cached as raw `f32` blobs in a subdirectory.
pub struct FsRepository {
    results_dir: PathBuf,
    embeddings_dir: PathBuf,
}

impl FsRepository {
    pub fn new(results_dir: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let results_dir = results_dir.into();
        let embeddings_dir = results_dir.join("embeddings");
        fs::create_dir_all(&embeddings_dir)?;
        Ok(Self {
            results_dir,
            embeddings_dir,
        })
    }

    fn result_path(&self, document_id: &str) -> PathBuf {
        self.results_dir.join(format!("{document_id}_results.json"))
    }

    fn rendered_path(&self, document_id: &str) -> PathBuf {
        self.results_dir.join(format!("{document_id}_results.txt"))
    }

    fn embedding_path(&self, regulation_id: &str) -> PathBuf {
        self.embeddings_dir.join(format!("{regulation_id}.emb"))
    }
}

/// Write via a temporary sibling and rename, so an interrupted or failed
/// write never clobbers an existing valid record. The `.tmp` suffix is
/// appended to the full file name so records differing only in extension
/// never share a temp path.
fn write_atomically(path: &Path, bytes: &[u8]) -> RepositoryResult<()> {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl ResultReader for FsRepository {
    fn get_result(&self, document_id: &str) -> RepositoryResult<Option<CheckResult>> {
        let bytes = match fs::read(self.result_path(document_id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

impl ResultWriter for FsRepository {
    fn save_result(&self, document_id: &str, result: &CheckResult) -> RepositoryResult<()> {
        let json = serde_json::to_vec_pretty(result)?;
        write_atomically(&self.result_path(document_id), &json)?;

        let mut rendered = result.render();
        rendered.push('\n');
        write_atomically(&self.rendered_path(document_id), rendered.as_bytes())?;
        Ok(())
    }
}

impl EmbeddingReader for FsRepository {
    fn get_embedding(&self, regulation_id: &str) -> RepositoryResult<Option<Vec<f32>>> {
        let bytes = match fs::read(self.embedding_path(regulation_id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if bytes.len() % std::mem::size_of::<f32>() != 0 {
            return Err(RepositoryError::MalformedEmbedding(
                regulation_id.to_string(),
            ));
        }
        Ok(Some(bytemuck::pod_collect_to_vec::<u8, f32>(&bytes)))
    }
}

impl EmbeddingWriter for FsRepository {
    fn set_embedding(&self, regulation_id: &str, embedding: &[f32]) -> RepositoryResult<()> {
        let blob: &[u8] = cast_slice(embedding);
        write_atomically(&self.embedding_path(regulation_id), blob)
    }
}
