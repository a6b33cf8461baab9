//! End-to-end requirement checking pipeline.

use thiserror::Error;

use crate::corpus::RegulationCorpus;
use crate::domain::verdict::{CheckResult, RequirementVerdict};
use crate::processing::embedding::{EmbeddingError, TextEmbedder};
use crate::processing::extract::extract;
use crate::processing::matcher::match_requirement;
use crate::repository::{
    EmbeddingReader, EmbeddingWriter, RepositoryError, ResultReader, ResultWriter,
};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Runs the pipeline for one document: cache probe, field extraction,
/// embedding, matching against every loaded regulation, persistence.
///
/// The embedder is injected at construction time; regulation embeddings are
/// resolved through the repository's blob cache and memoized for the life of
/// the checker, so each regulation is embedded at most once per corpus.
pub struct RequirementChecker<'a, E, R> {
    corpus: &'a RegulationCorpus,
    embedder: E,
    repo: R,
    threshold: f32,
    regulation_embeddings: Option<Vec<(String, Vec<f32>)>>,
}

impl<'a, E, R> RequirementChecker<'a, E, R>
where
    E: TextEmbedder,
    R: ResultReader + ResultWriter + EmbeddingReader + EmbeddingWriter,
{
    pub fn new(corpus: &'a RegulationCorpus, embedder: E, repo: R, threshold: f32) -> Self {
        Self {
            corpus,
            embedder,
            repo,
            threshold,
            regulation_embeddings: None,
        }
    }

    /// Check every requirement of `document_id` in input order.
    ///
    /// A previously persisted result for the same document id is returned
    /// verbatim unless `force_recompute` is set, even if the corpus or the
    /// requirement list has changed since. Nothing is persisted until the
    /// whole list has been processed, so a failed run is fully retried on
    /// the next invocation.
    pub fn check(
        &mut self,
        document_id: &str,
        requirements: &[String],
        force_recompute: bool,
    ) -> Result<CheckResult, CheckError> {
        if !force_recompute {
            match self.repo.get_result(document_id) {
                Ok(Some(cached)) => {
                    log::info!("Returning cached result for document {document_id}");
                    return Ok(cached);
                }
                Ok(None) => {}
                Err(e) => {
                    // A broken record must not block the check.
                    log::warn!("Failed to read cached result for {document_id}: {e}");
                }
            }
        }

        let regulation_embeddings = Self::resolve_regulation_embeddings(
            self.corpus,
            &mut self.embedder,
            &self.repo,
            &mut self.regulation_embeddings,
        )?;

        log::info!(
            "Checking {} requirements for document {document_id} against {} regulations",
            requirements.len(),
            regulation_embeddings.len()
        );

        let mut verdicts = Vec::with_capacity(requirements.len());
        for raw_text in requirements {
            let requirement = extract(raw_text);
            let embedding = self.embedder.embed(raw_text)?;
            let (status, comments) =
                match_requirement(&embedding, regulation_embeddings, self.threshold);
            verdicts.push(RequirementVerdict {
                requirement,
                status,
                comments,
            });
        }

        let result = CheckResult {
            document_id: document_id.to_string(),
            verdicts,
        };
        self.repo.save_result(document_id, &result)?;

        log::info!("Finished checking document {document_id}");
        Ok(result)
    }

    /// Resolve every regulation's embedding once, preferring the repository's
    /// blob cache over model inference. Cache-read failures fall back to
    /// regeneration; cache-write failures are logged and non-fatal.
    ///
    /// Takes the fields it needs individually so the returned slice borrows
    /// only the memo, leaving the embedder free for requirement embedding.
    fn resolve_regulation_embeddings<'b>(
        corpus: &RegulationCorpus,
        embedder: &mut E,
        repo: &R,
        memo: &'b mut Option<Vec<(String, Vec<f32>)>>,
    ) -> Result<&'b [(String, Vec<f32>)], CheckError> {
        match memo {
            Some(embeddings) => Ok(embeddings.as_slice()),
            None => {
                let mut embeddings = Vec::with_capacity(corpus.len());
                for regulation in corpus.iter() {
                    let cached = match repo.get_embedding(&regulation.id) {
                        Ok(cached) => cached,
                        Err(e) => {
                            log::warn!(
                                "Failed to load cached embedding for {}: {e}",
                                regulation.id
                            );
                            None
                        }
                    };
                    let embedding = match cached {
                        Some(embedding) => embedding,
                        None => {
                            let embedding = embedder.embed(&regulation.text)?;
                            if let Err(e) = repo.set_embedding(&regulation.id, &embedding) {
                                log::warn!(
                                    "Failed to persist embedding for {}: {e}",
                                    regulation.id
                                );
                            }
                            embedding
                        }
                    };
                    embeddings.push((regulation.id.clone(), embedding));
                }
                Ok(memo.insert(embeddings).as_slice())
            }
        }
    }
}
