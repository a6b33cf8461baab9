//! Text embedding and vector similarity primitives.

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct EmbeddingError(pub String);

/// Produces a fixed-size vector summarizing a text's meaning.
///
/// The checker takes an embedder at construction time so tests can substitute
/// a deterministic stub for the pretrained model.
pub trait TextEmbedder {
    fn embed(&mut self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Pretrained fastembed model shared by requirements and regulations.
///
/// Texts beyond the model's token budget are truncated from the tail, keeping
/// the leading tokens; the vector is the mean of per-token representations,
/// so its size does not depend on input length.
pub struct FastembedEmbedder {
    model: TextEmbedding,
}

impl FastembedEmbedder {
    pub fn try_new() -> Result<Self, EmbeddingError> {
        let model = TextEmbedding::try_new(InitOptions::new(EmbeddingModel::MultilingualE5Large))
            .map_err(|error| {
                EmbeddingError(format!("Failed to initialize embedding model: {error:?}"))
            })?;
        Ok(Self { model })
    }
}

impl TextEmbedder for FastembedEmbedder {
    fn embed(&mut self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let embedding = self
            .model
            .embed(vec![text], None)
            .map_err(|error| EmbeddingError(format!("Failed to generate embedding: {error:?}")))?
            .into_iter()
            .next()
            .map(|value| normalize_embedding(&value))
            .unwrap_or_default();

        Ok(embedding)
    }
}

/// Normalize a vector to unit length.
///
/// Returns the original vector when the norm is zero.
pub(crate) fn normalize_embedding(vec: &[f32]) -> Vec<f32> {
    let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        vec.to_vec()
    } else {
        vec.iter().map(|x| x / norm).collect()
    }
}

/// Cosine similarity of two vectors: symmetric, bounded in [-1, 1], invariant
/// to vector scale. Zero when either vector has zero norm or the dimensions
/// disagree.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::{cosine_similarity, normalize_embedding};

    #[test]
    fn normalize_embedding_returns_zero_vector_unchanged() {
        let zero = vec![0.0_f32, 0.0, 0.0];

        assert_eq!(normalize_embedding(&zero), zero);
    }

    #[test]
    fn normalize_embedding_produces_unit_length() {
        let normalized = normalize_embedding(&[3.0, 4.0]);

        let norm = normalized.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_a_vector_with_itself_is_one() {
        let v = vec![0.2_f32, 0.5, 0.8];

        assert!(cosine_similarity(&v, &v) >= 0.9999);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);

        assert!(similarity.abs() < 1e-6);
    }

    #[test]
    fn cosine_is_invariant_to_scale() {
        let a = [0.3_f32, 0.7, 0.1];
        let b: Vec<f32> = a.iter().map(|x| x * 42.0).collect();

        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }
}
