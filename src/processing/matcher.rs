//! Threshold-based matching of one requirement against the corpus.

use crate::domain::verdict::{MatchComment, MatchStatus};
use crate::processing::embedding::cosine_similarity;

/// Score the requirement embedding against every regulation embedding.
///
/// A regulation matches when its cosine similarity strictly exceeds
/// `threshold`. Every qualifying regulation is reported, in the corpus order
/// the embeddings were provided in. An empty comment list means unmatched.
pub fn match_requirement(
    requirement_embedding: &[f32],
    regulation_embeddings: &[(String, Vec<f32>)],
    threshold: f32,
) -> (MatchStatus, Vec<MatchComment>) {
    let mut comments = Vec::new();

    for (regulation_id, embedding) in regulation_embeddings {
        let similarity = cosine_similarity(requirement_embedding, embedding);
        if similarity > threshold {
            comments.push(MatchComment::new(regulation_id.clone(), similarity));
        }
    }

    let status = if comments.is_empty() {
        MatchStatus::Unmatched
    } else {
        MatchStatus::Matched
    };

    (status, comments)
}
