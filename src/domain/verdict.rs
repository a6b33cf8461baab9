use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::requirement::StructuredRequirement;

/// Comment rendered when a requirement matched no regulation.
pub const NO_MATCHES_COMMENT: &str = "no matches found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Matched,
    Unmatched,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Matched => f.write_str("matched"),
            MatchStatus::Unmatched => f.write_str("unmatched"),
        }
    }
}

/// One regulation whose similarity to the requirement exceeded the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchComment {
    pub regulation_id: String,
    pub similarity: f32,
}

impl MatchComment {
    /// Similarity is rounded to two decimals at construction so rendered and
    /// persisted values stay identical.
    pub fn new(regulation_id: impl Into<String>, similarity: f32) -> Self {
        Self {
            regulation_id: regulation_id.into(),
            similarity: (similarity * 100.0).round() / 100.0,
        }
    }
}

impl fmt::Display for MatchComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matches regulation {} (similarity: {:.2})",
            self.regulation_id, self.similarity
        )
    }
}

/// The outcome of matching one requirement against the whole corpus.
///
/// `comments` is empty exactly when `status` is [`MatchStatus::Unmatched`];
/// rendering substitutes the [`NO_MATCHES_COMMENT`] sentinel in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementVerdict {
    pub requirement: StructuredRequirement,
    pub status: MatchStatus,
    pub comments: Vec<MatchComment>,
}

impl RequirementVerdict {
    /// Three labeled lines: requirement summary, status, joined comments.
    pub fn render(&self) -> String {
        let comments = if self.comments.is_empty() {
            NO_MATCHES_COMMENT.to_string()
        } else {
            self.comments
                .iter()
                .map(MatchComment::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };

        format!(
            "Requirement: {}\nStatus: {}\nComments: {}",
            self.requirement.summary(),
            self.status,
            comments
        )
    }
}

/// Ordered verdicts for every requirement of one source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub document_id: String,
    pub verdicts: Vec<RequirementVerdict>,
}

impl CheckResult {
    /// Human-readable rendering, verdicts separated by a blank line.
    pub fn render(&self) -> String {
        self.verdicts
            .iter()
            .map(RequirementVerdict::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckResult, MatchComment, MatchStatus, RequirementVerdict};
    use crate::domain::requirement::StructuredRequirement;

    #[test]
    fn comment_similarity_is_rounded_to_two_decimals() {
        let comment = MatchComment::new("gdpr.txt", 0.987_654);

        assert_eq!(comment.similarity, 0.99);
        assert_eq!(
            comment.to_string(),
            "matches regulation gdpr.txt (similarity: 0.99)"
        );
    }

    #[test]
    fn unmatched_verdict_renders_the_sentinel() {
        let verdict = RequirementVerdict {
            requirement: StructuredRequirement::default(),
            status: MatchStatus::Unmatched,
            comments: vec![],
        };

        assert_eq!(
            verdict.render(),
            "Requirement: \nStatus: unmatched\nComments: no matches found"
        );
    }

    #[test]
    fn matched_verdict_joins_comments_in_order() {
        let verdict = RequirementVerdict {
            requirement: StructuredRequirement::default(),
            status: MatchStatus::Matched,
            comments: vec![
                MatchComment::new("a.txt", 1.0),
                MatchComment::new("b.txt", 0.95),
            ],
        };

        assert!(verdict.render().ends_with(
            "Comments: matches regulation a.txt (similarity: 1.00); \
             matches regulation b.txt (similarity: 0.95)"
        ));
    }

    #[test]
    fn check_result_separates_verdicts_with_a_blank_line() {
        let verdict = RequirementVerdict {
            requirement: StructuredRequirement::default(),
            status: MatchStatus::Unmatched,
            comments: vec![],
        };
        let result = CheckResult {
            document_id: "ReportA".to_string(),
            verdicts: vec![verdict.clone(), verdict],
        };

        assert_eq!(result.render().matches("\n\n").count(), 1);
    }
}
