use serde::{Deserialize, Serialize};

/// A single regulatory document, immutable once loaded into the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    /// Stable source identifier, the file name inside the regulations directory.
    pub id: String,
    pub text: String,
}
