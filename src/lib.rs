pub mod corpus;
pub mod domain;
pub mod models;
pub mod processing;
pub mod repository;

/// Shared cosine-similarity threshold for requirement-to-regulation matching.
pub const SIMILARITY_THRESHOLD: f32 = 0.9;
