pub mod checker;
pub mod embedding;
pub mod extract;
pub mod matcher;
