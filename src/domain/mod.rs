pub mod regulation;
pub mod requirement;
pub mod verdict;
