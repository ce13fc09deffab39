// 探索関連のドメインモデル

pub mod config;
pub mod ordinal;
pub mod result;

pub use config::{Alphabet, LengthRange, SearchSpec};
pub use ordinal::{candidate_at, ordinal_space, partition_space, WorkPartition};
pub use result::SearchResult;
