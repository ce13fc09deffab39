// インフラ層 - 並列実行の技術的実装

pub mod executor;

pub use executor::{ParallelConfig, WorkerPool};
