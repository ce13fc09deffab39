// アプリケーション層 - 攻撃のユースケース

pub mod attack;
pub mod benchmark;
pub mod estimate;
pub mod progress;

pub use attack::{run_attack, AttackHandle, AttackService};
pub use benchmark::measure_throughput;
pub use estimate::{estimate_search_size, format_duration, SearchEstimate};
pub use progress::{ProgressManager, ProgressStats};
