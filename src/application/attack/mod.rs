// 総当たり攻撃のアプリケーションサービス

pub mod engine;
pub mod event;
pub mod scan;
pub mod service;

pub use engine::run_attack;
pub use event::{SearchEvent, SearchProgress};
pub use service::{AttackHandle, AttackService};
