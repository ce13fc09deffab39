// 探索結果の定義

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 1回の攻撃呼び出しの最終成果物（構築後は不変）
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub found: bool,
    pub candidate: Option<String>,
    /// 実際に照合した候補数（短絡時は完了分のみ）
    pub attempts: u128,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn matched(candidate: String, attempts: u128, elapsed: Duration) -> Self {
        Self {
            found: true,
            candidate: Some(candidate),
            attempts,
            elapsed,
        }
    }

    pub fn exhausted(attempts: u128, elapsed: Duration) -> Self {
        Self {
            found: false,
            candidate: None,
            attempts,
            elapsed,
        }
    }
}
