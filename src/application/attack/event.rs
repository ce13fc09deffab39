// 攻撃エンジンのイベント定義（UI層に依存しない）

use num_bigint::BigUint;

use crate::domain::search::SearchResult;

/// 探索進捗の統計情報
#[derive(Clone, Debug)]
pub struct SearchProgress {
    /// 現在探索中の候補長
    pub current_length: usize,
    /// 照合済み候補数
    pub attempts: u64,
    /// 全長さ合計の組み合わせ総数
    pub total_combinations: BigUint,
    /// 照合速度（候補/秒）
    pub rate: f64,
}

/// エンジンからのイベント
#[derive(Clone, Debug)]
pub enum SearchEvent {
    /// ログメッセージ
    Log(String),
    /// 進捗更新
    Progress(SearchProgress),
    /// 探索完了（一致または空振り）
    Finished(SearchResult),
    /// 中断による終了
    Aborted,
    /// エラー発生
    Error(String),
}
