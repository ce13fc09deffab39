// 総当たり攻撃サービス

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{unbounded, Receiver};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::application::attack::engine::run_attack;
use crate::application::attack::event::SearchEvent;
use crate::application::progress::{ProgressManager, ProgressStats};
use crate::domain::search::{SearchResult, SearchSpec};
use crate::infrastructure::executor::ParallelConfig;

/// 実行中の攻撃へのハンドル
pub struct AttackHandle {
    progress: Arc<ProgressManager>,
    events: Receiver<SearchEvent>,
    thread: JoinHandle<Result<SearchResult>>,
}

impl AttackHandle {
    /// 攻撃を中断
    pub fn abort(&self) {
        self.progress.abort();
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.progress.is_aborted()
    }

    /// 進捗統計を取得
    pub fn get_progress(&self) -> ProgressStats {
        self.progress.get_stats()
    }

    /// イベント受信チャネル
    pub fn events(&self) -> &Receiver<SearchEvent> {
        &self.events
    }

    /// 完了を待って結果を取得する
    pub fn wait(self) -> Result<SearchResult> {
        self.thread
            .join()
            .map_err(|_| anyhow!("攻撃スレッドが異常終了しました"))?
    }
}

/// 総当たり攻撃を管理するサービス
pub struct AttackService {
    progress: Arc<ProgressManager>,
}

impl AttackService {
    pub fn new() -> Self {
        Self {
            progress: Arc::new(ProgressManager::new()),
        }
    }

    /// 攻撃を開始する（メインユースケース）
    ///
    /// 仕様の検証は起動前に同期で行う。エンジンは背景スレッドで走り、
    /// 進捗とログはイベントチャネル越しに届く。
    pub fn start_attack(
        &mut self,
        spec: SearchSpec,
        config: ParallelConfig,
    ) -> Result<AttackHandle> {
        // 1. 事前検証
        spec.validate().context("探索仕様の検証に失敗しました")?;

        // 2. 攻撃ごとに新しい進捗マネージャーを用意する
        //    （前回の取り残しワーカーと共有しないため）
        let progress = Arc::new(ProgressManager::new());
        self.progress = Arc::clone(&progress);

        // 3. エンジンスレッドを起動
        let (tx, rx) = unbounded();
        let thread = std::thread::Builder::new()
            .name("attack-engine".into())
            .spawn(move || {
                let result = run_attack(&spec, &config, tx.clone(), progress);
                if let Err(ref e) = result {
                    let _ = tx.send(SearchEvent::Error(format!("{:#}", e)));
                }
                result
            })
            .context("攻撃スレッドの起動に失敗しました")?;

        Ok(AttackHandle {
            progress: Arc::clone(&self.progress),
            events: rx,
            thread,
        })
    }
}

impl Default for AttackService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{Alphabet, LengthRange};

    fn small_spec(target: &str) -> SearchSpec {
        SearchSpec::new(
            target,
            Alphabet::new("ab").unwrap(),
            LengthRange::new(1, 2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn attack_lifecycle_finds_target() {
        let mut service = AttackService::new();
        let handle = service
            .start_attack(small_spec("ba"), ParallelConfig::new(2))
            .unwrap();
        let result = handle.wait().unwrap();
        assert!(result.found);
        assert_eq!(result.candidate.as_deref(), Some("ba"));
    }

    #[test]
    fn attack_emits_finished_event() {
        let mut service = AttackService::new();
        let handle = service
            .start_attack(small_spec("ab"), ParallelConfig::new(2))
            .unwrap();
        let events = handle.events().clone();
        let result = handle.wait().unwrap();
        assert!(result.found);
        let seen: Vec<_> = events.try_iter().collect();
        assert!(seen.iter().any(|e| matches!(e, SearchEvent::Finished(_))));
    }

    #[test]
    fn handle_can_abort() {
        let mut service = AttackService::new();
        let handle = service
            .start_attack(small_spec("zz"), ParallelConfig::new(1))
            .unwrap();
        assert!(!handle.is_aborted());
        handle.abort();
        assert!(handle.is_aborted());
        let _ = handle.wait();
    }

    #[test]
    fn service_can_run_consecutive_attacks() {
        let mut service = AttackService::new();
        let first = service
            .start_attack(small_spec("a"), ParallelConfig::new(1))
            .unwrap();
        assert!(first.wait().unwrap().found);

        let second = service
            .start_attack(small_spec("bb"), ParallelConfig::new(1))
            .unwrap();
        let result = second.wait().unwrap();
        assert!(result.found);
        assert_eq!(result.candidate.as_deref(), Some("bb"));
    }
}
