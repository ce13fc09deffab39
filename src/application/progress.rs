// 進捗管理

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 進捗統計のスナップショット
#[derive(Clone, Debug, Default)]
pub struct ProgressStats {
    /// 照合済み候補数（フラッシュ済み分）
    pub attempts: u64,
    /// 現在探索中の候補長（未開始は0）
    pub current_length: usize,
}

/// 進捗マネージャー
///
/// ワーカーはバッチ単位でattemptsを加算する。中断フラグは呼び出し側と
/// ワーカーの双方から参照される。
pub struct ProgressManager {
    abort_flag: Arc<AtomicBool>,
    attempts: Arc<AtomicU64>,
    current_length: Arc<AtomicUsize>,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            abort_flag: Arc::new(AtomicBool::new(false)),
            attempts: Arc::new(AtomicU64::new(0)),
            current_length: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    /// 中断フラグを取得
    pub fn abort_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort_flag)
    }

    /// 探索を中断
    pub fn abort(&self) {
        self.abort_flag.store(true, Ordering::Relaxed);
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.abort_flag.load(Ordering::Relaxed)
    }

    /// 照合済み候補数を追加
    pub fn add_attempts(&self, count: u64) {
        self.attempts.fetch_add(count, Ordering::Relaxed);
    }

    /// 現在の候補長を記録
    pub fn set_current_length(&self, length: usize) {
        self.current_length.store(length, Ordering::Relaxed);
    }

    /// 現在の統計を取得
    pub fn get_stats(&self) -> ProgressStats {
        ProgressStats {
            attempts: self.attempts.load(Ordering::Relaxed),
            current_length: self.current_length.load(Ordering::Relaxed),
        }
    }

    /// 経過時間を取得
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 照合速度（候補/秒）を取得
    pub fn attempts_per_second(&self) -> f64 {
        let attempts = self.attempts.load(Ordering::Relaxed) as f64;
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            attempts / elapsed
        } else {
            0.0
        }
    }

    /// リセット
    pub fn reset(&mut self) {
        self.abort_flag.store(false, Ordering::Relaxed);
        self.attempts.store(0, Ordering::Relaxed);
        self.current_length.store(0, Ordering::Relaxed);
        self.start_time = Instant::now();
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_starts_clean() {
        let mgr = ProgressManager::new();
        assert!(!mgr.is_aborted());
        assert_eq!(mgr.get_stats().attempts, 0);
        assert_eq!(mgr.get_stats().current_length, 0);
    }

    #[test]
    fn can_abort() {
        let mgr = ProgressManager::new();
        assert!(!mgr.is_aborted());
        mgr.abort();
        assert!(mgr.is_aborted());
    }

    #[test]
    fn can_track_attempts() {
        let mgr = ProgressManager::new();
        mgr.add_attempts(100);
        mgr.add_attempts(50);
        assert_eq!(mgr.get_stats().attempts, 150);
    }

    #[test]
    fn tracks_current_length() {
        let mgr = ProgressManager::new();
        mgr.set_current_length(4);
        assert_eq!(mgr.get_stats().current_length, 4);
    }

    #[test]
    fn reset_clears_state() {
        let mut mgr = ProgressManager::new();
        mgr.add_attempts(100);
        mgr.abort();

        mgr.reset();
        assert!(!mgr.is_aborted());
        assert_eq!(mgr.get_stats().attempts, 0);
    }

    #[test]
    fn attempts_per_second_calculation() {
        let mgr = ProgressManager::new();
        mgr.add_attempts(1000);
        std::thread::sleep(Duration::from_millis(50));

        assert!(mgr.attempts_per_second() > 0.0);
    }
}
