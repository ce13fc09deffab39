// パーティション走査ワーカー本体

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::progress::ProgressManager;
use crate::domain::search::ordinal::{decode_ordinal, increment_digits, render_digits};
use crate::domain::search::{Alphabet, WorkPartition};

/// ワーカー間で共有する読み取り専用コンテキスト
///
/// found は最初に一致を見つけたワーカーが立て、兄弟ワーカーは次の
/// 確認タイミングで走査を打ち切る。
pub struct ScanContext {
    pub alphabet: Alphabet,
    pub target: String,
    pub found: Arc<AtomicBool>,
    pub progress: Arc<ProgressManager>,
    pub check_interval: usize,
}

impl ScanContext {
    fn should_stop(&self) -> bool {
        self.found.load(Ordering::Relaxed) || self.progress.is_aborted()
    }
}

/// 1パーティション分の走査結果
#[derive(Clone, Debug)]
pub struct ScanReport {
    /// このワーカーが実際に照合した候補数
    pub attempts: u64,
    pub matched: Option<String>,
}

/// [start, end) の各序数を候補に写像して対象と照合する
///
/// 序数は一度だけ復号し、以後はオドメーター式に進める。停止フラグは
/// check_interval 候補ごとに確認し、その際に進捗をフラッシュする。
pub fn scan_partition(ctx: &ScanContext, part: WorkPartition) -> ScanReport {
    let mut digits = decode_ordinal(&ctx.alphabet, part.length, part.start);
    let mut buf = String::with_capacity(part.length);
    let mut attempts: u64 = 0;
    let mut unflushed: u64 = 0;

    let mut ordinal = part.start;
    while ordinal < part.end {
        render_digits(&ctx.alphabet, &digits, &mut buf);
        attempts += 1;
        unflushed += 1;

        if buf == ctx.target {
            ctx.found.store(true, Ordering::Relaxed);
            ctx.progress.add_attempts(unflushed);
            return ScanReport {
                attempts,
                matched: Some(buf),
            };
        }

        if unflushed as usize >= ctx.check_interval {
            ctx.progress.add_attempts(unflushed);
            unflushed = 0;
            if ctx.should_stop() {
                return ScanReport {
                    attempts,
                    matched: None,
                };
            }
        }

        increment_digits(&ctx.alphabet, &mut digits);
        ordinal += 1;
    }

    ctx.progress.add_attempts(unflushed);
    ScanReport {
        attempts,
        matched: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(alphabet: &str, target: &str) -> ScanContext {
        ScanContext {
            alphabet: Alphabet::new(alphabet).unwrap(),
            target: target.to_string(),
            found: Arc::new(AtomicBool::new(false)),
            progress: Arc::new(ProgressManager::new()),
            check_interval: 4,
        }
    }

    #[test]
    fn finds_target_inside_partition() {
        let c = ctx("ab", "ba");
        // 長さ2の序数空間: aa, ab, ba, bb
        let report = scan_partition(
            &c,
            WorkPartition { length: 2, start: 0, end: 4 },
        );
        assert_eq!(report.matched.as_deref(), Some("ba"));
        assert_eq!(report.attempts, 3);
        assert!(c.found.load(Ordering::Relaxed));
    }

    #[test]
    fn exhausts_partition_without_match() {
        let c = ctx("xyz", "qq");
        let report = scan_partition(
            &c,
            WorkPartition { length: 2, start: 0, end: 9 },
        );
        assert!(report.matched.is_none());
        assert_eq!(report.attempts, 9);
        assert_eq!(c.progress.get_stats().attempts, 9);
    }

    #[test]
    fn respects_partition_bounds() {
        // 序数2のみの区間。候補は "ba" だけで "aa" は照合しない
        let c = ctx("ab", "aa");
        let report = scan_partition(
            &c,
            WorkPartition { length: 2, start: 2, end: 3 },
        );
        assert!(report.matched.is_none());
        assert_eq!(report.attempts, 1);
    }

    #[test]
    fn stops_early_when_found_flag_is_set() {
        let c = ctx("ab", "zz");
        c.found.store(true, Ordering::Relaxed);
        let report = scan_partition(
            &c,
            WorkPartition { length: 3, start: 0, end: 8 },
        );
        // 最初のチェック間隔（4候補）で打ち切る
        assert!(report.matched.is_none());
        assert_eq!(report.attempts, 4);
    }

    #[test]
    fn flushes_all_attempts_to_progress() {
        let c = ctx("abc", "nope");
        let report = scan_partition(
            &c,
            WorkPartition { length: 3, start: 5, end: 27 },
        );
        assert_eq!(report.attempts, 22);
        assert_eq!(c.progress.get_stats().attempts, 22);
    }
}
