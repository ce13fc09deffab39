// 攻撃エンジン
//
// 長さを昇順に走査し、各長さの序数空間をワーカー数で分割して
// プールに配る。最初の一致で残りを打ち切り、取り残しワーカーは
// 待たずに結果を返す。

use anyhow::Result;
use crossbeam_channel::Sender;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::attack::event::{SearchEvent, SearchProgress};
use crate::application::attack::scan::{scan_partition, ScanContext, ScanReport};
use crate::application::estimate::total_combinations;
use crate::application::progress::ProgressManager;
use crate::domain::search::{ordinal_space, partition_space, SearchResult, SearchSpec, WorkPartition};
use crate::infrastructure::executor::{ParallelConfig, WorkerPool};
use crate::vlog;

/// 一致検出後に取り残しワーカーを待つ上限
const STRAGGLER_DRAIN: Duration = Duration::from_millis(50);
/// 進捗イベントの送信間隔
const PROGRESS_TICK: Duration = Duration::from_millis(500);

/// 総当たり攻撃を実行する
///
/// 仕様の検証は並列実行の開始前に行い、不正な仕様では一切の
/// ワーカーを起動しない。
pub fn run_attack(
    spec: &SearchSpec,
    config: &ParallelConfig,
    tx: Sender<SearchEvent>,
    progress: Arc<ProgressManager>,
) -> Result<SearchResult> {
    spec.validate()?;

    let total = total_combinations(&spec.alphabet, &spec.lengths);
    let _ = tx.send(SearchEvent::Log(format!(
        "探索開始: アルファベット={}記号 / 長さ{}..={} / 組み合わせ総数={} / ワーカー={}",
        spec.alphabet.len(),
        spec.lengths.min(),
        spec.lengths.max(),
        total,
        config.num_workers,
    )));

    let found = Arc::new(AtomicBool::new(false));
    let ctx = Arc::new(ScanContext {
        alphabet: spec.alphabet.clone(),
        target: spec.target.clone(),
        found: Arc::clone(&found),
        progress: Arc::clone(&progress),
        check_interval: config.check_interval,
    });

    // 長さパスをまたいで再利用する固定プール
    let pool: WorkerPool<WorkPartition, ScanReport> = {
        let ctx = Arc::clone(&ctx);
        WorkerPool::spawn(config.num_workers, move |part| scan_partition(&ctx, part))?
    };

    let start_time = Instant::now();
    let mut attempts: u128 = 0;

    for length in spec.lengths.iter() {
        if progress.is_aborted() {
            break;
        }
        progress.set_current_length(length);

        let n = ordinal_space(&spec.alphabet, length)?;
        let parts = partition_space(n, pool.num_workers(), length);
        vlog!("長さ{}: 空間={} / 分割数={}", length, n, parts.len());

        for part in &parts {
            pool.dispatch(*part)?;
        }

        let mut outstanding = parts.len();
        let mut matched: Option<String> = None;

        while outstanding > 0 {
            let timeout = if matched.is_some() {
                STRAGGLER_DRAIN
            } else {
                PROGRESS_TICK
            };
            match pool.recv_result_timeout(timeout)? {
                Some(report) => {
                    outstanding -= 1;
                    attempts += u128::from(report.attempts);
                    if report.matched.is_some() && matched.is_none() {
                        matched = report.matched;
                    }
                }
                None if matched.is_some() => {
                    // 取り残しは放棄する。遅れて届く結果は捨てられる
                    break;
                }
                None => {
                    let _ = tx.send(SearchEvent::Progress(SearchProgress {
                        current_length: length,
                        attempts: progress.get_stats().attempts,
                        total_combinations: total.clone(),
                        rate: progress.attempts_per_second(),
                    }));
                }
            }
        }

        if let Some(candidate) = matched {
            let result = SearchResult::matched(candidate, attempts, start_time.elapsed());
            let _ = tx.send(SearchEvent::Finished(result.clone()));
            return Ok(result);
        }
    }

    let result = SearchResult::exhausted(attempts, start_time.elapsed());
    if progress.is_aborted() {
        let _ = tx.send(SearchEvent::Aborted);
    } else {
        let _ = tx.send(SearchEvent::Finished(result.clone()));
    }
    Ok(result)
}
