// 並列実行管理

use anyhow::{anyhow, Result};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::constants::STOP_CHECK_INTERVAL;

/// 並列実行設定
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// ワーカースレッド数
    pub num_workers: usize,
    /// 停止フラグ確認と進捗フラッシュの間隔（候補数）
    pub check_interval: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            check_interval: STOP_CHECK_INTERVAL,
        }
    }
}

impl ParallelConfig {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
            check_interval: STOP_CHECK_INTERVAL,
        }
    }

    pub fn with_check_interval(mut self, interval: usize) -> Self {
        self.check_interval = interval.max(1);
        self
    }
}

/// 固定数のワーカースレッドにタスクを配るプール
///
/// 長さパスをまたいで再利用する。プールがドロップされるとタスク
/// チャネルが閉じ、ワーカーは現在のタスクを終えて終了する。
pub struct WorkerPool<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    task_tx: Sender<T>,
    result_rx: Receiver<R>,
    num_workers: usize,
}

impl<T, R> WorkerPool<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    /// ワーカースレッドを起動してプールを作る
    ///
    /// スレッド起動の失敗は呼び出し元へ伝播する（「見つからず」に
    /// 格下げしない）。
    pub fn spawn<F>(num_workers: usize, worker_fn: F) -> Result<Self>
    where
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        let num_workers = num_workers.max(1);
        let (task_tx, task_rx) = unbounded::<T>();
        let (result_tx, result_rx) = unbounded::<R>();

        for i in 0..num_workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let worker_fn = worker_fn.clone();

            std::thread::Builder::new()
                .name(format!("scan-worker-{}", i))
                .spawn(move || {
                    while let Ok(task) = task_rx.recv() {
                        let result = worker_fn(task);
                        if result_tx.send(result).is_err() {
                            break;
                        }
                    }
                })
                .map_err(|e| anyhow!("ワーカースレッドの起動に失敗しました: {}", e))?;
        }

        Ok(Self {
            task_tx,
            result_rx,
            num_workers,
        })
    }

    /// タスクを投入する
    pub fn dispatch(&self, task: T) -> Result<()> {
        self.task_tx
            .send(task)
            .map_err(|e| anyhow!("タスクの送信に失敗しました: {}", e))
    }

    /// 結果を受信する（ブロッキング）
    pub fn recv_result(&self) -> Result<R> {
        self.result_rx
            .recv()
            .map_err(|e| anyhow!("結果の受信に失敗しました: {}", e))
    }

    /// 結果を受信する（タイムアウト付き）
    ///
    /// 一致検出後の取り残しワーカーを待ちすぎないために使う。
    pub fn recv_result_timeout(&self, timeout: Duration) -> Result<Option<R>> {
        match self.result_rx.recv_timeout(timeout) {
            Ok(r) => Ok(Some(r)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(anyhow!("ワーカーが全て停止しました"))
            }
        }
    }

    /// ワーカー数を取得
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}
