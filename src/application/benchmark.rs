// スループット計測
//
// 攻撃本体と同一のコストモデル（序数の復号 + 文字列等価比較）で
// 計測する。ハッシュ化は行わない。計測値は見積もりの分母にだけ使う。

use anyhow::Result;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::domain::search::{candidate_at, ordinal_space, Alphabet};

/// 既定の計測時間
pub const DEFAULT_BENCH_DURATION: Duration = Duration::from_secs(3);

/// タイマー確認を間引く内側ループ回数
const INNER_BATCH: u32 = 256;

/// 指定時間ランダムな序数の候補を生成・照合して候補/秒を返す
pub fn measure_throughput(
    alphabet: &Alphabet,
    length: usize,
    duration: Duration,
) -> Result<u64> {
    let n = ordinal_space(alphabet, length)?;
    let reference = candidate_at(alphabet, length, n - 1);
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut guesses: u64 = 0;
    while start.elapsed() < duration {
        for _ in 0..INNER_BATCH {
            let ordinal = rng.gen_range(0..n);
            let candidate = candidate_at(alphabet, length, ordinal);
            std::hint::black_box(candidate == reference);
            guesses += 1;
        }
    }

    let secs = start.elapsed().as_secs_f64();
    Ok(((guesses as f64 / secs).max(1.0)) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throughput_is_positive() {
        let a = Alphabet::new("abcdefgh").unwrap();
        let gps = measure_throughput(&a, 4, Duration::from_millis(50)).unwrap();
        assert!(gps > 0);
    }

    #[test]
    fn works_with_single_symbol_alphabet() {
        let a = Alphabet::new("a").unwrap();
        let gps = measure_throughput(&a, 3, Duration::from_millis(20)).unwrap();
        assert!(gps > 0);
    }

    #[test]
    fn oversized_space_is_an_error() {
        let a = Alphabet::new("ab").unwrap();
        assert!(measure_throughput(&a, 200, Duration::from_millis(10)).is_err());
    }
}
