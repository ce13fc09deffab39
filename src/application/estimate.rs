// 探索規模の見積もり
//
// 組み合わせ総数はBigUintで厳密に計算する。95記号×長さ8以上で
// u64を超えるため、固定幅整数での合計は許されない。

use anyhow::{anyhow, Result};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::domain::search::{Alphabet, LengthRange};

/// 1秒 = 各単位の秒数（年365日、月30日換算）
const SECONDS_PER_YEAR: u128 = 31_536_000;
const SECONDS_PER_MONTH: u128 = 2_592_000;
const SECONDS_PER_DAY: u128 = 86_400;
const SECONDS_PER_HOUR: u128 = 3_600;
const SECONDS_PER_MINUTE: u128 = 60;

/// 探索規模の見積もり結果
#[derive(Clone, Debug)]
pub struct SearchEstimate {
    /// 全長さ合計の組み合わせ総数
    pub total_combinations: BigUint,
    /// 桁区切り表示（例: 6,634,204,312,890,625）
    pub total_display: String,
    /// 指数表示（例: 6.63e15）
    pub total_scientific: String,
    /// 想定スループットでの所要時間表示
    pub estimated_duration: String,
}

/// Σ |alphabet|^L (L = min..=max)
pub fn total_combinations(alphabet: &Alphabet, lengths: &LengthRange) -> BigUint {
    let k = BigUint::from(alphabet.len());
    let mut total = BigUint::zero();
    for length in lengths.iter() {
        total += k.pow(length as u32);
    }
    total
}

/// 組み合わせ総数と所要時間見積もりを計算する
pub fn estimate_search_size(
    alphabet: &Alphabet,
    lengths: &LengthRange,
    guesses_per_second: u64,
) -> Result<SearchEstimate> {
    if guesses_per_second == 0 {
        return Err(anyhow!("スループットは1以上である必要があります"));
    }
    let total = total_combinations(alphabet, lengths);
    let seconds = total.to_f64().unwrap_or(f64::INFINITY) / guesses_per_second as f64;

    Ok(SearchEstimate {
        total_display: format_thousands(&total),
        total_scientific: format!("{:.2e}", total.to_f64().unwrap_or(f64::INFINITY)),
        estimated_duration: format_duration(seconds),
        total_combinations: total,
    })
}

/// 秒数を「Ny Nmo Nd Nh Nm Ns」形式にする
pub fn format_duration(seconds: f64) -> String {
    // f64→u128 は飽和変換。天文学的な値はそのまま巨大な年数になる
    let total = if seconds.is_finite() { seconds } else { f64::MAX } as u128;
    let (years, rest) = (total / SECONDS_PER_YEAR, total % SECONDS_PER_YEAR);
    let (months, rest) = (rest / SECONDS_PER_MONTH, rest % SECONDS_PER_MONTH);
    let (days, rest) = (rest / SECONDS_PER_DAY, rest % SECONDS_PER_DAY);
    let (hours, rest) = (rest / SECONDS_PER_HOUR, rest % SECONDS_PER_HOUR);
    let (minutes, secs) = (rest / SECONDS_PER_MINUTE, rest % SECONDS_PER_MINUTE);
    format!(
        "{}y {}mo {}d {}h {}m {}s",
        years, months, days, hours, minutes, secs
    )
}

/// 整数文字列に3桁ごとの桁区切りを入れる
pub fn format_thousands(value: &BigUint) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
