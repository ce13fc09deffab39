// 序数空間と候補文字列の対応付け
//
// 固定長Lの候補全体は基数|alphabet|のL桁カウントと同型。
// 序数0が alphabet[0] の繰り返し、序数 |alphabet|^L - 1 が最終候補。

use anyhow::{anyhow, Result};

use super::config::Alphabet;

/// 1ワーカーに割り当てる序数の半開区間 [start, end)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkPartition {
    pub length: usize,
    pub start: u128,
    pub end: u128,
}

impl WorkPartition {
    pub fn size(&self) -> u128 {
        self.end - self.start
    }
}

/// 長さLの序数空間サイズ |alphabet|^L（オーバーフローは設定エラー）
pub fn ordinal_space(alphabet: &Alphabet, length: usize) -> Result<u128> {
    let k = alphabet.len() as u128;
    let exp = u32::try_from(length)
        .map_err(|_| anyhow!("候補長が大きすぎます: {}", length))?;
    k.checked_pow(exp)
        .ok_or_else(|| anyhow!("探索空間がu128を超えます: {}^{}", k, length))
}

/// 序数を混合基数分解して桁インデックス列（最上位桁が先頭）にする
pub fn decode_ordinal(alphabet: &Alphabet, length: usize, ordinal: u128) -> Vec<usize> {
    let k = alphabet.len() as u128;
    let mut digits = vec![0usize; length];
    let mut rest = ordinal;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % k) as usize;
        rest /= k;
    }
    digits
}

/// 桁インデックス列を候補文字列に組み立てる
pub fn render_digits(alphabet: &Alphabet, digits: &[usize], buf: &mut String) {
    buf.clear();
    let symbols = alphabet.symbols();
    buf.extend(digits.iter().map(|&d| symbols[d]));
}

/// 桁インデックス列をオドメーター式にインクリメントする
///
/// 最終候補からのインクリメントは全桁0へ巻き戻る（呼び出し側が範囲末尾で停止する）。
pub fn increment_digits(alphabet: &Alphabet, digits: &mut [usize]) {
    let k = alphabet.len();
    for d in digits.iter_mut().rev() {
        *d += 1;
        if *d < k {
            return;
        }
        *d = 0;
    }
}

/// 序数から候補文字列への純関数写像
pub fn candidate_at(alphabet: &Alphabet, length: usize, ordinal: u128) -> String {
    let digits = decode_ordinal(alphabet, length, ordinal);
    let mut buf = String::with_capacity(length);
    render_digits(alphabet, &digits, &mut buf);
    buf
}

/// [0, n) を workers 個の連続区間に分割する
///
/// 末尾区間が整数除算の余りを吸収する。空区間は生成しない。
/// 区間の和集合は常に [0, n) に一致し、重複もない。
pub fn partition_space(n: u128, workers: usize, length: usize) -> Vec<WorkPartition> {
    let w = workers.max(1) as u128;
    let base = n / w;
    let mut parts = Vec::with_capacity(workers);
    for i in 0..w {
        let start = i * base;
        let end = if i == w - 1 { n } else { (i + 1) * base };
        if start < end {
            parts.push(WorkPartition { length, start, end });
        }
    }
    parts
}
