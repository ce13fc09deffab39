// 探索設定のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 候補文字列を構成するアルファベットを表すValue Object
///
/// 順序付きで重複のない記号列。1回の探索の間は不変。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.is_empty() {
            return Err(anyhow!("アルファベットが空です"));
        }
        let mut seen = HashSet::new();
        for &c in &chars {
            if !seen.insert(c) {
                return Err(anyhow!("アルファベットに重複記号があります: {:?}", c));
            }
        }
        Ok(Self(chars))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.0
    }

    /// 対象文字列が全てこのアルファベットの記号で構成されるか
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.0.contains(&c))
    }
}

/// 候補長の範囲を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 {
            return Err(anyhow!("最小長は1以上である必要があります"));
        }
        if min > max {
            return Err(anyhow!("最小長({})が最大長({})を超えています", min, max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// 昇順の長さイテレータ
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.min..=self.max
    }
}

/// 1回の攻撃呼び出しの探索仕様
///
/// 構築時に検証済み。実行中は読み取り専用。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSpec {
    pub target: String,
    pub alphabet: Alphabet,
    pub lengths: LengthRange,
}

impl SearchSpec {
    pub fn new(target: &str, alphabet: Alphabet, lengths: LengthRange) -> Result<Self> {
        Ok(Self {
            target: target.to_string(),
            alphabet,
            lengths,
        })
    }

    /// 並列実行開始前の同期検証
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(anyhow!("アルファベットが空です"));
        }
        if self.lengths.min() == 0 || self.lengths.min() > self.lengths.max() {
            return Err(anyhow!("長さ範囲が不正です"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_rejects_empty() {
        assert!(Alphabet::new("").is_err());
    }

    #[test]
    fn alphabet_rejects_duplicates() {
        assert!(Alphabet::new("abca").is_err());
    }

    #[test]
    fn alphabet_accepts_valid() {
        let a = Alphabet::new("abc").unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.symbols(), &['a', 'b', 'c']);
    }

    #[test]
    fn alphabet_contains_all() {
        let a = Alphabet::new("xyz").unwrap();
        assert!(a.contains_all("zyx"));
        assert!(!a.contains_all("qq"));
    }

    #[test]
    fn length_range_rejects_zero_min() {
        assert!(LengthRange::new(0, 3).is_err());
    }

    #[test]
    fn length_range_rejects_inverted() {
        assert!(LengthRange::new(4, 2).is_err());
    }

    #[test]
    fn length_range_iterates_ascending() {
        let r = LengthRange::new(2, 4).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn spec_validates() {
        let spec = SearchSpec::new(
            "ba",
            Alphabet::new("ab").unwrap(),
            LengthRange::new(1, 2).unwrap(),
        )
        .unwrap();
        assert!(spec.validate().is_ok());
    }
}
