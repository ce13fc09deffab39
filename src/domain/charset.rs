// 名前付き文字セットのレジストリ
//
// 起動時に一度だけ構築し、以後は不変。エンジンへは明示的に渡す。

use crate::constants::{printable_ascii, DIGITS, LOWERCASE, SPECIAL, UPPERCASE};

/// レジストリの1エントリ
#[derive(Clone, Debug)]
pub struct CharsetEntry {
    pub name: &'static str,
    pub symbols: String,
}

/// 不変の文字セットレジストリ
#[derive(Clone, Debug)]
pub struct CharsetRegistry {
    entries: Vec<CharsetEntry>,
}

impl CharsetRegistry {
    pub fn new() -> Self {
        let entries = vec![
            CharsetEntry { name: "digits", symbols: DIGITS.to_string() },
            CharsetEntry { name: "lowercase", symbols: LOWERCASE.to_string() },
            CharsetEntry { name: "uppercase", symbols: UPPERCASE.to_string() },
            CharsetEntry { name: "special", symbols: SPECIAL.to_string() },
            CharsetEntry { name: "all", symbols: printable_ascii() },
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[CharsetEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.symbols.as_str())
    }

    /// メニュー表示用の1始まり番号でエントリを引く
    pub fn by_index(&self, index: usize) -> Option<&CharsetEntry> {
        if index == 0 {
            return None;
        }
        self.entries.get(index - 1)
    }

    /// 既定の文字セット（印字可能ASCII全体）
    pub fn default_symbols(&self) -> &str {
        self.get("all").unwrap_or(DIGITS)
    }
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_known_names() {
        let reg = CharsetRegistry::new();
        assert_eq!(reg.get("digits"), Some("0123456789"));
        assert_eq!(reg.get("lowercase").unwrap().len(), 26);
        assert!(reg.get("unknown").is_none());
    }

    #[test]
    fn all_charset_is_printable_ascii() {
        let reg = CharsetRegistry::new();
        assert_eq!(reg.get("all").unwrap().chars().count(), 95);
        assert_eq!(reg.default_symbols().chars().count(), 95);
    }

    #[test]
    fn by_index_is_one_based() {
        let reg = CharsetRegistry::new();
        assert_eq!(reg.by_index(1).unwrap().name, "digits");
        assert!(reg.by_index(0).is_none());
        assert!(reg.by_index(99).is_none());
    }
}
