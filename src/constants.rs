// 文字セット定数とエンジン調整値

/// 数字のみ
pub const DIGITS: &str = "0123456789";
/// 英小文字
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// 英大文字
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// 記号
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;':\",.<>?/\\";

/// 印字可能ASCII全体 (0x20..0x7F)
pub fn printable_ascii() -> String {
    (0x20u8..0x7F).map(char::from).collect()
}

/// ワーカーが停止フラグを確認し進捗をフラッシュする間隔（候補数）
pub const STOP_CHECK_INTERVAL: usize = 4096;

/// ベンチマークで使う候補長
pub const BENCHMARK_LENGTH: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_covers_full_range() {
        let s = printable_ascii();
        assert_eq!(s.chars().count(), 95);
        assert!(s.starts_with(' '));
        assert!(s.ends_with('~'));
    }
}
