// 総当たりパスワードクラッカー - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};
pub use num_bigint::BigUint;
pub use num_traits::{One, ToPrimitive, Zero};

// 主要な型を再エクスポート
pub use application::attack::{run_attack, AttackHandle, AttackService, SearchEvent};
pub use application::estimate::{estimate_search_size, SearchEstimate};
pub use domain::charset::CharsetRegistry;
pub use domain::search::{Alphabet, LengthRange, SearchResult, SearchSpec};
