// ドメイン層 - 候補列挙のビジネスロジック

pub mod charset;
pub mod search;
