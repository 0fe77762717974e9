/// 検索結果一覧の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 表示名（あいまい照合の対象）
    pub display_name: String,
    /// 製品ページのURL
    pub page_link: String,
}

/// 検索結果ページの解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// トップ製品欄のリンク（欄がない、またはリンクがない場合は None）
    pub top_product: Option<String>,
    pub entries: Vec<CatalogEntry>,
}
