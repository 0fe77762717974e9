/// 照合結果
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// 候補リスト内の位置（リンクの対応付けに使う）
    pub index: usize,
    pub candidate: String,
    /// 類似度 (0.0〜1.0)
    pub ratio: f64,
}
