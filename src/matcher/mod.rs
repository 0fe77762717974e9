//! 機種名のあいまい照合
//!
//! カタログの候補一覧から、EXIFの機種名に最も近い表示名を選ぶ。

mod similarity;
mod types;

pub use similarity::similarity_ratio;
pub use types::MatchResult;

/// 類似度の下限（これ未満の候補は採用しない）
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// 最も類似度の高い候補を返す
///
/// 同率の場合は入力順で先の候補を採用する。
/// 候補が空、または最高値が `cutoff` 未満なら `None`。
pub fn closest_match<S: AsRef<str>>(
    target: &str,
    candidates: &[S],
    cutoff: f64,
) -> Option<MatchResult> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let ratio = similarity_ratio(target, candidate.as_ref());
        // 厳密に大きい場合のみ更新（同率は先勝ち）
        if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
            best = Some((index, ratio));
        }
    }

    let (index, ratio) = best?;
    if ratio < cutoff {
        return None;
    }

    Some(MatchResult {
        index,
        candidate: candidates[index].as_ref().to_string(),
        ratio,
    })
}
