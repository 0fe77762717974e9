//! 文字列の類似度
//!
//! Ratcliff/Obershelp方式: 最長一致ブロックを取り、その左右を再帰的に照合する。
//! 類似度 = 2 * 一致文字数 / 両文字列の合計文字数

/// 類似度を計算（0.0〜1.0、完全一致で1.0）
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a_chars, &b_chars) as f64 / total as f64
}

/// 一致ブロックに含まれる文字数の合計
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }

    size + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + size..], &b[b_start + size..])
}

/// 最長の共通連続ブロック (aの開始位置, bの開始位置, 長さ)
///
/// 同じ長さのブロックが複数あれば、aで先に現れるもの、次にbで先に現れるものを返す。
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        let mut current = vec![0usize; b.len() + 1];
        for j in 0..b.len() {
            if a[i] == b[j] {
                let len = prev[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = current;
    }

    best
}
