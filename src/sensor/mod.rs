//! センサーサイズ文字列の解析
//!
//! カタログのスペック表にある `"APS-C (22.3 x 14.9 mm)"` や `"[22.3 x 14.9]mm"` のような
//! 文字列から (幅, 高さ) をmm単位で取り出す。

use crate::error::{Result, SensorSizeError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// センサーの物理サイズ（mm）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl fmt::Display for SensorDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?} {:?}]", self.width_mm, self.height_mm)
    }
}

/// センサーサイズ文字列を解析する
///
/// 空白1文字で区切り、最初に単独で現れる `"x"` の前後のトークンを数値とみなす。
/// - 幅: 直前のトークンの先頭1文字（括弧や引用符）を除いて数値化。
///   先頭が数字の場合は区切り文字がない書式とみなしてエラーにする
/// - 高さ: 直後のトークンを数値化。単位が付いていて失敗した場合のみ、先頭の数値部分を使う
///
/// # Examples
/// ```
/// use sensor_size::sensor::parse_sensor_size;
///
/// let dims = parse_sensor_size("APS-C (22.3 x 14.9 mm)").unwrap();
/// assert_eq!(dims.width_mm, 22.3);
/// assert_eq!(dims.height_mm, 14.9);
/// ```
pub fn parse_sensor_size(text: &str) -> Result<SensorDimensions> {
    let tokens: Vec<&str> = text.split(' ').collect();

    let x_index = tokens
        .iter()
        .position(|&t| t == "x")
        .ok_or_else(|| malformed(text, "区切りの \"x\" がありません"))?;

    if x_index == 0 || x_index + 1 >= tokens.len() {
        return Err(malformed(text, "\"x\" の前後に数値がありません"));
    }

    let width = parse_width(tokens[x_index - 1])
        .ok_or_else(|| malformed(text, "幅を数値化できません"))?;
    let height = parse_height(tokens[x_index + 1])
        .ok_or_else(|| malformed(text, "高さを数値化できません"))?;

    if !is_valid_length(width) || !is_valid_length(height) {
        return Err(malformed(text, "寸法は正の有限値である必要があります"));
    }

    Ok(SensorDimensions {
        width_mm: width,
        height_mm: height,
    })
}

fn parse_width(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    let delimiter = chars.next()?;
    // 区切り文字なしで先頭を捨てると桁が欠ける
    if delimiter.is_ascii_digit() {
        return None;
    }
    chars.as_str().parse::<f64>().ok()
}

fn parse_height(token: &str) -> Option<f64> {
    if let Ok(value) = token.parse::<f64>() {
        return Some(value);
    }

    lazy_static::lazy_static! {
        // 単位や閉じ括弧が続く場合の先頭の数値
        static ref LEADING_NUMBER_RE: Regex = Regex::new(r"^\d+(?:\.\d+)?").unwrap();
    }

    LEADING_NUMBER_RE
        .find(token)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn is_valid_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn malformed(text: &str, reason: &str) -> SensorSizeError {
    SensorSizeError::MalformedSensorText(format!("{}（{}）", reason, text))
}
