//! スペック表の抽出
//!
//! 製品ページのキー/値テーブルをセル単位で平坦化し、ラベルの次のセルを値として取り出す。

use crate::error::{Result, SensorSizeError};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// センサーサイズ行のラベル
pub const SENSOR_SIZE_LABEL: &str = "Sensor size";

lazy_static::lazy_static! {
    static ref ROW_SELECTOR: Selector = Selector::parse("tr").unwrap();
    static ref CELL_SELECTOR: Selector = Selector::parse("td").unwrap();
}

/// セクション内の全セルを行優先で平坦化する
///
/// セクションが見つからない場合は `None`。
pub fn flatten_cells(document: &Html, section: &Selector) -> Option<Vec<String>> {
    let section = document.select(section).next()?;

    let cells = section
        .select(&ROW_SELECTOR)
        .flat_map(|row| row.select(&CELL_SELECTOR))
        .map(cell_text)
        .collect();

    Some(cells)
}

/// 平坦化したセル列からラベルの値を取得
///
/// 偶数番目がラベル、奇数番目が値という並びを前提に、最初に現れたラベルの次の要素を返す。
pub fn find_field(cells: &[String], label: &str) -> Result<String> {
    let index = cells
        .iter()
        .position(|c| c == label)
        .ok_or_else(|| SensorSizeError::FieldNotFound(label.to_string()))?;

    cells
        .get(index + 1)
        .cloned()
        .ok_or_else(|| SensorSizeError::FieldNotFound(format!("{}（値のセルがありません）", label)))
}

/// ドキュメントのセクションからラベルの値を取得
///
/// 解析済みのHTMLから1回で値を取り出す入口。
/// `CatalogProvider` 経由の解決では平坦化済みのセル列に対して [`find_field`] を使う。
pub fn extract_field(document: &Html, section: &Selector, label: &str) -> Result<String> {
    let cells = flatten_cells(document, section)
        .ok_or_else(|| SensorSizeError::FieldNotFound("スペック表が見つかりません".into()))?;
    find_field(&cells, label)
}

/// セルのテキスト（連続する空白は1つにまとめる）
pub(crate) fn cell_text(cell: ElementRef<'_>) -> String {
    lazy_static::lazy_static! {
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }

    let text: String = cell.text().collect();
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}
