//! DPReview アダプタ
//!
//! 検索ページと製品ページのマークアップに依存する処理はここに閉じ込める。
//!
//! - 検索ページ: `div.subsection.topProduct`（トップ製品）と `td.productName`（候補一覧）
//! - 製品ページ: `div.rightColumn.quickSpecs`（クイックスペック表）

use super::spec_table::{cell_text, flatten_cells};
use super::{CatalogEntry, CatalogProvider, SearchPage};
use crate::error::{Result, SensorSizeError};
use crate::http::HttpClient;
use reqwest::Url;
use scraper::{Html, Selector};

lazy_static::lazy_static! {
    static ref TOP_PRODUCT_SELECTOR: Selector = Selector::parse("div.subsection.topProduct").unwrap();
    static ref PRODUCT_NAME_SELECTOR: Selector = Selector::parse("td.productName").unwrap();
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a").unwrap();
    static ref LINK_SELECTOR: Selector = Selector::parse("a[href]").unwrap();
    static ref QUICK_SPECS_SELECTOR: Selector = Selector::parse("div.rightColumn.quickSpecs").unwrap();
}

/// 検索URLを組み立てる（空白は `+` にエンコードされる）
pub fn build_search_url(base: &str, model_name: &str) -> Result<Url> {
    Url::parse_with_params(base, &[("query", model_name)])
        .map_err(|e| SensorSizeError::Config(format!("検索URLが不正: {}: {}", base, e)))
}

/// 検索結果ページを解析
///
/// リンクは `page_url` を基準に絶対URLへ解決する。
pub fn parse_search_page(html: &str, page_url: &Url) -> SearchPage {
    let document = Html::parse_document(html);

    let top_product = document
        .select(&TOP_PRODUCT_SELECTOR)
        .next()
        .and_then(|section| section.select(&LINK_SELECTOR).next())
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| resolve_link(page_url, href));

    let mut entries = Vec::new();
    for td in document.select(&PRODUCT_NAME_SELECTOR) {
        let Some(name) = td.select(&ANCHOR_SELECTOR).next().map(cell_text) else {
            continue;
        };
        let Some(link) = td
            .select(&LINK_SELECTOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| resolve_link(page_url, href))
        else {
            continue;
        };

        if name.is_empty() {
            continue;
        }

        entries.push(CatalogEntry {
            display_name: name,
            page_link: link,
        });
    }

    SearchPage { top_product, entries }
}

/// 製品ページのクイックスペック表を平坦化
pub fn parse_quick_specs(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    flatten_cells(&document, &QUICK_SPECS_SELECTOR)
        .ok_or_else(|| SensorSizeError::FieldNotFound("クイックスペック表が見つかりません".into()))
}

fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok().map(|url| url.to_string())
}

/// DPReview を参照するカタログ
pub struct DpreviewProvider<C: HttpClient> {
    client: C,
    search_url: String,
}

impl<C: HttpClient> DpreviewProvider<C> {
    pub fn new(client: C, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }
}

impl<C: HttpClient> CatalogProvider for DpreviewProvider<C> {
    fn search(&self, model_name: &str) -> Result<SearchPage> {
        let url = build_search_url(&self.search_url, model_name)?;
        let html = self.client.get(url.as_str())?;
        let page = parse_search_page(&html, &url);

        tracing::debug!(
            top_product = page.top_product.is_some(),
            entries = page.entries.len(),
            "検索結果を解析"
        );
        Ok(page)
    }

    fn quick_specs(&self, page_link: &str) -> Result<Vec<String>> {
        let html = self.client.get(page_link)?;
        parse_quick_specs(&html)
    }
}
