//! カメラカタログの参照
//!
//! 機種名から製品ページを2段階で探す。
//! 1. 検索結果のトップ製品欄にリンクがあればそれを採用
//! 2. なければ候補一覧の表示名とあいまい照合し、最も近い候補のリンクを採用

pub mod dpreview;
pub mod spec_table;
mod types;

pub use dpreview::DpreviewProvider;
pub use spec_table::{extract_field, find_field, flatten_cells, SENSOR_SIZE_LABEL};
pub use types::{CatalogEntry, SearchPage};

use crate::error::{Result, SensorSizeError};
use crate::matcher::closest_match;

/// カタログサイトとの境界
pub trait CatalogProvider {
    /// 機種名で検索し、結果ページを解析して返す
    fn search(&self, model_name: &str) -> Result<SearchPage>;

    /// 製品ページのクイックスペック表を行優先で平坦化して返す
    fn quick_specs(&self, page_link: &str) -> Result<Vec<String>>;
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for &T {
    fn search(&self, model_name: &str) -> Result<SearchPage> {
        (**self).search(model_name)
    }

    fn quick_specs(&self, page_link: &str) -> Result<Vec<String>> {
        (**self).quick_specs(page_link)
    }
}

/// 機種名から製品ページのURLを解決する
pub fn resolve_model_link<P: CatalogProvider + ?Sized>(
    provider: &P,
    model_name: &str,
    cutoff: f64,
) -> Result<String> {
    let page = provider.search(model_name)?;

    if let Some(link) = page.top_product {
        tracing::debug!(%link, "トップ製品を採用");
        return Ok(link);
    }

    if page.entries.is_empty() {
        return Err(SensorSizeError::NoCatalogMatch(model_name.to_string()));
    }

    let names: Vec<&str> = page.entries.iter().map(|e| e.display_name.as_str()).collect();
    let matched = closest_match(model_name, &names, cutoff)
        .ok_or_else(|| SensorSizeError::NoCatalogMatch(model_name.to_string()))?;

    tracing::debug!(
        candidate = %matched.candidate,
        ratio = matched.ratio,
        "候補一覧から選択"
    );

    Ok(page.entries[matched.index].page_link.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::DEFAULT_CUTOFF;

    struct FixedCatalog {
        page: Result<SearchPage>,
    }

    impl CatalogProvider for FixedCatalog {
        fn search(&self, _model_name: &str) -> Result<SearchPage> {
            match &self.page {
                Ok(page) => Ok(page.clone()),
                Err(e) => Err(SensorSizeError::CatalogUnreachable(e.to_string())),
            }
        }

        fn quick_specs(&self, _page_link: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    fn entry(name: &str, link: &str) -> CatalogEntry {
        CatalogEntry {
            display_name: name.into(),
            page_link: link.into(),
        }
    }

    #[test]
    fn test_top_product_short_circuits() {
        let catalog = FixedCatalog {
            page: Ok(SearchPage {
                top_product: Some("https://example.com/top".into()),
                entries: vec![entry("Canon EOS 5D", "https://example.com/list")],
            }),
        };
        let link = resolve_model_link(&catalog, "Canon EOS 5D", DEFAULT_CUTOFF).unwrap();
        assert_eq!(link, "https://example.com/top");
    }

    #[test]
    fn test_list_tier_picks_aligned_link() {
        let catalog = FixedCatalog {
            page: Ok(SearchPage {
                top_product: None,
                entries: vec![
                    entry("Canon EOS 5D", "https://example.com/5d"),
                    entry("Canon EOS 5D Mark II", "https://example.com/5d2"),
                ],
            }),
        };
        let link = resolve_model_link(&catalog, "Canon EOS 5D Mark II", DEFAULT_CUTOFF).unwrap();
        assert_eq!(link, "https://example.com/5d2");
    }

    #[test]
    fn test_empty_list_is_no_match() {
        let catalog = FixedCatalog {
            page: Ok(SearchPage::default()),
        };
        let err = resolve_model_link(&catalog, "Canon EOS 5D", DEFAULT_CUTOFF).unwrap_err();
        assert!(matches!(err, SensorSizeError::NoCatalogMatch(_)));
    }

    #[test]
    fn test_dissimilar_list_is_no_match() {
        let catalog = FixedCatalog {
            page: Ok(SearchPage {
                top_product: None,
                entries: vec![entry("Fujifilm X-T4", "https://example.com/xt4")],
            }),
        };
        let err = resolve_model_link(&catalog, "Nikon D750", DEFAULT_CUTOFF).unwrap_err();
        assert!(matches!(err, SensorSizeError::NoCatalogMatch(_)));
    }

    #[test]
    fn test_search_failure_propagates() {
        let catalog = FixedCatalog {
            page: Err(SensorSizeError::CatalogUnreachable("timeout".into())),
        };
        let err = resolve_model_link(&catalog, "Canon EOS 5D", DEFAULT_CUTOFF).unwrap_err();
        assert!(matches!(err, SensorSizeError::CatalogUnreachable(_)));
    }
}
