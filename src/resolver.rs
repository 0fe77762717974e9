//! センサーサイズ解決パイプライン
//!
//! 画像 → 機種名 → 製品ページURL → スペック表の値 → (幅, 高さ)
//!
//! どの段階で失敗しても外部には「不明」（`None`）として返す。
//! 失敗理由が必要な場合は [`SensorSizeResolver::resolve_detailed`] を使う。

use crate::catalog::{
    find_field, resolve_model_link, CatalogProvider, DpreviewProvider, SENSOR_SIZE_LABEL,
};
use crate::config::Config;
use crate::error::Result;
use crate::http::ReqwestClient;
use crate::matcher::DEFAULT_CUTOFF;
use crate::metadata::{camera_model, ExifMetadataReader, MetadataReader};
use crate::sensor::{parse_sensor_size, SensorDimensions};
use std::path::Path;

pub struct SensorSizeResolver<M: MetadataReader, P: CatalogProvider> {
    reader: M,
    provider: P,
    match_cutoff: f64,
}

impl<M: MetadataReader, P: CatalogProvider> SensorSizeResolver<M, P> {
    pub fn new(reader: M, provider: P) -> Self {
        Self {
            reader,
            provider,
            match_cutoff: DEFAULT_CUTOFF,
        }
    }

    pub fn with_match_cutoff(mut self, cutoff: f64) -> Self {
        self.match_cutoff = cutoff;
        self
    }

    /// センサーサイズを解決する（失敗理由つき）
    pub fn resolve_detailed(&self, image_path: &Path) -> Result<SensorDimensions> {
        let tags = self.reader.read_tags(image_path)?;
        let model = camera_model(&tags)?;
        tracing::debug!(%model, "機種名を取得");

        let link = resolve_model_link(&self.provider, &model, self.match_cutoff)?;
        tracing::debug!(%link, "製品ページ");

        let cells = self.provider.quick_specs(&link)?;
        let sensor_text = find_field(&cells, SENSOR_SIZE_LABEL)?;
        tracing::debug!(%sensor_text, "センサーサイズ欄");

        parse_sensor_size(&sensor_text)
    }

    /// センサーサイズを解決する（失敗は一律 `None`）
    pub fn resolve(&self, image_path: &Path) -> Option<SensorDimensions> {
        match self.resolve_detailed(image_path) {
            Ok(dims) => Some(dims),
            Err(e) => {
                tracing::debug!(error = %e, path = %image_path.display(), "センサーサイズ不明");
                None
            }
        }
    }
}

impl SensorSizeResolver<ExifMetadataReader, DpreviewProvider<ReqwestClient>> {
    /// 設定から本番用の構成（EXIF + DPReview）を組み立てる
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ReqwestClient::new(config)?;
        let provider = DpreviewProvider::new(client, config.search_url.clone());
        Ok(Self::new(ExifMetadataReader, provider).with_match_cutoff(config.match_cutoff))
    }
}

/// 画像ファイルのセンサーサイズを取得する
pub fn resolve_sensor_size(image_path: &Path, config: &Config) -> Option<SensorDimensions> {
    match SensorSizeResolver::from_config(config) {
        Ok(resolver) => resolver.resolve(image_path),
        Err(e) => {
            tracing::warn!(error = %e, "初期化に失敗");
            None
        }
    }
}
