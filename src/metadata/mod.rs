//! 画像メタデータの読み取り

mod exif;

pub use self::exif::ExifMetadataReader;

use crate::error::{Result, SensorSizeError};
use std::collections::HashMap;
use std::path::Path;

/// 機種名のタグ名
pub const MODEL_TAG: &str = "Model";

/// 画像からタグ名→値のマップを読み取る
pub trait MetadataReader {
    fn read_tags(&self, path: &Path) -> Result<HashMap<String, String>>;
}

impl<T: MetadataReader + ?Sized> MetadataReader for &T {
    fn read_tags(&self, path: &Path) -> Result<HashMap<String, String>> {
        (**self).read_tags(path)
    }
}

/// タグから機種名を取得
pub fn camera_model(tags: &HashMap<String, String>) -> Result<String> {
    tags.get(MODEL_TAG)
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .ok_or_else(|| SensorSizeError::NoMetadata(format!("{} タグがありません", MODEL_TAG)))
}
