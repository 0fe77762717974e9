use super::MetadataReader;
use crate::error::{Result, SensorSizeError};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// kamadak-exif によるEXIF読み取り
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifMetadataReader;

impl MetadataReader for ExifMetadataReader {
    fn read_tags(&self, path: &Path) -> Result<HashMap<String, String>> {
        if !path.exists() {
            return Err(SensorSizeError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut bufreader = BufReader::new(file);
        let exif_reader = exif::Reader::new();
        let exif = exif_reader
            .read_from_container(&mut bufreader)
            .map_err(|e| SensorSizeError::NoMetadata(format!("{}: {}", path.display(), e)))?;

        let mut tags = HashMap::new();
        for field in exif.fields() {
            if field.ifd_num != exif::In::PRIMARY {
                continue;
            }
            // 標準タグ表にないタグは名前を持たないので除外
            if field.tag.description().is_none() {
                continue;
            }
            tags.insert(field.tag.to_string(), field_text(field));
        }

        Ok(tags)
    }
}

/// フィールド値を文字列化（ASCIIは引用符なしで、前後のNUL・空白を除去）
fn field_text(field: &exif::Field) -> String {
    match field.value {
        exif::Value::Ascii(ref parts) => parts
            .iter()
            .map(|p| String::from_utf8_lossy(p))
            .map(|s| s.trim_matches(|c: char| c == '\0' || c.is_whitespace()).to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => field.display_value().to_string(),
    }
}
