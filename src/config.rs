use crate::error::{Result, SensorSizeError};
use crate::matcher::DEFAULT_CUTOFF;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 検索URLを上書きする環境変数
pub const SEARCH_URL_ENV: &str = "SENSOR_SIZE_SEARCH_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// カタログサイトの検索エンドポイント
    pub search_url: String,
    /// 1リクエストあたりのタイムアウト（秒）
    pub timeout_seconds: u64,
    pub user_agent: String,
    /// 候補一覧から機種を選ぶときの類似度の下限
    pub match_cutoff: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: "https://www.dpreview.com/search".into(),
            timeout_seconds: 30,
            user_agent: concat!("sensor-size/", env!("CARGO_PKG_VERSION")).into(),
            match_cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl Config {
    /// ~/.config/sensor-size/config.json を読み込む（なければデフォルト）
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let config = Self::load_from(&config_path)?
            .apply_env_overrides(std::env::var(SEARCH_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// 環境変数の値を優先する（空白のみの値は無視）
    fn apply_env_overrides(mut self, search_url: Option<String>) -> Self {
        if let Some(url) = search_url {
            if !url.trim().is_empty() {
                self.search_url = url.trim().to_string();
            }
        }
        self
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SensorSizeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("sensor-size").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.search_url).map_err(|e| {
            SensorSizeError::Config(format!("search_url が不正: {}: {}", self.search_url, e))
        })?;
        if self.timeout_seconds == 0 {
            return Err(SensorSizeError::Config(
                "timeout_seconds は1以上を指定してください".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.match_cutoff) {
            return Err(SensorSizeError::Config(format!(
                "match_cutoff は0.0〜1.0で指定してください: {}",
                self.match_cutoff
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search_url, "https://www.dpreview.com/search");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("sensor-size/"));
        assert!((config.match_cutoff - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "timeout_seconds": 5 }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout_seconds, 5);
        // 未指定の項目はデフォルト
        assert_eq!(config.search_url, "https://www.dpreview.com/search");
    }

    #[test]
    fn test_load_from_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, SensorSizeError::JsonParse(_)));
    }

    #[test]
    fn test_load_from_rejects_bad_search_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "search_url": "not a url" }"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, SensorSizeError::Config(_)));
    }

    #[test]
    fn test_env_override_search_url() {
        let config = Config::default()
            .apply_env_overrides(Some(" http://localhost:8080/search ".to_string()));
        assert_eq!(config.search_url, "http://localhost:8080/search");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_blank_is_ignored() {
        let config = Config::default().apply_env_overrides(Some("   ".to_string()));
        assert_eq!(config.search_url, "https://www.dpreview.com/search");
    }

    #[test]
    fn test_env_override_unset() {
        let config = Config::default().apply_env_overrides(None);
        assert_eq!(config.search_url, "https://www.dpreview.com/search");
    }

    #[test]
    fn test_env_override_invalid_url_fails_validation() {
        let config = Config::default().apply_env_overrides(Some("not a url".to_string()));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SensorSizeError::Config(_)));
    }

    #[test]
    fn test_load_from_rejects_bad_cutoff() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "match_cutoff": 1.5 }"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, SensorSizeError::Config(_)));
    }
}
