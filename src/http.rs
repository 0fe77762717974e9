//! HTTP取得
//!
//! カタログサイトのHTMLを取得するクライアント。テストでは固定HTMLを返す実装に差し替える。

use crate::config::Config;
use crate::error::{Result, SensorSizeError};
use std::time::Duration;

/// URLを取得して本文を返す
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<String>;
}

/// reqwest（ブロッキング）による実装
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SensorSizeError::Config(format!("HTTPクライアントの初期化に失敗: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SensorSizeError::CatalogUnreachable(format!("{}: {}", url, e)))?;

        response
            .text()
            .map_err(|e| SensorSizeError::CatalogUnreachable(format!("{}: {}", url, e)))
    }
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}
