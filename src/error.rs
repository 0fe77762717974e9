use thiserror::Error;

#[derive(Error, Debug)]
pub enum SensorSizeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("メタデータを読み取れません: {0}")]
    NoMetadata(String),

    #[error("カタログサイトに接続できません: {0}")]
    CatalogUnreachable(String),

    #[error("カタログに該当する機種がありません: {0}")]
    NoCatalogMatch(String),

    #[error("スペック表に項目がありません: {0}")]
    FieldNotFound(String),

    #[error("センサーサイズの書式が不正: {0}")]
    MalformedSensorText(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl SensorSizeError {
    /// 解決処理の途中で発生した失敗か（呼び出し側には「不明」として扱われる）
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            SensorSizeError::NoMetadata(_)
                | SensorSizeError::FileNotFound(_)
                | SensorSizeError::CatalogUnreachable(_)
                | SensorSizeError::NoCatalogMatch(_)
                | SensorSizeError::FieldNotFound(_)
                | SensorSizeError::MalformedSensorText(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SensorSizeError>;
