//! sensor-size
//!
//! 写真のEXIFにある機種名からカメラカタログ（DPReview）を検索し、
//! センサーの物理サイズ（mm）を取得する。

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod matcher;
pub mod metadata;
pub mod resolver;
pub mod sensor;

pub use error::{Result, SensorSizeError};
pub use resolver::{resolve_sensor_size, SensorSizeResolver};
pub use sensor::SensorDimensions;
