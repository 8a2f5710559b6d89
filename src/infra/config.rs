use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::table::{ConfigError, TableConfig};

/// Ошибки загрузки конфига стола.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Конфиг не разобран: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(#[from] ConfigError),
}

/// Разобрать и проверить конфиг стола из JSON-строки.
pub fn parse_table_config(json: &str) -> Result<TableConfig, LoadError> {
    let config: TableConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Прочитать конфиг стола из JSON-файла.
pub fn load_table_config(path: impl AsRef<Path>) -> Result<TableConfig, LoadError> {
    let raw = fs::read_to_string(path)?;
    parse_table_config(&raw)
}
