use serde::Deserialize;
use std::env;

use crate::error::ConfigError;

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub auditorium: AuditoriumConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Планировка зала
#[derive(Debug, Clone, Deserialize)]
pub struct AuditoriumConfig {
    pub name: String,
    pub rows: Vec<usize>,
}

const DEFAULT_ROWS: &str = "10,12,12,14,14,16";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Чтение настроек из любого источника ключ -> значение
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rows = lookup("AUDITORIUM_ROWS").unwrap_or_else(|| DEFAULT_ROWS.to_string());

        Ok(Config {
            app: AppConfig {
                rust_log: lookup("RUST_LOG").unwrap_or_else(|| "cinema_hall=debug".to_string()),
            },
            auditorium: AuditoriumConfig {
                name: lookup("AUDITORIUM_NAME").unwrap_or_else(|| "Hall 1".to_string()),
                rows: parse_layout(&rows)?,
            },
        })
    }
}

/// Разбирает планировку вида `"3,5,5"`: количество мест в каждом ряду.
pub fn parse_layout(value: &str) -> Result<Vec<usize>, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyLayout);
    }

    value
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<usize>().map_err(|_| ConfigError::InvalidRow {
                value: part.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parse_layout_accepts_spaces() {
        assert_eq!(parse_layout("3, 5,5 ").unwrap(), vec![3, 5, 5]);
    }

    #[test]
    fn parse_layout_rejects_garbage() {
        let err = parse_layout("3,x,5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRow { value } if value == "x"));
        assert!(matches!(parse_layout("  "), Err(ConfigError::EmptyLayout)));
        assert!(matches!(parse_layout("4,"), Err(ConfigError::InvalidRow { .. })));
    }

    #[test]
    fn defaults_are_used_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.app.rust_log, "cinema_hall=debug");
        assert_eq!(config.auditorium.name, "Hall 1");
        assert_eq!(config.auditorium.rows, vec![10, 12, 12, 14, 14, 16]);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("AUDITORIUM_ROWS", "3,5"),
            ("AUDITORIUM_NAME", "Small"),
            ("RUST_LOG", "info"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.auditorium.rows, vec![3, 5]);
        assert_eq!(config.auditorium.name, "Small");
        assert_eq!(config.app.rust_log, "info");
    }
}
