// src/config.rs
//! Настройки приложения
//!
//! Этот модуль определяет параметры, не влияющие на логику хранилища:
//! - источник справочника регионов (файл или встроенный набор)
//! - цвет по умолчанию и палитру быстрого выбора для формы назначения
//! - параметры эталонной поверхности карты (размер плиток, цвета заливки)
//!
//! Все структуры читаются из TOML; любое поле можно опустить.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CatalogError, ConfigError};

/// Цвет формы назначения по умолчанию (синий)
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Палитра быстрого выбора цвета
pub const PRESET_COLORS: [&str; 8] = [
    "#3B82F6", // синий
    "#10B981", // зелёный
    "#F59E0B", // янтарный
    "#EF4444", // красный
    "#8B5CF6", // фиолетовый
    "#EC4899", // розовый
    "#06B6D4", // бирюзовый
    "#84CC16", // лаймовый
];

/// Параметры эталонной плиточной поверхности карты
///
/// Регионы раскладываются по сетке квадратных плиток в порядке справочника.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceSettings {
    /// Сторона плитки в пикселях
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Количество плиток в строке
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Зазор между плитками в пикселях
    #[serde(default = "default_gap")]
    pub gap: u32,

    /// Заливка регионов без цвета
    #[serde(default = "default_unassigned_fill")]
    pub unassigned_fill: String,

    /// Цвет фона (зазоры между плитками)
    #[serde(default = "default_background")]
    pub background: String,

    /// Цвет рамки выбранного региона
    #[serde(default = "default_selected_outline")]
    pub selected_outline: String,

    /// Толщина рамки выбранного региона в пикселях
    #[serde(default = "default_outline_width")]
    pub outline_width: u32,
}

fn default_tile_size() -> u32 {
    32
}
fn default_columns() -> u32 {
    12
}
fn default_gap() -> u32 {
    2
}
fn default_unassigned_fill() -> String {
    "#2B3B55".to_string()
}
fn default_background() -> String {
    "#445E88".to_string()
}
fn default_selected_outline() -> String {
    "#0B64F4".to_string()
}
fn default_outline_width() -> u32 {
    3
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            columns: default_columns(),
            gap: default_gap(),
            unassigned_fill: default_unassigned_fill(),
            background: default_background(),
            selected_outline: default_selected_outline(),
            outline_width: default_outline_width(),
        }
    }
}

/// Основные настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Файл справочника (`.toml` или `.json`); без него — встроенный набор
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Цвет, которым форма заполняется для свободного региона
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Палитра быстрого выбора цвета
    #[serde(default = "default_preset_colors")]
    pub preset_colors: Vec<String>,

    #[serde(default)]
    pub surface: SurfaceSettings,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
fn default_preset_colors() -> Vec<String> {
    PRESET_COLORS.iter().map(|c| (*c).to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_color: default_color(),
            preset_colors: default_preset_colors(),
            surface: SurfaceSettings::default(),
        }
    }
}

impl AppConfig {
    /// Загружает настройки из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # regionmap.toml
    /// catalog = "regions.json"
    /// default_color = "#10B981"
    ///
    /// [surface]
    /// tile_size = 48
    /// columns = 10
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Загружает справочник, указанный в настройках, или встроенный набор.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path),
            None => Catalog::russia(),
        }
    }
}
