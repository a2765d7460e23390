//! Ошибки крейта
//!
//! Ошибки разделены по областям:
//! - [`AssignmentError`] — отказ в изменении назначения (показывается пользователю)
//! - [`CatalogError`] — некорректный или нечитаемый справочник регионов
//! - [`ConfigError`] — ошибка загрузки настроек
//! - [`RenderError`] — ошибка отрисовки поверхности карты

use std::path::PathBuf;

use thiserror::Error;

/// Отказ в операции над назначением региона.
///
/// Все варианты восстановимы: обнаруживаются до любого изменения,
/// хранилище при этом остаётся без изменений.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// Попытка изменения без выбранного региона
    #[error("no region selected")]
    NoRegionSelected,

    /// Имя сотрудника пусто после удаления пробелов
    #[error("employee name is required")]
    EmptyEmployeeName,

    /// Регион с таким идентификатором отсутствует в справочнике
    #[error("unknown region id: {0}")]
    UnknownRegionId(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("region #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("duplicate region id: {id}")]
    DuplicateId { id: String },

    #[error("duplicate region name: {name}")]
    DuplicateName { name: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    /// Раскладка не помещается в адресуемый буфер изображения
    #[error("surface layout too large: {columns}x{rows} tiles of {tile_size}px with {gap}px gap")]
    Oversized {
        tile_size: u32,
        gap: u32,
        columns: u32,
        rows: u32,
    },

    #[error("failed to create image buffer {width}x{height}")]
    Buffer { width: u32, height: u32 },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
