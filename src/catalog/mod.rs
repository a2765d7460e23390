// src/catalog/mod.rs
//! Справочник регионов
//!
//! Неизменяемый упорядоченный список регионов (`id`, название, часовой пояс),
//! загружаемый один раз при старте. Справочник — внешний набор данных:
//! хранилище назначений только читает его.
//!
//! Источники справочника:
//! - TOML-файл с таблицами `[[regions]]` (как конфигурация генератора)
//! - JSON-массив записей
//! - встроенный набор [`Catalog::russia`] — 85 субъектов РФ
//!
//! ## Пример
//! ```toml
//! [[regions]]
//! id = "RU-MOW"
//! name = "Москва"
//! timezone = "UTC+3 (MSK)"
//! ```

pub mod collation;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

const RUSSIA_REGIONS_TOML: &str = include_str!("../../data/russia_regions.toml");

/// Запись справочника — статические атрибуты одного региона
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Стабильный уникальный код (например, `"RU-MOW"` по ISO 3166-2)
    pub id: String,
    /// Отображаемое название, уникальное в справочнике
    pub name: String,
    /// Часовой пояс в отображаемом виде (`"UTC+3 (MSK)"`)
    pub timezone: String,
}

impl RegionRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            timezone: timezone.into(),
        }
    }
}

/// Пара `{id, name}` для списка выбора региона
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionName {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    regions: Vec<RegionRecord>,
}

/// Неизменяемый справочник регионов
///
/// Порядок записей совпадает с порядком во входных данных.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<RegionRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Строит справочник с проверкой записей.
    ///
    /// # Ошибки
    /// - пустой (после удаления пробелов) `id`, `name` или `timezone`
    /// - повторяющийся `id`
    /// - повторяющееся название
    pub fn new(records: Vec<RegionRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        let mut names = HashSet::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            for (field, value) in [
                ("id", &record.id),
                ("name", &record.name),
                ("timezone", &record.timezone),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyField { index: i, field });
                }
            }
            if index.insert(record.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
            if !names.insert(record.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }

        Ok(Self { records, index })
    }

    /// Встроенный справочник: 85 субъектов Российской Федерации.
    pub fn russia() -> Result<Self, CatalogError> {
        Self::from_toml_str(RUSSIA_REGIONS_TOML)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.regions)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let records: Vec<RegionRecord> = serde_json::from_str(contents)?;
        Self::new(records)
    }

    /// Загружает справочник из файла; формат определяется по расширению
    /// (`.toml` или `.json`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RegionRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Позиция региона в справочнике
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Записи в порядке справочника
    #[must_use]
    pub fn as_slice(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    /// Список `{id, name}`, отсортированный по названию с учётом русского алфавита.
    ///
    /// Результат одинаков при каждом вызове: справочник не меняется,
    /// а сортировка детерминирована (см. [`collation::compare`]).
    #[must_use]
    pub fn region_names(&self) -> Vec<RegionName> {
        let mut names: Vec<RegionName> = self
            .records
            .iter()
            .map(|r| RegionName {
                id: r.id.clone(),
                name: r.name.clone(),
            })
            .collect();
        names.sort_by(|a, b| collation::compare(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));
        names
    }
}
