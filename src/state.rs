// src/state.rs
//! Изменяемое состояние региона: справочные поля плюс назначение.

use serde::{Deserialize, Serialize};

use crate::catalog::RegionRecord;

/// Состояние одного региона
///
/// Содержит копию справочной записи и поля назначения.
/// Регион считается назначенным, если `employee` задан и не пуст.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionState {
    pub id: String,
    pub name: String,
    pub timezone: String,
    /// Имя сотрудника; `None` — регион свободен
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    /// Цвет заливки (`"#rrggbb"`); `None` — цвет по умолчанию поверхности карты
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RegionState {
    /// Свободная копия справочной записи
    #[must_use]
    pub fn from_record(record: &RegionRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            timezone: record.timezone.clone(),
            employee: None,
            color: None,
        }
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.employee.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Частичное обновление назначения: меняются только заданные поля.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionUpdate {
    pub employee: Option<String>,
    pub color: Option<String>,
}

impl RegionUpdate {
    #[must_use]
    pub fn with_employee(mut self, employee: impl Into<String>) -> Self {
        self.employee = Some(employee.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employee.is_none() && self.color.is_none()
    }
}
