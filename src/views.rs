// src/views.rs
//! Производные представления состояния
//!
//! Все представления — чистые функции текущего состояния хранилища и
//! пересчитываются при каждом запросе (регионов порядка сотни, кэш не нужен):
//! - [`Stats`] — всего / назначено / свободно
//! - карта цветов `id → цвет` для поверхности карты
//! - [`SelectedRegion`] — панель выбранного региона
//! - [`RegionTooltip`] — подсказка при наведении

use std::collections::BTreeMap;

use serde::Serialize;

use crate::state::RegionState;
use crate::store::RegionStore;

/// Сводка покрытия: `assigned + unassigned == total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub assigned: usize,
    pub unassigned: usize,
}

/// Данные панели выбранного региона
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "region", rename_all = "snake_case")]
pub enum SelectedRegion {
    Nothing,
    Region(RegionState),
}

impl SelectedRegion {
    #[must_use]
    pub fn region(&self) -> Option<&RegionState> {
        match self {
            SelectedRegion::Nothing => None,
            SelectedRegion::Region(state) => Some(state),
        }
    }
}

/// Подсказка для региона под курсором
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionTooltip {
    pub name: String,
    pub timezone: String,
    /// `None` — «Не назначен»
    pub employee: Option<String>,
    /// Отображается только вместе с сотрудником
    pub color: Option<String>,
}

impl RegionTooltip {
    #[must_use]
    pub fn from_state(state: &RegionState) -> Self {
        let employee = state.employee.clone().filter(|e| !e.is_empty());
        let color = if employee.is_some() {
            state.color.clone()
        } else {
            None
        };
        Self {
            name: state.name.clone(),
            timezone: state.timezone.clone(),
            employee,
            color,
        }
    }
}

impl RegionStore {
    #[must_use]
    pub fn stats(&self) -> Stats {
        let total = self.len();
        let assigned = self.iter().filter(|s| s.is_assigned()).count();
        Stats {
            total,
            assigned,
            unassigned: total - assigned,
        }
    }

    /// Цвета регионов, у которых цвет задан.
    ///
    /// Отсутствие `id` в карте означает заливку поверхности по умолчанию.
    #[must_use]
    pub fn colors_by_id(&self) -> BTreeMap<String, String> {
        self.iter()
            .filter_map(|s| s.color.as_ref().map(|c| (s.id.clone(), c.clone())))
            .collect()
    }

    /// Проекция для панели: состояние выбранного региона или «ничего не выбрано».
    #[must_use]
    pub fn detail(&self, selected: Option<&str>) -> SelectedRegion {
        selected
            .and_then(|id| self.get(id))
            .map_or(SelectedRegion::Nothing, |state| {
                SelectedRegion::Region(state.clone())
            })
    }

    #[must_use]
    pub fn tooltip(&self, id: &str) -> Option<RegionTooltip> {
        self.get(id).map(RegionTooltip::from_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RegionRecord};
    use crate::state::RegionUpdate;

    fn store() -> RegionStore {
        RegionStore::new(
            Catalog::new(vec![
                RegionRecord::new("A", "Альфа", "UTC+3"),
                RegionRecord::new("B", "Бета", "UTC+5"),
                RegionRecord::new("C", "Гамма", "UTC+7"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn stats_track_assignments() {
        let mut store = store();
        assert_eq!(
            store.stats(),
            Stats {
                total: 3,
                assigned: 0,
                unassigned: 3
            }
        );
        store.assign("B", "Jane Doe", "#EF4444").unwrap();
        assert_eq!(
            store.stats(),
            Stats {
                total: 3,
                assigned: 1,
                unassigned: 2
            }
        );
    }

    #[test]
    fn colors_omit_unset_regions() {
        let mut store = store();
        assert!(store.colors_by_id().is_empty());
        store.assign("A", "Ivan Petrov", "#10B981").unwrap();
        let colors = store.colors_by_id();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors["A"], "#10B981");
        assert!(!colors.contains_key("B"));
    }

    #[test]
    fn color_without_employee_is_rendered_but_not_counted() {
        let mut store = store();
        store
            .update("C", RegionUpdate::default().with_color("#84CC16"))
            .unwrap();
        assert_eq!(store.colors_by_id()["C"], "#84CC16");
        assert_eq!(store.stats().assigned, 0);
    }

    #[test]
    fn detail_for_nothing_selected() {
        let store = store();
        assert_eq!(store.detail(None), SelectedRegion::Nothing);
        assert_eq!(store.detail(Some("Z")), SelectedRegion::Nothing);
        assert_eq!(store.detail(Some("A")).region().unwrap().name, "Альфа");
    }

    #[test]
    fn tooltip_hides_color_of_unassigned_region() {
        let mut store = store();
        store
            .update("A", RegionUpdate::default().with_color("#F59E0B"))
            .unwrap();
        let tip = store.tooltip("A").unwrap();
        assert_eq!(tip.employee, None);
        assert_eq!(tip.color, None);

        store.assign("A", "Anna", "#F59E0B").unwrap();
        let tip = store.tooltip("A").unwrap();
        assert_eq!(tip.employee.as_deref(), Some("Anna"));
        assert_eq!(tip.color.as_deref(), Some("#F59E0B"));
    }
}
