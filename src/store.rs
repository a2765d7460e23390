// src/store.rs
//! Хранилище состояний регионов
//!
//! Единственный владелец и единственный писатель [`RegionState`].
//! Хранилище создаётся один раз на сессию из справочника и передаётся
//! по ссылке тем компонентам, которым оно нужно.
//!
//! ## Инварианты
//! - на каждую запись справочника приходится ровно одно состояние;
//!   набор ключей не меняется (нет вставки и удаления, только изменение)
//! - сначала проверка, потом запись: отклонённая операция ничего не меняет
//! - `reset` возвращает регион к свободной копии справочной записи

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::AssignmentError;
use crate::state::{RegionState, RegionUpdate};

#[derive(Debug, Clone)]
pub struct RegionStore {
    catalog: Catalog,
    /// Состояния в порядке справочника; индекс совпадает с `Catalog::position`
    states: Vec<RegionState>,
}

fn trimmed_name(employee: &str) -> Result<String, AssignmentError> {
    let name = employee.trim();
    if name.is_empty() {
        return Err(AssignmentError::EmptyEmployeeName);
    }
    Ok(name.to_string())
}

impl RegionStore {
    /// Создаёт свободное состояние для каждой записи справочника.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let states = catalog.iter().map(RegionState::from_record).collect();
        tracing::debug!(regions = catalog.len(), "region store initialized");
        Self { catalog, states }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn slot(&self, id: &str) -> Result<usize, AssignmentError> {
        self.catalog
            .position(id)
            .ok_or_else(|| AssignmentError::UnknownRegionId(id.to_string()))
    }

    /// Назначает сотрудника и цвет, перезаписывая прежние значения
    ///
    /// # Параметры
    /// * `id` — код региона из справочника (например, `"RU-MOW"`)
    /// * `employee` — имя сотрудника; сохраняется без пробелов по краям
    /// * `color` — цвет заливки в формате `"#rrggbb"`; не проверяется
    ///
    /// # Ошибки
    /// - [`AssignmentError::UnknownRegionId`] — кода нет в справочнике
    /// - [`AssignmentError::EmptyEmployeeName`] — имя пусто после обрезки пробелов
    ///
    /// В обоих случаях состояние не меняется.
    ///
    /// # Пример
    /// ```
    /// use regionmap::{Catalog, RegionStore};
    ///
    /// let mut store = RegionStore::new(Catalog::russia()?);
    /// store.assign("RU-MOW", "  Иван Петров ", "#3B82F6")?;
    /// assert_eq!(store.get("RU-MOW").unwrap().employee.as_deref(), Some("Иван Петров"));
    /// assert!(store.assign("RU-MOW", "   ", "#EF4444").is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn assign(&mut self, id: &str, employee: &str, color: &str) -> Result<(), AssignmentError> {
        let slot = self.slot(id)?;
        let employee = trimmed_name(employee)?;

        let state = &mut self.states[slot];
        tracing::debug!(region = %id, employee = %employee, color = %color, "employee assigned");
        state.employee = Some(employee);
        state.color = Some(color.to_string());
        Ok(())
    }

    /// Сливает заданные поля с текущим состоянием
    ///
    /// # Параметры
    /// * `id` — код региона из справочника
    /// * `update` — поля для замены; отсутствующие (`None`) остаются прежними
    ///
    /// Если в обновлении есть `employee`, к нему применяется та же проверка,
    /// что и в [`assign`](Self::assign). Обновление только цвета допустимо и
    /// для свободного региона: он получает цвет, но остаётся свободным.
    ///
    /// # Ошибки
    /// [`AssignmentError::UnknownRegionId`] или
    /// [`AssignmentError::EmptyEmployeeName`]; состояние при этом не меняется.
    ///
    /// # Пример
    /// ```
    /// use regionmap::{Catalog, RegionStore, RegionUpdate};
    ///
    /// let mut store = RegionStore::new(Catalog::russia()?);
    /// store.assign("RU-SPE", "Анна Смирнова", "#10B981")?;
    /// store.update("RU-SPE", RegionUpdate::default().with_color("#EF4444"))?;
    ///
    /// let state = store.get("RU-SPE").unwrap();
    /// assert_eq!(state.employee.as_deref(), Some("Анна Смирнова"));
    /// assert_eq!(state.color.as_deref(), Some("#EF4444"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn update(&mut self, id: &str, update: RegionUpdate) -> Result<(), AssignmentError> {
        let slot = self.slot(id)?;
        let employee = update.employee.as_deref().map(trimmed_name).transpose()?;

        let state = &mut self.states[slot];
        if let Some(employee) = employee {
            state.employee = Some(employee);
        }
        if let Some(color) = update.color {
            state.color = Some(color);
        }
        tracing::debug!(region = %id, "region updated");
        Ok(())
    }

    /// Возвращает регион к свободной копии справочной записи
    ///
    /// Сотрудник и цвет снимаются вместе. Повторный вызов ничего не меняет.
    ///
    /// # Ошибки
    /// [`AssignmentError::UnknownRegionId`], если кода нет в справочнике.
    pub fn reset(&mut self, id: &str) -> Result<(), AssignmentError> {
        let slot = self.slot(id)?;
        self.states[slot] = RegionState::from_record(&self.catalog.as_slice()[slot]);
        tracing::debug!(region = %id, "region reset");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RegionState> {
        self.catalog.position(id).map(|slot| &self.states[slot])
    }

    /// Снимок всего состояния. Изменения снимка не влияют на хранилище.
    #[must_use]
    pub fn all(&self) -> BTreeMap<String, RegionState> {
        self.states
            .iter()
            .map(|s| (s.id.clone(), s.clone()))
            .collect()
    }

    /// Состояния в порядке справочника
    pub fn iter(&self) -> impl Iterator<Item = &RegionState> {
        self.states.iter()
    }

    /// Назначенные регионы в порядке справочника
    #[must_use]
    pub fn assigned_regions(&self) -> Vec<&RegionState> {
        self.states.iter().filter(|s| s.is_assigned()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RegionRecord;

    fn store() -> RegionStore {
        let catalog = Catalog::new(vec![
            RegionRecord::new("X-01", "Test Region", "UTC+0"),
            RegionRecord::new("X-02", "Second Region", "UTC+3"),
        ])
        .unwrap();
        RegionStore::new(catalog)
    }

    #[test]
    fn assign_round_trip() {
        let mut store = store();
        store.assign("X-01", "Ivan Petrov", "#3B82F6").unwrap();
        let state = store.get("X-01").unwrap();
        assert_eq!(state.employee.as_deref(), Some("Ivan Petrov"));
        assert_eq!(state.color.as_deref(), Some("#3B82F6"));
    }

    #[test]
    fn assign_trims_name() {
        let mut store = store();
        store.assign("X-01", "  Jane Doe \t", "#EF4444").unwrap();
        assert_eq!(store.get("X-01").unwrap().employee.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn assign_rejects_blank_name_without_changes() {
        let mut store = store();
        store.assign("X-01", "Ivan Petrov", "#3B82F6").unwrap();
        let before = store.get("X-01").cloned();

        assert_eq!(
            store.assign("X-01", "", "#10B981"),
            Err(AssignmentError::EmptyEmployeeName)
        );
        assert_eq!(
            store.assign("X-01", "   ", "#10B981"),
            Err(AssignmentError::EmptyEmployeeName)
        );
        assert_eq!(store.get("X-01").cloned(), before);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut store = store();
        let unknown = AssignmentError::UnknownRegionId("Y-99".into());
        assert_eq!(store.assign("Y-99", "Jane", "#000000"), Err(unknown.clone()));
        assert_eq!(store.update("Y-99", RegionUpdate::default()), Err(unknown.clone()));
        assert_eq!(store.reset("Y-99"), Err(unknown));
        assert!(store.get("Y-99").is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut store = store();
        store.assign("X-01", "Ivan Petrov", "#3B82F6").unwrap();

        store
            .update("X-01", RegionUpdate::default().with_color("#8B5CF6"))
            .unwrap();
        let state = store.get("X-01").unwrap();
        assert_eq!(state.employee.as_deref(), Some("Ivan Petrov"));
        assert_eq!(state.color.as_deref(), Some("#8B5CF6"));

        store
            .update("X-01", RegionUpdate::default().with_employee(" Anna Smirnova "))
            .unwrap();
        let state = store.get("X-01").unwrap();
        assert_eq!(state.employee.as_deref(), Some("Anna Smirnova"));
        assert_eq!(state.color.as_deref(), Some("#8B5CF6"));
    }

    #[test]
    fn update_rejects_blank_employee_without_touching_color() {
        let mut store = store();
        store.assign("X-01", "Ivan Petrov", "#3B82F6").unwrap();
        let update = RegionUpdate::default()
            .with_employee("  ")
            .with_color("#EC4899");
        assert_eq!(store.update("X-01", update), Err(AssignmentError::EmptyEmployeeName));
        assert_eq!(store.get("X-01").unwrap().color.as_deref(), Some("#3B82F6"));
    }

    #[test]
    fn color_only_update_leaves_region_unassigned() {
        let mut store = store();
        store
            .update("X-02", RegionUpdate::default().with_color("#06B6D4"))
            .unwrap();
        let state = store.get("X-02").unwrap();
        assert!(!state.is_assigned());
        assert_eq!(state.color.as_deref(), Some("#06B6D4"));
    }

    #[test]
    fn reset_restores_catalog_copy() {
        let mut store = store();
        let initial = store.get("X-01").cloned();
        store.assign("X-01", "Ivan Petrov", "#3B82F6").unwrap();
        store.reset("X-01").unwrap();
        assert_eq!(store.get("X-01").cloned(), initial);
        store.reset("X-01").unwrap();
        assert_eq!(store.get("X-01").cloned(), initial);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = store();
        let mut snapshot = store.all();
        snapshot.get_mut("X-01").unwrap().employee = Some("Intruder".into());
        assert!(!store.get("X-01").unwrap().is_assigned());

        store.assign("X-02", "Jane Doe", "#EF4444").unwrap();
        assert!(!snapshot["X-02"].is_assigned());
    }

    #[test]
    fn assigned_regions_follow_catalog_order() {
        let mut store = store();
        store.assign("X-02", "Jane Doe", "#EF4444").unwrap();
        store.assign("X-01", "Ivan Petrov", "#3B82F6").unwrap();
        let ids: Vec<&str> = store.assigned_regions().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["X-01", "X-02"]);
    }
}
