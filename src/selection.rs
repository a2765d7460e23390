// src/selection.rs
//! Выбор региона для просмотра и редактирования.
//!
//! Два состояния: ничего не выбрано или выбран один `id`. Идентификатор
//! проверяется по справочнику: неизвестный `id` сбрасывает выбор.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::AssignmentError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(String),
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    current: Selection,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Выбирает регион. Повторный выбор того же `id` ничего не меняет.
    ///
    /// # Ошибки
    /// [`AssignmentError::UnknownRegionId`], если `id` нет в справочнике;
    /// выбор при этом сбрасывается.
    pub fn select(&mut self, id: &str, catalog: &Catalog) -> Result<(), AssignmentError> {
        if !catalog.contains(id) {
            tracing::warn!(region = %id, "selection of unknown region rejected");
            self.current = Selection::NoSelection;
            return Err(AssignmentError::UnknownRegionId(id.to_string()));
        }
        self.current = Selection::Selected(id.to_string());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.current = Selection::NoSelection;
    }

    #[must_use]
    pub fn current(&self) -> &Selection {
        &self.current
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match &self.current {
            Selection::NoSelection => None,
            Selection::Selected(id) => Some(id),
        }
    }

    /// Выбранный `id` или [`AssignmentError::NoRegionSelected`]
    pub fn require(&self) -> Result<&str, AssignmentError> {
        self.selected_id().ok_or(AssignmentError::NoRegionSelected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RegionRecord;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            RegionRecord::new("X-01", "Test Region", "UTC+0"),
            RegionRecord::new("X-02", "Other Region", "UTC+1"),
        ])
        .unwrap()
    }

    #[test]
    fn starts_empty() {
        let controller = SelectionController::new();
        assert_eq!(controller.current(), &Selection::NoSelection);
        assert_eq!(controller.require(), Err(AssignmentError::NoRegionSelected));
    }

    #[test]
    fn select_and_clear() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.select("X-01", &catalog).unwrap();
        assert_eq!(controller.selected_id(), Some("X-01"));
        controller.select("X-02", &catalog).unwrap();
        assert_eq!(controller.selected_id(), Some("X-02"));
        controller.clear();
        assert_eq!(controller.selected_id(), None);
    }

    #[test]
    fn unknown_id_drops_selection() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.select("X-01", &catalog).unwrap();
        assert_eq!(
            controller.select("NOPE", &catalog),
            Err(AssignmentError::UnknownRegionId("NOPE".into()))
        );
        assert_eq!(controller.current(), &Selection::NoSelection);
    }
}
