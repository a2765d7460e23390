// src/session.rs
//! Сессия редактирования: связка хранилища, выбора и поверхности карты
//!
//! Поток данных:
//! 1. щелчок по региону на поверхности → [`Session::handle`] → выбор региона
//! 2. выбор → форма заполняется данными региона ([`FormDraft`])
//! 3. назначение / изменение / сброс → хранилище → новый [`SurfaceFrame`]
//!
//! Сессия не хранит копий состояния регионов: всё, что показывается,
//! читается из [`RegionStore`] в момент запроса. Каждая попытка изменения
//! возвращает [`Notice`] — сообщение для пользователя об успехе или
//! конкретной причине отказа.

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::DEFAULT_COLOR;
use crate::error::AssignmentError;
use crate::selection::SelectionController;
use crate::state::RegionUpdate;
use crate::store::RegionStore;
use crate::surface::{SurfaceEvent, SurfaceFrame};
use crate::views::{RegionTooltip, SelectedRegion, Stats};

/// Успешно выполненное действие
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Assigned,
    Updated,
    Reset,
}

/// Результат попытки изменения, адресованный пользователю
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub outcome: Result<Action, AssignmentError>,
}

impl Notice {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    #[must_use]
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(Action::Assigned) => "Сотрудник назначен".to_string(),
            Ok(Action::Updated) => "Данные обновлены".to_string(),
            Ok(Action::Reset) => "Регион сброшен".to_string(),
            Err(AssignmentError::NoRegionSelected) => "Выберите регион".to_string(),
            Err(AssignmentError::EmptyEmployeeName) => "Введите имя сотрудника".to_string(),
            Err(AssignmentError::UnknownRegionId(id)) => format!("Неизвестный регион: {id}"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Поля формы назначения
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub employee: String,
    pub color: String,
}

#[derive(Debug)]
pub struct Session {
    store: RegionStore,
    selection: SelectionController,
    hovered: Option<String>,
    draft: FormDraft,
    default_color: String,
}

impl Session {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_default_color(catalog, DEFAULT_COLOR)
    }

    #[must_use]
    pub fn with_default_color(catalog: Catalog, default_color: impl Into<String>) -> Self {
        let default_color = default_color.into();
        Self {
            store: RegionStore::new(catalog),
            selection: SelectionController::new(),
            hovered: None,
            draft: FormDraft {
                employee: String::new(),
                color: default_color.clone(),
            },
            default_color,
        }
    }

    #[must_use]
    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    /// Выбирает регион и заполняет форму его данными.
    pub fn select(&mut self, id: &str) -> Result<(), AssignmentError> {
        let result = self.selection.select(id, self.store.catalog());
        self.sync_draft();
        result
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.sync_draft();
    }

    fn blank_draft(&self) -> FormDraft {
        FormDraft {
            employee: String::new(),
            color: self.default_color.clone(),
        }
    }

    /// Заполняет форму данными выбранного региона; без выбора форма пуста.
    fn sync_draft(&mut self) {
        let Some(state) = self.selection.selected_id().and_then(|id| self.store.get(id)) else {
            self.draft = self.blank_draft();
            return;
        };
        self.draft = FormDraft {
            employee: state.employee.clone().unwrap_or_default(),
            color: state
                .color
                .clone()
                .unwrap_or_else(|| self.default_color.clone()),
        };
    }

    fn notice(&self, outcome: Result<Action, AssignmentError>) -> Notice {
        match &outcome {
            Ok(action) => tracing::info!(region = ?self.selected_id(), ?action, "mutation applied"),
            Err(error) => tracing::warn!(region = ?self.selected_id(), %error, "mutation rejected"),
        }
        Notice { outcome }
    }

    pub fn assign_selected(&mut self, employee: &str, color: &str) -> Notice {
        let outcome = self
            .selection
            .require()
            .and_then(|id| self.store.assign(id, employee, color))
            .map(|()| Action::Assigned);
        if outcome.is_ok() {
            self.sync_draft();
        }
        self.notice(outcome)
    }

    /// Изменяет выбранный регион через [`RegionStore::update`].
    ///
    /// Назначенный сотрудник не требуется: для свободного региона можно
    /// задать только цвет, регион при этом остаётся свободным.
    pub fn update_selected(&mut self, update: RegionUpdate) -> Notice {
        let outcome = self
            .selection
            .require()
            .and_then(|id| self.store.update(id, update))
            .map(|()| Action::Updated);
        if outcome.is_ok() {
            self.sync_draft();
        }
        self.notice(outcome)
    }

    pub fn reset_selected(&mut self) -> Notice {
        let outcome = self
            .selection
            .require()
            .and_then(|id| self.store.reset(id))
            .map(|()| Action::Reset);
        if outcome.is_ok() {
            self.draft = self.blank_draft();
        }
        self.notice(outcome)
    }

    #[must_use]
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn set_draft_employee(&mut self, employee: impl Into<String>) {
        self.draft.employee = employee.into();
    }

    pub fn set_draft_color(&mut self, color: impl Into<String>) {
        self.draft.color = color.into();
    }

    /// Назначение из полей формы
    pub fn assign_draft(&mut self) -> Notice {
        let FormDraft { employee, color } = self.draft.clone();
        self.assign_selected(&employee, &color)
    }

    /// Изменение из полей формы: обновляются и сотрудник, и цвет
    pub fn update_draft(&mut self) -> Notice {
        let FormDraft { employee, color } = self.draft.clone();
        self.update_selected(RegionUpdate::default().with_employee(employee).with_color(color))
    }

    #[must_use]
    pub fn detail(&self) -> SelectedRegion {
        self.store.detail(self.selection.selected_id())
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<RegionTooltip> {
        self.hovered.as_deref().and_then(|id| self.store.tooltip(id))
    }

    /// Кадр для поверхности карты по текущему состоянию
    #[must_use]
    pub fn frame(&self) -> SurfaceFrame {
        SurfaceFrame {
            colors: self.store.colors_by_id(),
            selected: self.selection.selected_id().map(str::to_string),
        }
    }

    /// Обрабатывает событие поверхности карты.
    ///
    /// Наведение на неизвестный регион игнорируется, щелчок по нему
    /// сбрасывает выбор и возвращает ошибку.
    pub fn handle(&mut self, event: SurfaceEvent) -> Result<(), AssignmentError> {
        match event {
            SurfaceEvent::Hover(id) => {
                if self.store.catalog().contains(&id) {
                    self.hovered = Some(id);
                }
                Ok(())
            }
            SurfaceEvent::HoverEnd => {
                self.hovered = None;
                Ok(())
            }
            SurfaceEvent::Click(id) => self.select(&id),
        }
    }
}
