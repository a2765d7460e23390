// src/surface/mod.rs
//! Контракт поверхности карты
//!
//! Поверхность карты рисует фигуры регионов по их `id` и не знает ничего о
//! назначениях. Она получает кадр [`SurfaceFrame`]:
//! - частичную карту `id → цвет` (отсутствие `id` — заливка по умолчанию,
//!   а не ошибка)
//! - выбранный регион (один или ни одного)
//!
//! Обратно поверхность сообщает события [`SurfaceEvent`] с `id` региона.
//!
//! [`TileSurface`] — эталонная реализация: регионы разложены по сетке
//! плиток, кадр сохраняется в PNG. Настоящая географическая отрисовка
//! остаётся внешней.

pub mod png;
pub mod tiles;

use std::collections::BTreeMap;

use serde::Serialize;

pub use tiles::TileSurface;

/// Всё, что поверхность получает от ядра для отрисовки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceFrame {
    /// Явные цвета; регионы без цвета отсутствуют
    pub colors: BTreeMap<String, String>,
    pub selected: Option<String>,
}

/// Событие указателя над поверхностью
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SurfaceEvent {
    Hover(String),
    HoverEnd,
    Click(String),
}

pub trait MapSurface {
    /// Принимает новый кадр; предыдущий кадр больше не используется.
    fn render(&mut self, frame: &SurfaceFrame);

    /// Регион под точкой `(x, y)` или `None` для фона и точек вне поверхности
    fn region_at(&self, x: u32, y: u32) -> Option<&str>;

    fn click(&self, x: u32, y: u32) -> Option<SurfaceEvent> {
        self.region_at(x, y)
            .map(|id| SurfaceEvent::Click(id.to_string()))
    }
}
