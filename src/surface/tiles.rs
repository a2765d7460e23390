// src/surface/tiles.rs
//! Плиточная раскладка регионов
//!
//! Каждому региону справочника отводится квадратная плитка; плитки идут
//! строками в порядке справочника. Раскладка хранится как карта пикселей
//! `пиксель → индекс региона`, по которой выполняется поиск региона под
//! указателем.

use crate::catalog::Catalog;
use crate::config::SurfaceSettings;
use crate::error::RenderError;

use super::{MapSurface, SurfaceEvent, SurfaceFrame};

/// Значение пикселя фона (зазор между плитками)
pub const NO_REGION: u32 = u32::MAX;

/// Плиточная поверхность карты: раскладка, последний кадр и наведение
#[derive(Debug, Clone)]
pub struct TileSurface {
    /// Ширина поверхности в пикселях
    pub width: u32,

    /// Высота поверхности в пикселях
    pub height: u32,

    /// Индекс региона для каждого пикселя (`y * width + x`), [`NO_REGION`] для фона
    pub data: Vec<u32>,

    /// Коды регионов; позиция в векторе — индекс в `data`
    pub(super) ids: Vec<String>,
    pub(super) settings: SurfaceSettings,
    pub(super) frame: SurfaceFrame,
    hovered: Option<u32>,
}

/// Сторона раскладки: `gap + cells × (tile + gap)` без переполнения
fn span(cells: u32, tile: u32, gap: u32) -> Option<u32> {
    tile.checked_add(gap)?.checked_mul(cells)?.checked_add(gap)
}

impl TileSurface {
    /// Раскладывает регионы справочника по плиткам
    ///
    /// # Параметры
    /// * `catalog` — справочник; порядок плиток совпадает с порядком записей
    /// * `settings` — размер плитки, число столбцов, зазор и цвета отрисовки
    ///
    /// # Возвращает
    /// Поверхность размером `gap + columns × (tile_size + gap)` на
    /// `gap + rows × (tile_size + gap)` пикселей с пустым кадром.
    ///
    /// # Ошибки
    /// [`RenderError::Oversized`], если RGBA-буфер такой раскладки
    /// (`width × height × 4` байт) не помещается в `u32`.
    ///
    /// # Пример
    /// ```
    /// use regionmap::{Catalog, SurfaceSettings, TileSurface};
    ///
    /// let catalog = Catalog::russia()?;
    /// let surface = TileSurface::new(&catalog, SurfaceSettings::default())?;
    /// assert_eq!(surface.data.len(), (surface.width * surface.height) as usize);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(catalog: &Catalog, settings: SurfaceSettings) -> Result<Self, RenderError> {
        let ids: Vec<String> = catalog.ids().map(str::to_string).collect();
        let count = ids.len() as u32;
        let tile = settings.tile_size.max(1);
        let gap = settings.gap;
        let columns = settings.columns.max(1).min(count.max(1));
        let rows = count.div_ceil(columns).max(1);

        let oversized = || RenderError::Oversized {
            tile_size: tile,
            gap,
            columns,
            rows,
        };
        let width = span(columns, tile, gap).ok_or_else(oversized)?;
        let height = span(rows, tile, gap).ok_or_else(oversized)?;
        let pixels = width
            .checked_mul(height)
            .filter(|p| p.checked_mul(4).is_some())
            .ok_or_else(oversized)?;
        let mut data = vec![NO_REGION; pixels as usize];

        for i in 0..count {
            let x0 = gap + (i % columns) * (tile + gap);
            let y0 = gap + (i / columns) * (tile + gap);
            for y in y0..y0 + tile {
                let row = (y * width) as usize;
                data[row + x0 as usize..row + (x0 + tile) as usize].fill(i);
            }
        }

        tracing::debug!(width, height, regions = count, "tile surface laid out");
        Ok(Self {
            width,
            height,
            data,
            ids,
            settings,
            frame: SurfaceFrame::default(),
            hovered: None,
        })
    }

    fn index_at(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = self.data[(y * self.width + x) as usize];
        (index != NO_REGION).then_some(index)
    }

    /// Левый верхний угол плитки региона
    #[must_use]
    pub fn tile_origin(&self, id: &str) -> Option<(u32, u32)> {
        let index = self.ids.iter().position(|i| i == id)? as u32;
        let tile = self.settings.tile_size.max(1);
        let gap = self.settings.gap;
        let columns = (self.width - gap) / (tile + gap);
        Some((
            gap + (index % columns) * (tile + gap),
            gap + (index / columns) * (tile + gap),
        ))
    }

    /// Перемещение указателя.
    ///
    /// Возвращает `Hover` при входе в новый регион, `HoverEnd` при уходе
    /// на фон и `None`, если регион под указателем не сменился.
    pub fn pointer_moved(&mut self, x: u32, y: u32) -> Option<SurfaceEvent> {
        let under = self.index_at(x, y);
        if under == self.hovered {
            return None;
        }
        self.hovered = under;
        Some(match under {
            Some(index) => SurfaceEvent::Hover(self.ids[index as usize].clone()),
            None => SurfaceEvent::HoverEnd,
        })
    }

    /// Указатель покинул поверхность
    pub fn pointer_left(&mut self) -> Option<SurfaceEvent> {
        self.hovered.take().map(|_| SurfaceEvent::HoverEnd)
    }

    #[must_use]
    pub fn frame(&self) -> &SurfaceFrame {
        &self.frame
    }
}

impl MapSurface for TileSurface {
    fn render(&mut self, frame: &SurfaceFrame) {
        self.frame = frame.clone();
    }

    fn region_at(&self, x: u32, y: u32) -> Option<&str> {
        self.index_at(x, y).map(|index| self.ids[index as usize].as_str())
    }
}
