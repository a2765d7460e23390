// src/surface/png.rs
//! Отрисовка плиточной поверхности в изображение
//!
//! Карта пикселей хранит только индексы регионов; цвета берутся из
//! последнего кадра:
//! - регион с цветом в кадре — этот цвет
//! - регион без цвета (или с нечитаемым цветом) — `unassigned_fill`
//! - выбранный регион — рамка `selected_outline` по краю плитки
//! - фон — `background`
//!
//! Нечитаемые цвета настроек заменяются чёрным (визуальный сигнал ошибки).

use image::{ImageBuffer, Rgba};

use crate::error::RenderError;

use super::tiles::{NO_REGION, TileSurface};

const ERROR_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Разбирает цвет `"#rrggbb"` в RGBA с непрозрачной альфой.
///
/// # Пример
/// ```
/// use regionmap::surface::png::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#3B82F6"), Some([0x3B, 0x82, 0xF6, 255]));
/// assert_eq!(parse_hex_color("blue"), None);
/// ```
#[must_use]
pub fn parse_hex_color(color: &str) -> Option<[u8; 4]> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() == 6
        && hex.is_ascii()
        && let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        )
    {
        return Some([r, g, b, 255]);
    }
    None
}

impl TileSurface {
    /// Преобразует поверхность с текущим кадром в RGBA-буфер
    /// длиной `width × height × 4`.
    #[must_use]
    pub fn to_rgba_image(&self) -> Vec<u8> {
        let settings = &self.settings;
        let unassigned = parse_hex_color(&settings.unassigned_fill).unwrap_or(ERROR_COLOR);
        let background = parse_hex_color(&settings.background).unwrap_or(ERROR_COLOR);
        let outline = parse_hex_color(&settings.selected_outline).unwrap_or(ERROR_COLOR);

        // Цвет каждого региона вычисляется один раз до обхода пикселей
        let fills: Vec<[u8; 4]> = self
            .ids
            .iter()
            .map(|id| {
                self.frame
                    .colors
                    .get(id)
                    .and_then(|c| parse_hex_color(c))
                    .unwrap_or(unassigned)
            })
            .collect();
        let selected = self
            .frame
            .selected
            .as_deref()
            .and_then(|id| self.ids.iter().position(|i| i == id))
            .map(|i| i as u32);

        let tile = settings.tile_size.max(1);
        let pitch = tile + settings.gap;
        let border = settings.outline_width.min(tile / 2);

        self.data
            .iter()
            .enumerate()
            .flat_map(|(idx, &index)| {
                if index == NO_REGION {
                    return background;
                }
                if Some(index) == selected {
                    let x = idx as u32 % self.width;
                    let y = idx as u32 / self.width;
                    let lx = (x - settings.gap) % pitch;
                    let ly = (y - settings.gap) % pitch;
                    if lx < border || ly < border || lx >= tile - border || ly >= tile - border {
                        return outline;
                    }
                }
                fills[index as usize]
            })
            .collect()
    }

    /// Сохраняет поверхность с текущим кадром в PNG-файл
    ///
    /// # Параметры
    /// * `path` — путь к файлу (например, `"output/regions.png"`)
    ///
    /// # Ошибки
    /// - [`RenderError::Buffer`] — буфер не соответствует размерам поверхности
    /// - [`RenderError::Image`] — файл не удалось закодировать или записать
    ///
    /// # Пример
    /// ```no_run
    /// use regionmap::{Catalog, MapSurface, Session, SurfaceSettings, TileSurface};
    ///
    /// let catalog = Catalog::russia()?;
    /// let mut surface = TileSurface::new(&catalog, SurfaceSettings::default())?;
    /// let session = Session::new(catalog);
    /// surface.render(&session.frame());
    /// surface.save_as_png("output/regions.png")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn save_as_png(&self, path: &str) -> Result<(), RenderError> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_rgba_image()).ok_or(
                RenderError::Buffer {
                    width: self.width,
                    height: self.height,
                },
            )?;
        img.save(path)?;
        tracing::info!(path, width = self.width, height = self.height, "surface saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RegionRecord};
    use crate::config::SurfaceSettings;
    use crate::surface::{MapSurface, SurfaceFrame};

    fn pixel(surface: &TileSurface, rgba: &[u8], x: u32, y: u32) -> [u8; 4] {
        let i = ((y * surface.width + x) * 4) as usize;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    }

    fn surface() -> TileSurface {
        let catalog = Catalog::new(vec![
            RegionRecord::new("A", "Альфа", "UTC+3"),
            RegionRecord::new("B", "Бета", "UTC+3"),
        ])
        .unwrap();
        TileSurface::new(
            &catalog,
            SurfaceSettings {
                tile_size: 8,
                columns: 2,
                gap: 1,
                outline_width: 2,
                unassigned_fill: "#2B3B55".into(),
                background: "#000010".into(),
                selected_outline: "#FFFFFF".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#10b981"), Some([0x10, 0xB9, 0x81, 255]));
        assert_eq!(parse_hex_color("#10B98"), None);
        assert_eq!(parse_hex_color("#ЖЖЖ"), None);
        assert_eq!(parse_hex_color("10B981"), None);
    }

    #[test]
    fn omitted_regions_use_default_fill() {
        let mut surface = surface();
        let mut frame = SurfaceFrame::default();
        frame.colors.insert("B".into(), "#EF4444".into());
        surface.render(&frame);

        let rgba = surface.to_rgba_image();
        assert_eq!(rgba.len(), (surface.width * surface.height * 4) as usize);
        assert_eq!(pixel(&surface, &rgba, 0, 0), [0, 0, 0x10, 255]);
        assert_eq!(pixel(&surface, &rgba, 4, 4), [0x2B, 0x3B, 0x55, 255]);
        assert_eq!(pixel(&surface, &rgba, 13, 4), [0xEF, 0x44, 0x44, 255]);
    }

    #[test]
    fn unparsable_color_falls_back_to_default_fill() {
        let mut surface = surface();
        let mut frame = SurfaceFrame::default();
        frame.colors.insert("A".into(), "tomato".into());
        surface.render(&frame);
        let rgba = surface.to_rgba_image();
        assert_eq!(pixel(&surface, &rgba, 4, 4), [0x2B, 0x3B, 0x55, 255]);
    }

    #[test]
    fn selected_region_gets_outline() {
        let mut surface = surface();
        surface.render(&SurfaceFrame {
            colors: [("A".to_string(), "#10B981".to_string())].into(),
            selected: Some("A".into()),
        });
        let rgba = surface.to_rgba_image();
        // плитка A занимает x, y в 1..=8
        assert_eq!(pixel(&surface, &rgba, 1, 1), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, &rgba, 8, 4), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, &rgba, 4, 4), [0x10, 0xB9, 0x81, 255]);
        // у невыбранной плитки рамки нет
        assert_eq!(pixel(&surface, &rgba, 10, 1), [0x2B, 0x3B, 0x55, 255]);
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");
        surface().save_as_png(path.to_str().unwrap()).unwrap();
        assert!(path.is_file());
    }
}
