//! Offscreen rasterizer for arena snapshots
//!
//! Paints the same scene the window shows (tile fills, outlines, unit
//! markers, no text labels) into an [`image::RgbaImage`] for PNG export.

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::map::{
    hex_contains, hex_corners, Arena, HexLayout, PixelPos, ANT_MARKER_RGB, FOOD_MARKER_RGB,
    HOME_OUTLINE_RGB,
};

/// Error type for image export operations
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Visual parameters for the offscreen renderer
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Pixels per layout unit
    pub scale: f32,
    /// Border around the map, in pixels
    pub margin: f32,
    pub background: [u8; 3],
    pub outline: [u8; 3],
    /// Draw ant/food/home markers on top of the tiles
    pub overlays: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            scale: 48.0,
            margin: 16.0,
            background: [0xff, 0xff, 0xff],
            outline: [0x00, 0x00, 0x00],
            overlays: true,
        }
    }
}

/// Maps layout-space positions into image pixel space.
#[derive(Debug, Clone, Copy)]
pub struct SceneTransform {
    origin: PixelPos,
    scale: f32,
}

impl SceneTransform {
    pub fn apply(&self, p: PixelPos) -> PixelPos {
        PixelPos::new(
            (p.x - self.origin.x) * self.scale,
            (p.y - self.origin.y) * self.scale,
        )
    }
}

/// Computes the transform and image dimensions framing every tile of the
/// arena, or `None` for an empty map.
pub fn scene_transform(
    arena: &Arena,
    layout: &HexLayout,
    style: &RenderStyle,
) -> Option<(SceneTransform, u32, u32)> {
    let (min, max) = layout.bounds(&arena.map)?;
    // The pad covers the hex extent beyond the outermost centers plus the
    // requested margin.
    let pad = layout.size() + style.margin / style.scale;
    let transform = SceneTransform {
        origin: PixelPos::new(min.x - pad, min.y - pad),
        scale: style.scale,
    };
    let width = (((max.x - min.x) + 2.0 * pad) * style.scale).ceil().max(1.0) as u32;
    let height = (((max.y - min.y) + 2.0 * pad) * style.scale).ceil().max(1.0) as u32;
    Some((transform, width, height))
}

/// Rasterizes the arena into an RGBA image.
///
/// Tiles paint in document order, then the unit markers on top. An empty
/// arena produces a background-only frame.
pub fn render_arena(arena: &Arena, layout: &HexLayout, style: &RenderStyle) -> RgbaImage {
    let Some((transform, width, height)) = scene_transform(arena, layout, style) else {
        let side = (2.0 * style.margin).max(64.0) as u32;
        return RgbaImage::from_pixel(side, side, opaque(style.background));
    };

    let mut img = RgbaImage::from_pixel(width, height, opaque(style.background));
    let radius = layout.size() * style.scale;

    for tile in &arena.map {
        let center = transform.apply(layout.center(tile.q, tile.r));
        let corners = hex_corners(center, radius);
        fill_hex(&mut img, &corners, opaque(tile.kind().rgb()));
        stroke_hex(&mut img, &corners, opaque(style.outline));
    }

    if style.overlays {
        for cell in &arena.home {
            let center = transform.apply(layout.center(cell.q, cell.r));
            for ring in [0.82, 0.85, 0.88] {
                stroke_hex(
                    &mut img,
                    &hex_corners(center, radius * ring),
                    opaque(HOME_OUTLINE_RGB),
                );
            }
        }
        for food in &arena.food {
            let center = transform.apply(layout.center(food.q, food.r));
            fill_disc(&mut img, center, radius * 0.28, opaque(FOOD_MARKER_RGB));
        }
        for ant in &arena.ants {
            let center = transform.apply(layout.center(ant.q, ant.r));
            fill_disc(&mut img, center, radius * 0.36, opaque(ANT_MARKER_RGB));
        }
    }

    img
}

/// Renders the arena and writes it to `path` (format chosen by extension).
pub fn export_png(
    arena: &Arena,
    layout: &HexLayout,
    style: &RenderStyle,
    path: &Path,
) -> Result<(), ExportError> {
    let img = render_arena(arena, layout, style);
    img.save(path)?;
    log::info!(
        "exported {}x{} arena image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 0xff])
}

fn fill_hex(img: &mut RgbaImage, corners: &[PixelPos; 6], color: Rgba<u8>) {
    let min_x = corners.iter().map(|c| c.x).fold(f32::INFINITY, f32::min);
    let min_y = corners.iter().map(|c| c.y).fold(f32::INFINITY, f32::min);
    let max_x = corners.iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max);
    let max_y = corners.iter().map(|c| c.y).fold(f32::NEG_INFINITY, f32::max);

    let x1 = max_x.ceil().min(img.width() as f32 - 1.0);
    let y1 = max_y.ceil().min(img.height() as f32 - 1.0);
    if x1 < 0.0 || y1 < 0.0 {
        return;
    }
    let x0 = min_x.floor().max(0.0) as u32;
    let y0 = min_y.floor().max(0.0) as u32;

    for y in y0..=y1 as u32 {
        for x in x0..=x1 as u32 {
            // Sample at the pixel center.
            if hex_contains(corners, PixelPos::new(x as f32 + 0.5, y as f32 + 0.5)) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn stroke_hex(img: &mut RgbaImage, corners: &[PixelPos; 6], color: Rgba<u8>) {
    for i in 0..6 {
        let a = corners[i];
        let b = corners[(i + 1) % 6];
        let steps = (b.x - a.x).hypot(b.y - a.y).ceil().max(1.0) as u32;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            put_pixel_clipped(img, a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t, color);
        }
    }
}

fn fill_disc(img: &mut RgbaImage, center: PixelPos, radius: f32, color: Rgba<u8>) {
    let x1 = (center.x + radius).ceil().min(img.width() as f32 - 1.0);
    let y1 = (center.y + radius).ceil().min(img.height() as f32 - 1.0);
    if x1 < 0.0 || y1 < 0.0 {
        return;
    }
    let x0 = (center.x - radius).floor().max(0.0) as u32;
    let y0 = (center.y - radius).floor().max(0.0) as u32;

    for y in y0..=y1 as u32 {
        for x in x0..=x1 as u32 {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn put_pixel_clipped(img: &mut RgbaImage, x: f32, y: f32, color: Rgba<u8>) {
    let (x, y) = (x.round() as i64, y.round() as i64);
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{parse_arena, TileKind};

    #[test]
    fn empty_arena_renders_background_only() {
        let arena = Arena::default();
        let style = RenderStyle::default();
        let img = render_arena(&arena, &HexLayout::new(1.0), &style);

        assert_eq!((img.width(), img.height()), (64, 64));
        assert!(img.pixels().all(|p| *p == opaque(style.background)));
    }

    #[test]
    fn single_tile_fills_its_center() {
        let arena = parse_arena(r#"{"map":[{"q":0,"r":0,"type":5}]}"#).expect("parses");
        let layout = HexLayout::new(1.0);
        let style = RenderStyle::default();

        let (transform, width, height) =
            scene_transform(&arena, &layout, &style).expect("non-empty");
        let img = render_arena(&arena, &layout, &style);
        assert_eq!((img.width(), img.height()), (width, height));

        let center = transform.apply(layout.center(0, 0));
        let at_center = *img.get_pixel(center.x as u32, center.y as u32);
        assert_eq!(at_center, opaque(TileKind::Rock.rgb()));
        assert_eq!(*img.get_pixel(0, 0), opaque(style.background));
    }

    #[test]
    fn markers_paint_over_tiles() {
        let arena = parse_arena(
            r#"{"map":[{"q":0,"r":0,"type":2}],"ants":[{"q":0,"r":0,"id":"a","health":1,"type":0}]}"#,
        )
        .expect("parses");
        let layout = HexLayout::new(1.0);
        let style = RenderStyle::default();

        let (transform, _, _) = scene_transform(&arena, &layout, &style).expect("non-empty");
        let img = render_arena(&arena, &layout, &style);
        let center = transform.apply(layout.center(0, 0));
        assert_eq!(
            *img.get_pixel(center.x as u32, center.y as u32),
            opaque(ANT_MARKER_RGB)
        );
    }
}
