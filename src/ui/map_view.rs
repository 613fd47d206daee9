//! Map viewing widget for the hex arena viewer

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, Vec2};

use crate::map::{
    hex_contains, hex_corners, Arena, HexLayout, PixelPos, ANT_MARKER_RGB, FOOD_MARKER_RGB,
    HOME_OUTLINE_RGB,
};

/// Configuration for the map view
#[derive(Clone, Debug)]
pub struct MapViewConfig {
    pub zoom_level: f32,
    /// On-screen hex circumradius in pixels at zoom 1
    pub hex_size: f32,
    pub show_labels: bool,
    pub show_outline: bool,
    pub show_overlays: bool,
    pub outline_color: Color32,
    pub background_color: Color32,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            zoom_level: 1.0,
            hex_size: 32.0,
            show_labels: true,
            show_outline: true,
            show_overlays: true,
            outline_color: Color32::BLACK,
            background_color: Color32::WHITE,
        }
    }
}

/// Widget that paints the arena and reports the hovered tile
pub struct MapView {
    config: MapViewConfig,
    pan_offset: Vec2,
    hovered_tile: Option<(i32, i32)>,
}

impl MapView {
    pub fn new() -> Self {
        Self {
            config: MapViewConfig::default(),
            pan_offset: Vec2::ZERO,
            hovered_tile: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_config(config: MapViewConfig) -> Self {
        Self {
            config,
            pan_offset: Vec2::ZERO,
            hovered_tile: None,
        }
    }

    /// Show the map view widget
    pub fn show(&mut self, ui: &mut Ui, arena: &Arena) -> Option<(i32, i32)> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

        if response.dragged() {
            self.pan_offset += response.drag_delta();
        }

        painter.rect_filled(response.rect, 0.0, self.config.background_color);

        let radius = self.config.hex_size * self.config.zoom_level;
        let layout = HexLayout::new(radius);

        // Keep the map centered until the user pans away.
        let offset = match layout.bounds(&arena.map) {
            Some((min, max)) => {
                let mid = Vec2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
                response.rect.center().to_vec2() - mid + self.pan_offset
            }
            None => response.rect.center().to_vec2() + self.pan_offset,
        };
        let to_screen = |p: PixelPos| Pos2::new(p.x + offset.x, p.y + offset.y);

        let pointer = response.hover_pos();
        self.hovered_tile = None;

        let stroke = if self.config.show_outline {
            Stroke::new(1.0, self.config.outline_color)
        } else {
            Stroke::NONE
        };

        // Document order is draw order, so overlapping rows resolve the same
        // way on screen and in hover picking: the last match wins.
        for tile in &arena.map {
            let corners = layout.corners(tile.q, tile.r);

            if let Some(pos) = pointer {
                let local = PixelPos::new(pos.x - offset.x, pos.y - offset.y);
                if hex_contains(&corners, local) {
                    self.hovered_tile = Some((tile.q, tile.r));
                }
            }

            let points: Vec<Pos2> = corners.iter().map(|c| to_screen(*c)).collect();
            painter.add(egui::Shape::convex_polygon(
                points,
                super::color32(tile.kind().rgb()),
                stroke,
            ));
        }

        if self.config.show_labels {
            let font = FontId::proportional((radius * 0.38).clamp(6.0, 24.0));
            for tile in &arena.map {
                painter.text(
                    to_screen(layout.center(tile.q, tile.r)),
                    Align2::CENTER_CENTER,
                    format!("({},{})", tile.q, tile.r),
                    font.clone(),
                    Color32::from_gray(60),
                );
            }
        }

        if self.config.show_overlays {
            for cell in &arena.home {
                let center = layout.center(cell.q, cell.r);
                let ring: Vec<Pos2> = hex_corners(center, radius * 0.85)
                    .iter()
                    .map(|c| to_screen(*c))
                    .collect();
                painter.add(egui::Shape::convex_polygon(
                    ring,
                    Color32::TRANSPARENT,
                    Stroke::new(2.5, super::color32(HOME_OUTLINE_RGB)),
                ));
            }
            for food in &arena.food {
                let center = to_screen(layout.center(food.q, food.r));
                painter.circle_filled(center, radius * 0.28, super::color32(FOOD_MARKER_RGB));
            }
            for ant in &arena.ants {
                let center = to_screen(layout.center(ant.q, ant.r));
                painter.circle_filled(center, radius * 0.36, super::color32(ANT_MARKER_RGB));
            }
        }

        self.hovered_tile
    }

    /// Get the current configuration
    pub fn config(&self) -> &MapViewConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration
    pub fn config_mut(&mut self) -> &mut MapViewConfig {
        &mut self.config
    }
}
