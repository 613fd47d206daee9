//! Tile information panel for the hex arena viewer

use eframe::egui::{self, Color32, RichText, Ui, Vec2};

use crate::map::{Arena, ANT_MARKER_RGB, FOOD_MARKER_RGB, HOME_OUTLINE_RGB};

/// Widget for displaying details of the hovered tile
pub struct TileInfoPanel {
    show_units: bool,
}

impl Default for TileInfoPanel {
    fn default() -> Self {
        Self { show_units: true }
    }
}

impl TileInfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tile information panel
    pub fn show(&mut self, ui: &mut Ui, arena: &Arena, hovered: Option<(i32, i32)>) {
        ui.heading("Tile");

        let Some((q, r)) = hovered else {
            ui.label("Hover over a tile to see its details");
            return;
        };

        ui.horizontal(|ui| {
            ui.label("Coordinates:");
            ui.label(RichText::new(format!("({}, {})", q, r)).color(Color32::LIGHT_BLUE));
        });

        match arena.tile_at(q, r) {
            Some(tile) => {
                let kind = tile.kind();
                ui.horizontal(|ui| {
                    ui.label("Terrain:");
                    egui::color_picker::show_color(
                        ui,
                        super::color32(kind.rgb()),
                        Vec2::new(14.0, 14.0),
                    );
                    ui.label(format!("{} (type {})", kind, tile.type_code));
                });
            }
            None => {
                ui.label("No tile at this position");
            }
        }

        if arena.is_home(q, r) {
            ui.label(RichText::new("Anthill cell").color(super::color32(HOME_OUTLINE_RGB)));
        }

        if let Some(food) = arena.food_at(q, r) {
            ui.label(
                RichText::new(format!("Food: {}", food.amount))
                    .color(super::color32(FOOD_MARKER_RGB)),
            );
        }

        if self.show_units {
            for ant in arena.ants_at(q, r) {
                ui.label(
                    RichText::new(format!(
                        "Ant {} (type {}, hp {})",
                        ant.id, ant.type_code, ant.health
                    ))
                    .color(super::color32(ANT_MARKER_RGB)),
                );
            }
        }

        ui.separator();
        ui.checkbox(&mut self.show_units, "Show units on tile");
    }
}
