//! Main application for the hex arena viewer

use eframe::egui;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

use super::{map_view::MapView, tile_info::TileInfoPanel};
use crate::map::{load_arena, Arena, ArenaLoadError, HexLayout};
use crate::render::{export_png, RenderStyle};

/// Relative path probed on startup, matching what the arena service dumps.
pub const DEFAULT_ARENA_PATH: &str = "arena_response.json";

/// Main application state
pub struct ArenaViewerApp {
    arena: Option<Arena>,
    arena_path: Option<PathBuf>,
    error_message: Option<String>,
    map_view: MapView,
    tile_info: TileInfoPanel,
    about_open: bool,
    hovered_tile: Option<(i32, i32)>,
}

impl Default for ArenaViewerApp {
    fn default() -> Self {
        Self {
            arena: None,
            arena_path: None,
            error_message: None,
            map_view: MapView::new(),
            tile_info: TileInfoPanel::new(),
            about_open: false,
            hovered_tile: None,
        }
    }
}

impl ArenaViewerApp {
    /// Creates a new instance of the application
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Set default theme
        cc.egui_ctx.set_style(egui::Style {
            visuals: egui::Visuals::dark(),
            ..Default::default()
        });

        let mut app = Self::default();

        // Pick up a snapshot dropped next to the binary, if there is one.
        if Path::new(DEFAULT_ARENA_PATH).exists() {
            app.load_arena_file(PathBuf::from(DEFAULT_ARENA_PATH));
        }

        app
    }

    /// Attempts to load an arena snapshot file
    fn load_arena_file(&mut self, path: PathBuf) {
        match load_arena(&path) {
            Ok(arena) => {
                self.arena = Some(arena);
                self.arena_path = Some(path);
                self.error_message = None;
                self.hovered_tile = None;
            }
            Err(ArenaLoadError::Io(e)) => {
                self.error_message = Some(format!("Failed to read arena file: {}", e));
            }
            Err(ArenaLoadError::Json(e)) => {
                self.error_message = Some(format!("Invalid arena document: {}", e));
            }
        }
    }

    /// Exports the current arena to a PNG chosen by the user
    fn export_image(&mut self) {
        let Some(arena) = &self.arena else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("arena.png")
            .save_file()
        else {
            return;
        };

        let config = self.map_view.config();
        let style = RenderStyle {
            background: super::color_bytes(config.background_color),
            outline: super::color_bytes(config.outline_color),
            overlays: config.show_overlays,
            ..RenderStyle::default()
        };
        match export_png(arena, &HexLayout::new(1.0), &style, &path) {
            Ok(()) => self.error_message = None,
            Err(e) => self.error_message = Some(format!("Failed to export image: {}", e)),
        }
    }

    /// Shows the main menu bar
    fn show_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Arena...").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Arena JSON", &["json"])
                        .pick_file()
                    {
                        self.load_arena_file(path);
                    }
                    ui.close_menu();
                }
                if ui.button("Reload").clicked() {
                    if let Some(path) = self.arena_path.clone() {
                        self.load_arena_file(path);
                    }
                    ui.close_menu();
                }
                if ui.button("Export PNG...").clicked() {
                    self.export_image();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let config = self.map_view.config_mut();
                ui.add(egui::Slider::new(&mut config.zoom_level, 0.1..=5.0).text("Zoom"));
                ui.add(egui::Slider::new(&mut config.hex_size, 8.0..=64.0).text("Hex Size"));
                ui.checkbox(&mut config.show_labels, "Coordinate Labels");
                ui.checkbox(&mut config.show_outline, "Tile Outlines");
                ui.checkbox(&mut config.show_overlays, "Unit Overlays");

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("Outline:");
                    ui.color_edit_button_srgba(&mut config.outline_color);
                });
                ui.horizontal(|ui| {
                    ui.label("Background:");
                    ui.color_edit_button_srgba(&mut config.background_color);
                });
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About...").clicked() {
                    self.about_open = true;
                    ui.close_menu();
                }
            });
        });
    }
}

impl eframe::App for ArenaViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.show_menu_bar(ui);
        });

        if self.about_open {
            egui::Window::new("About Hex Arena Viewer")
                .collapsible(false)
                .resizable(false)
                .default_size([280.0, 100.0])
                .open(&mut self.about_open)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Hex Arena Viewer");
                        ui.label("Offset-grid arena snapshot viewer");
                        ui.label("Written in Rust");
                    });
                });
        }

        egui::SidePanel::right("info_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                if let Some(arena) = &self.arena {
                    if let Some(path) = &self.arena_path {
                        ui.heading(path.file_name().and_then(|n| n.to_str()).unwrap_or("Arena"));
                    }
                    ui.label(format!("Turn: {}", arena.turn_no));
                    ui.label(format!("Score: {}", arena.score));
                    ui.label(format!(
                        "{} tiles, {} ants, {} food",
                        arena.map.len(),
                        arena.ants.len(),
                        arena.food.len()
                    ));
                    ui.separator();
                    self.tile_info.show(ui, arena, self.hovered_tile);
                } else {
                    ui.heading("No Arena Loaded");
                    ui.label("Open an arena snapshot to begin");
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error_message {
                ui.colored_label(egui::Color32::RED, error);
            }

            if let Some(arena) = &self.arena {
                self.hovered_tile = self.map_view.show(ui, arena);
            } else {
                ui.centered_and_justified(|ui| {
                    ui.heading("Welcome to Hex Arena Viewer");
                });
            }
        });
    }
}
