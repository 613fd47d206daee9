//! UI widgets for the hex arena viewer

pub mod app;
pub mod map_view;
pub mod tile_info;

// Re-export commonly used items
pub use app::ArenaViewerApp;

use eframe::egui::Color32;

/// Converts an sRGB byte triple into an egui color.
pub(crate) fn color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Converts an egui color back into sRGB bytes for the offscreen renderer.
pub(crate) fn color_bytes(color: Color32) -> [u8; 3] {
    [color.r(), color.g(), color.b()]
}
