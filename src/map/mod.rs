//! Arena map data, layout and loading for the hex arena viewer

pub mod layout;
pub mod loader;
pub mod types;

// Re-export commonly used items
pub use layout::{hex_contains, hex_corners, HexLayout, PixelPos};
pub use loader::{load_arena, parse_arena, ArenaLoadError};
pub use types::{
    Ant, Arena, FoodStack, HomeCell, Tile, TileKind, ANT_MARKER_RGB, FOOD_MARKER_RGB,
    HOME_OUTLINE_RGB,
};
