//! Viewer for hexagonal arena snapshots.
//!
//! Loads an `arena_response.json` document, lays its tiles out on an
//! offset-row hex grid, and shows them colored by terrain with coordinate
//! labels. The same scene can be exported to a PNG file.

pub mod map;
pub mod render;
pub mod ui;

pub use map::{Arena, ArenaLoadError, HexLayout, Tile, TileKind};
