//! Arena data structures for the hex arena viewer

use std::fmt;

use serde::Deserialize;

/// A single hex tile of the arena map.
///
/// Tiles carry no identity beyond their `(q, r)` pair; the map is painted in
/// document order, so duplicate coordinates simply draw over each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Tile {
    pub q: i32,
    pub r: i32,
    #[serde(rename = "type")]
    pub type_code: i32,
}

impl Tile {
    pub fn kind(&self) -> TileKind {
        TileKind::from_code(self.type_code)
    }
}

/// Terrain classification of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    AntSpot,
    Plain,
    Dirt,
    Acid,
    Rock,
    /// Any type code outside the known table
    Unknown,
}

impl TileKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => TileKind::AntSpot,
            2 => TileKind::Plain,
            3 => TileKind::Dirt,
            4 => TileKind::Acid,
            5 => TileKind::Rock,
            _ => TileKind::Unknown,
        }
    }

    /// Fill color of the tile, as sRGB bytes.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            TileKind::AntSpot => [0xf7, 0xfb, 0xff],
            TileKind::Plain => [0xd9, 0xf0, 0xa3],
            TileKind::Dirt => [0xfe, 0xe5, 0x97],
            TileKind::Acid => [0xfd, 0xae, 0x61],
            TileKind::Rock => [0xe6, 0x55, 0x0d],
            TileKind::Unknown => [0xd3, 0xd3, 0xd3],
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::AntSpot => write!(f, "Ant Spot"),
            TileKind::Plain => write!(f, "Plain"),
            TileKind::Dirt => write!(f, "Dirt"),
            TileKind::Acid => write!(f, "Acid"),
            TileKind::Rock => write!(f, "Rock"),
            TileKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// An ant standing somewhere on the map
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ant {
    pub q: i32,
    pub r: i32,
    #[serde(default, rename = "type")]
    pub type_code: i32,
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub id: String,
}

/// A stack of food lying on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FoodStack {
    pub q: i32,
    pub r: i32,
    #[serde(default)]
    pub amount: i32,
}

/// A tile belonging to the player's anthill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HomeCell {
    pub q: i32,
    pub r: i32,
}

/// Marker colors for entities painted on top of the tiles.
pub const ANT_MARKER_RGB: [u8; 3] = [0xb7, 0x1c, 0x1c];
pub const FOOD_MARKER_RGB: [u8; 3] = [0x2e, 0x7d, 0x32];
pub const HOME_OUTLINE_RGB: [u8; 3] = [0xff, 0x6f, 0x00];

/// A full arena snapshot as served in `arena_response.json`.
///
/// Every key is optional: a document without `map` is a valid, empty arena,
/// and unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Arena {
    #[serde(default)]
    pub map: Vec<Tile>,
    #[serde(default)]
    pub ants: Vec<Ant>,
    #[serde(default)]
    pub food: Vec<FoodStack>,
    #[serde(default)]
    pub home: Vec<HomeCell>,
    #[serde(default, rename = "turnNo")]
    pub turn_no: i32,
    #[serde(default)]
    pub score: i32,
}

impl Arena {
    pub fn tile_at(&self, q: i32, r: i32) -> Option<&Tile> {
        self.map.iter().find(|t| t.q == q && t.r == r)
    }

    pub fn ants_at(&self, q: i32, r: i32) -> impl Iterator<Item = &Ant> {
        self.ants.iter().filter(move |a| a.q == q && a.r == r)
    }

    pub fn food_at(&self, q: i32, r: i32) -> Option<&FoodStack> {
        self.food.iter().find(|f| f.q == q && f.r == r)
    }

    pub fn is_home(&self, q: i32, r: i32) -> bool {
        self.home.iter().any(|h| h.q == q && h.r == r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_codes_map_to_their_kind() {
        assert_eq!(TileKind::from_code(1), TileKind::AntSpot);
        assert_eq!(TileKind::from_code(2), TileKind::Plain);
        assert_eq!(TileKind::from_code(3), TileKind::Dirt);
        assert_eq!(TileKind::from_code(4), TileKind::Acid);
        assert_eq!(TileKind::from_code(5), TileKind::Rock);
    }

    #[test]
    fn unknown_type_codes_fall_back() {
        assert_eq!(TileKind::from_code(0), TileKind::Unknown);
        assert_eq!(TileKind::from_code(99), TileKind::Unknown);
        assert_eq!(TileKind::from_code(-7), TileKind::Unknown);
    }

    #[test]
    fn dirt_and_fallback_colors() {
        assert_eq!(TileKind::from_code(3).rgb(), [0xfe, 0xe5, 0x97]);
        assert_eq!(TileKind::from_code(99).rgb(), [0xd3, 0xd3, 0xd3]);
    }

    #[test]
    fn kind_names_read_well() {
        assert_eq!(TileKind::AntSpot.to_string(), "Ant Spot");
        assert_eq!(TileKind::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn tile_deserializes_from_document_keys() {
        let tile: Tile = serde_json::from_str(r#"{"q": -2, "r": 5, "type": 4}"#).expect("parses");
        assert_eq!((tile.q, tile.r), (-2, 5));
        assert_eq!(tile.kind(), TileKind::Acid);
    }

    #[test]
    fn arena_lookups_find_entities_by_coordinate() {
        let arena: Arena = serde_json::from_str(
            r#"{
                "map": [{"q": 0, "r": 0, "type": 2}, {"q": 1, "r": 0, "type": 1}],
                "ants": [
                    {"q": 1, "r": 0, "type": 0, "health": 90, "id": "a-1"},
                    {"q": 1, "r": 0, "type": 1, "health": 40, "id": "a-2"}
                ],
                "food": [{"q": 0, "r": 0, "amount": 8}],
                "home": [{"q": 1, "r": 0}],
                "turnNo": 12,
                "score": 30
            }"#,
        )
        .expect("parses");

        assert_eq!(arena.tile_at(1, 0).map(Tile::kind), Some(TileKind::AntSpot));
        assert!(arena.tile_at(5, 5).is_none());
        assert_eq!(arena.ants_at(1, 0).count(), 2);
        assert_eq!(arena.food_at(0, 0).map(|f| f.amount), Some(8));
        assert!(arena.is_home(1, 0));
        assert!(!arena.is_home(0, 0));
    }

    #[test]
    fn missing_document_keys_default_to_empty() {
        let arena: Arena = serde_json::from_str("{}").expect("parses");
        assert!(arena.map.is_empty());
        assert!(arena.ants.is_empty());
        assert!(arena.food.is_empty());
        assert!(arena.home.is_empty());
        assert_eq!(arena.turn_no, 0);
        assert_eq!(arena.score, 0);
    }
}
