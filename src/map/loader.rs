//! Arena loading for the hex arena viewer

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::types::Arena;

/// Error type for arena loading operations
#[derive(Error, Debug)]
pub enum ArenaLoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and parses an arena snapshot from `path`.
///
/// A missing or unreadable file and malformed JSON are fatal for the load;
/// a well-formed document with missing keys is not (see [`parse_arena`]).
pub fn load_arena(path: &Path) -> Result<Arena, ArenaLoadError> {
    let raw = fs::read_to_string(path)?;
    let arena = parse_arena(&raw)?;
    log::info!(
        "loaded {}: {} tiles, {} ants, {} food, turn {}",
        path.display(),
        arena.map.len(),
        arena.ants.len(),
        arena.food.len(),
        arena.turn_no
    );
    Ok(arena)
}

/// Parses an arena snapshot from raw JSON text.
///
/// Unknown keys are ignored and missing collections default to empty, so a
/// document without `map` yields an arena with no tiles rather than an error.
pub fn parse_arena(raw: &str) -> Result<Arena, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_arena_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("arena.json");
        std::fs::write(&path, r#"{"map":[{"q":0,"r":0,"type":2}],"turnNo":7}"#).expect("write");

        let arena = load_arena(&path).expect("loads");
        assert_eq!(arena.map.len(), 1);
        assert_eq!(arena.turn_no, 7);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_arena(Path::new("no_such_arena.json")).unwrap_err();
        assert!(matches!(err, ArenaLoadError::Io(_)));
    }

    #[test]
    fn malformed_document_is_a_json_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").expect("write");

        let err = load_arena(&path).unwrap_err();
        assert!(matches!(err, ArenaLoadError::Json(_)));
    }

    #[test]
    fn document_without_map_key_is_an_empty_arena() {
        let arena = parse_arena(r#"{"turnNo": 3, "score": 10}"#).expect("parses");
        assert!(arena.map.is_empty());
        assert_eq!(arena.turn_no, 3);
        assert_eq!(arena.score, 10);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let arena = parse_arena(r#"{"map": [], "nextTurnIn": 1.5}"#).expect("parses");
        assert!(arena.map.is_empty());
    }
}
