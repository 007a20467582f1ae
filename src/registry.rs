//! Board registry - registration and lookup of board definitions.
//!
//! The registry is filled once during startup and read-only afterwards;
//! registration must finish before the registry is shared. Callers hold
//! it by reference rather than through a process-wide global, so tests
//! and tools can assemble their own.

use log::debug;

use crate::board::BoardDefinition;
use crate::boards;
use crate::error::{QueryError, RegistryError};

/// Collection of all known board definitions, keyed by board id.
///
/// Registration order is preserved for deterministic enumeration; it
/// carries no other meaning.
#[derive(Debug, Default)]
pub struct BoardRegistry {
    boards: Vec<BoardDefinition>,
}

impl BoardRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every shipped board.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(boards::cmods7::definition()?)?;
        registry.register(boards::tang25k::definition()?)?;
        Ok(registry)
    }

    /// Add a validated definition. Fails if the id is already taken,
    /// leaving the existing entry untouched.
    pub fn register(&mut self, def: BoardDefinition) -> Result<(), RegistryError> {
        if self.get(def.board_id()).is_some() {
            return Err(RegistryError::DuplicateBoardId(def.board_id().to_string()));
        }
        debug!(
            "registered board '{}' ({} roles, {} cores, {} pins)",
            def.board_id(),
            def.len(),
            def.peripheral_capacity(),
            def.connector_pin_budget()
        );
        self.boards.push(def);
        Ok(())
    }

    /// Look up a board by id. Absence is a normal outcome.
    pub fn get(&self, board_id: &str) -> Option<&BoardDefinition> {
        self.boards.iter().find(|def| def.board_id() == board_id)
    }

    /// Like `get`, but an unknown id becomes a `BoardNotFound` carrying
    /// the list of valid ids for the user-facing message.
    pub fn find(&self, board_id: &str) -> Result<&BoardDefinition, QueryError> {
        self.get(board_id).ok_or_else(|| QueryError::BoardNotFound {
            board_id: board_id.to_string(),
            known: self.list_ids().map(str::to_string).collect(),
        })
    }

    /// Board ids in registration order.
    pub fn list_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.boards.iter().map(|def| def.board_id())
    }

    /// All definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BoardDefinition> + '_ {
        self.boards.iter()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn test_builtin_boards_in_order() {
        let registry = BoardRegistry::builtin().unwrap();
        let ids: Vec<&str> = registry.list_ids().collect();
        assert_eq!(ids, vec!["cmods7", "tang25k"]);
    }

    #[test]
    fn test_every_builtin_board_is_dense() {
        let registry = BoardRegistry::builtin().unwrap();
        for def in registry.iter() {
            let mut indices: Vec<u32> = def.pins().map(|(_, i)| i).collect();
            indices.sort_unstable();
            let expected: Vec<u32> = (0..def.len() as u32).collect();
            assert_eq!(indices, expected, "board {}", def.board_id());
            assert_eq!(def.highest_io_slot(), def.len() as u32 - 1);
            assert!(def.connector_pin_budget() > def.highest_io_slot());
            assert!(def.peripheral_capacity() >= 1);
        }
    }

    #[test]
    fn test_duplicate_id_leaves_first_entry() {
        let mut registry = BoardRegistry::new();
        let first =
            BoardDefinition::new("brd", &[(Role::Clock, 0), (Role::Tx, 1)], 4, 16).unwrap();
        let second = BoardDefinition::new("brd", &[(Role::Clock, 0)], 2, 8).unwrap();
        registry.register(first).unwrap();
        let err = registry.register(second).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateBoardId("brd".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("brd").unwrap().len(), 2);
    }

    #[test]
    fn test_get_missing_board_is_none() {
        let registry = BoardRegistry::builtin().unwrap();
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_find_missing_board_lists_known_ids() {
        let registry = BoardRegistry::builtin().unwrap();
        let err = registry.find("nonexistent").unwrap_err();
        assert_eq!(
            err,
            QueryError::BoardNotFound {
                board_id: "nonexistent".to_string(),
                known: vec!["cmods7".to_string(), "tang25k".to_string()],
            }
        );
    }
}
