//! Board definition - one board's pin/role mapping and bus capacity.
//!
//! A `BoardDefinition` is built once from a literal (role, index) table
//! plus the two bus-capacity scalars and validated on the spot. Invalid
//! tables never leave the constructor, so every definition a consumer
//! can observe satisfies the slot-assignment invariants.

use crate::error::{QueryError, ValidationError};
use crate::role::Role;

/// One board's complete pin/role mapping and capacity constants.
///
/// Pin slots are assigned sequentially: the indices of a board's roles
/// form exactly the range `0..count`. The highest assigned slot marks
/// the generic-I/O boundary (`MX_IO`); slots above it are free for
/// peripheral multiplexing, up to the connector pin budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDefinition {
    board_id: String,
    pin_map: Vec<(Role, u32)>,
    num_core: u32,
    mx_pcpin: u32,
}

impl BoardDefinition {
    /// Build and validate a definition from a literal pin table.
    ///
    /// `num_core` is the maximum number of addressable peripheral cores
    /// on the board's bus; `mx_pcpin` the total connector pins routed
    /// through the multiplexer. The table's declaration order is kept
    /// for export.
    pub fn new(
        board_id: &str,
        pins: &[(Role, u32)],
        num_core: u32,
        mx_pcpin: u32,
    ) -> Result<Self, ValidationError> {
        let def = BoardDefinition {
            board_id: board_id.to_string(),
            pin_map: pins.to_vec(),
            num_core,
            mx_pcpin,
        };
        def.validate()?;
        Ok(def)
    }

    /// Check the slot-assignment invariants, first violation wins.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.pin_map.is_empty() {
            return Err(ValidationError::EmptyPinMap);
        }

        // No role listed twice, no two roles sharing a slot. The tables
        // are small enough that the quadratic scan is fine.
        for (i, &(role, index)) in self.pin_map.iter().enumerate() {
            for &(other, other_index) in &self.pin_map[i + 1..] {
                if role == other {
                    return Err(ValidationError::DuplicateRole { role });
                }
                if index == other_index {
                    return Err(ValidationError::DuplicateIndex {
                        index,
                        first: role,
                        second: other,
                    });
                }
            }
        }

        // Unique indices all below the count means the range is dense.
        let count = self.pin_map.len() as u32;
        for &(_, index) in &self.pin_map {
            if index >= count {
                return Err(ValidationError::NonContiguousRange { index, count });
            }
        }

        let mx_io = self.highest_io_slot();
        if self.mx_pcpin <= mx_io {
            return Err(ValidationError::PinBudgetTooSmall {
                mx_pcpin: self.mx_pcpin,
                mx_io,
            });
        }
        if self.num_core < 1 {
            return Err(ValidationError::NonPositiveCoreCount);
        }

        Ok(())
    }

    /// Board identifier, unique within a registry.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Pin slot bound to `role` on this board.
    pub fn lookup(&self, role: Role) -> Result<u32, QueryError> {
        self.pin_map
            .iter()
            .find(|&&(r, _)| r == role)
            .map(|&(_, index)| index)
            .ok_or_else(|| QueryError::UnknownRole {
                board_id: self.board_id.clone(),
                role,
            })
    }

    /// Highest assigned pin slot (`MX_IO`), the generic-I/O boundary.
    ///
    /// Computed from the table rather than stored, so it cannot drift.
    pub fn highest_io_slot(&self) -> u32 {
        // Non-empty is checked at construction.
        self.pin_map.iter().map(|&(_, index)| index).max().unwrap_or(0)
    }

    /// Maximum number of addressable peripheral cores (`NUM_CORE`).
    pub fn peripheral_capacity(&self) -> u32 {
        self.num_core
    }

    /// Total connector pins routable through the mux (`MX_PCPIN`).
    pub fn connector_pin_budget(&self) -> u32 {
        self.mx_pcpin
    }

    /// (role, slot) pairs in declaration order.
    pub fn pins(&self) -> impl Iterator<Item = (Role, u32)> + '_ {
        self.pin_map.iter().copied()
    }

    /// Number of roles this board defines.
    pub fn len(&self) -> usize {
        self.pin_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pin_map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board(pins: &[(Role, u32)]) -> Result<BoardDefinition, ValidationError> {
        BoardDefinition::new("testbrd", pins, 4, 16)
    }

    #[test]
    fn test_dense_table_is_accepted() {
        let def = small_board(&[(Role::Clock, 0), (Role::Tx, 1), (Role::Rx, 2)]).unwrap();
        assert_eq!(def.lookup(Role::Tx), Ok(1));
        assert_eq!(def.highest_io_slot(), 2);
        assert_eq!(def.peripheral_capacity(), 4);
        assert_eq!(def.connector_pin_budget(), 16);
    }

    #[test]
    fn test_duplicate_index_is_rejected() {
        let err = small_board(&[(Role::Clock, 0), (Role::Tx, 1), (Role::Rx, 1)]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateIndex {
                index: 1,
                first: Role::Tx,
                second: Role::Rx,
            }
        );
    }

    #[test]
    fn test_duplicate_role_is_rejected() {
        let err = small_board(&[(Role::Clock, 0), (Role::Clock, 1)]).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateRole { role: Role::Clock });
    }

    #[test]
    fn test_gap_in_range_is_rejected() {
        // Slot 1 is skipped, so slot 2 falls outside 0..2.
        let err = small_board(&[(Role::Clock, 0), (Role::Rx, 2)]).unwrap_err();
        assert_eq!(err, ValidationError::NonContiguousRange { index: 2, count: 2 });
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let err = small_board(&[]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyPinMap);
    }

    #[test]
    fn test_pin_budget_must_exceed_boundary() {
        let err = BoardDefinition::new("testbrd", &[(Role::Clock, 0), (Role::Tx, 1)], 4, 1)
            .unwrap_err();
        assert_eq!(err, ValidationError::PinBudgetTooSmall { mx_pcpin: 1, mx_io: 1 });
    }

    #[test]
    fn test_core_count_must_be_positive() {
        let err = BoardDefinition::new("testbrd", &[(Role::Clock, 0)], 0, 16).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveCoreCount);
    }

    #[test]
    fn test_lookup_unknown_role() {
        let def = small_board(&[(Role::Clock, 0), (Role::Tx, 1)]).unwrap();
        let err = def.lookup(Role::UsbaP).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownRole {
                board_id: "testbrd".to_string(),
                role: Role::UsbaP,
            }
        );
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let def = small_board(&[(Role::Rx, 2), (Role::Clock, 0), (Role::Tx, 1)]).unwrap();
        let order: Vec<Role> = def.pins().map(|(r, _)| r).collect();
        assert_eq!(order, vec![Role::Rx, Role::Clock, Role::Tx]);
    }
}
