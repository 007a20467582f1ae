//! Sipeed Tang Nano 25K board definition.

use crate::board::BoardDefinition;
use crate::error::ValidationError;
use crate::role::Role;

pub const BOARD_ID: &str = "tang25k";

/// Maximum number of addressable peripheral cores on the bus.
pub const NUM_CORE: u32 = 15;

/// Physical connector pins routed through the mux.
pub const MX_PCPIN: u32 = 60;

/// Pin-slot assignments. The USB-A differential pair sits at the top
/// of the range, so USBA_N marks the generic-I/O boundary.
const PINS: &[(Role, u32)] = &[
    (Role::Clock, 0),
    (Role::Rx, 1),
    (Role::AuxRx, 2),
    (Role::Tx, 3),
    (Role::AuxTx, 4),
    (Role::RxLed, 5),
    (Role::TxLed, 6),
    (Role::Key1, 7),
    (Role::Key2, 8),
    (Role::UsbaP, 9),
    (Role::UsbaN, 10),
];

/// Build the Tang Nano 25K definition.
pub fn definition() -> Result<BoardDefinition, ValidationError> {
    BoardDefinition::new(BOARD_ID, PINS, NUM_CORE, MX_PCPIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tang25k_table() {
        let def = definition().unwrap();
        assert_eq!(def.board_id(), "tang25k");
        assert_eq!(def.lookup(Role::Clock), Ok(0));
        assert_eq!(def.lookup(Role::AuxTx), Ok(4));
        assert_eq!(def.lookup(Role::Key2), Ok(8));
        assert_eq!(def.lookup(Role::UsbaN), Ok(10));
        assert_eq!(def.highest_io_slot(), 10);
        assert_eq!(def.peripheral_capacity(), 15);
        assert_eq!(def.connector_pin_budget(), 60);
    }
}
