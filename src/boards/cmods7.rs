//! Digilent Cmod S7 board definition.

use crate::board::BoardDefinition;
use crate::error::ValidationError;
use crate::role::Role;

pub const BOARD_ID: &str = "cmods7";

/// Maximum number of addressable peripheral cores on the bus.
pub const NUM_CORE: u32 = 11;

/// Physical connector pins routed through the mux. Slot 10 has only
/// two pins.
pub const MX_PCPIN: u32 = 37;

/// Pin-slot assignments. Sequential; the four user LEDs fill slots
/// 8 through 11, so LED_3 marks the generic-I/O boundary.
const PINS: &[(Role, u32)] = &[
    (Role::Clock, 0),
    (Role::Tx, 1),
    (Role::Rx, 2),
    (Role::Btn0, 3),
    (Role::Btn1, 4),
    (Role::BluLed, 5),
    (Role::GrnLed, 6),
    (Role::RedLed, 7),
    (Role::Led0, 8),
    (Role::Led1, 9),
    (Role::Led2, 10),
    (Role::Led3, 11),
];

/// Build the Cmod S7 definition.
pub fn definition() -> Result<BoardDefinition, ValidationError> {
    BoardDefinition::new(BOARD_ID, PINS, NUM_CORE, MX_PCPIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmods7_table() {
        let def = definition().unwrap();
        assert_eq!(def.board_id(), "cmods7");
        assert_eq!(def.lookup(Role::Clock), Ok(0));
        assert_eq!(def.lookup(Role::Btn1), Ok(4));
        assert_eq!(def.lookup(Role::RedLed), Ok(7));
        assert_eq!(def.lookup(Role::Led3), Ok(11));
        assert_eq!(def.highest_io_slot(), 11);
        assert_eq!(def.peripheral_capacity(), 11);
        assert_eq!(def.connector_pin_budget(), 37);
    }
}
