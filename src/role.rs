//! Logical signal roles.
//!
//! A role names a signal function (clock, button, LED, serial line)
//! independent of the physical pin it lands on. Each board binds the
//! subset of roles it actually wires up; the same role may sit on a
//! different pin slot on every board.

use core::fmt;

/// Logical signal function, independent of physical pin.
///
/// Names follow the `BRD_*` defines in the generated board headers,
/// without the prefix. New boards extend this set as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Board clock input.
    Clock,
    /// Host serial transmit.
    Tx,
    /// Host serial receive.
    Rx,
    /// Auxiliary serial receive.
    AuxRx,
    /// Auxiliary serial transmit.
    AuxTx,
    /// User button 0.
    Btn0,
    /// User button 1.
    Btn1,
    /// User key 1.
    Key1,
    /// User key 2.
    Key2,
    /// Blue channel of the RGB status LED.
    BluLed,
    /// Green channel of the RGB status LED.
    GrnLed,
    /// Red channel of the RGB status LED.
    RedLed,
    /// User LED bank, LED 0.
    Led0,
    /// User LED bank, LED 1.
    Led1,
    /// User LED bank, LED 2.
    Led2,
    /// User LED bank, LED 3.
    Led3,
    /// Serial receive activity LED.
    RxLed,
    /// Serial transmit activity LED.
    TxLed,
    /// USB-A differential pair, positive line.
    UsbaP,
    /// USB-A differential pair, negative line.
    UsbaN,
}

impl Role {
    /// Canonical name as it appears in board headers (sans `BRD_`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Clock => "CLOCK",
            Role::Tx => "TX",
            Role::Rx => "RX",
            Role::AuxRx => "AUX_RX",
            Role::AuxTx => "AUX_TX",
            Role::Btn0 => "BTN_0",
            Role::Btn1 => "BTN_1",
            Role::Key1 => "KEY1",
            Role::Key2 => "KEY2",
            Role::BluLed => "BLU_LED",
            Role::GrnLed => "GRN_LED",
            Role::RedLed => "RED_LED",
            Role::Led0 => "LED_0",
            Role::Led1 => "LED_1",
            Role::Led2 => "LED_2",
            Role::Led3 => "LED_3",
            Role::RxLed => "RXLED",
            Role::TxLed => "TXLED",
            Role::UsbaP => "USBA_P",
            Role::UsbaN => "USBA_N",
        }
    }

    /// Parse a canonical role name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Role> {
        let role = match name {
            "CLOCK" => Role::Clock,
            "TX" => Role::Tx,
            "RX" => Role::Rx,
            "AUX_RX" => Role::AuxRx,
            "AUX_TX" => Role::AuxTx,
            "BTN_0" => Role::Btn0,
            "BTN_1" => Role::Btn1,
            "KEY1" => Role::Key1,
            "KEY2" => Role::Key2,
            "BLU_LED" => Role::BluLed,
            "GRN_LED" => Role::GrnLed,
            "RED_LED" => Role::RedLed,
            "LED_0" => Role::Led0,
            "LED_1" => Role::Led1,
            "LED_2" => Role::Led2,
            "LED_3" => Role::Led3,
            "RXLED" => Role::RxLed,
            "TXLED" => Role::TxLed,
            "USBA_P" => Role::UsbaP,
            "USBA_N" => Role::UsbaN,
            _ => return None,
        };
        Some(role)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        let roles = [
            Role::Clock,
            Role::AuxRx,
            Role::Btn0,
            Role::Led3,
            Role::UsbaN,
        ];
        for role in roles {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Role::parse("BRD_CLOCK"), None);
        assert_eq!(Role::parse("clock"), None);
        assert_eq!(Role::parse(""), None);
    }
}
