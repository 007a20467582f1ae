//! Board definition registry for the FPGA peripheral bus toolchain.
//!
//! Each supported board contributes a pin table binding logical signal
//! roles (clock, serial lines, buttons, LEDs, USB pair) to sequential
//! pin slots, plus two bus-capacity constants: `NUM_CORE`, the number
//! of addressable peripheral cores, and `MX_PCPIN`, the connector pins
//! routed through the board's multiplexer. The highest assigned slot
//! (`MX_IO`) marks the generic-I/O boundary for peripheral muxing.
//!
//! Tables are validated when built and immutable afterwards; the
//! downstream bus/crossbar generator consumes them through the registry
//! or through the exported header/TOML layouts in [`export`].
//!
//! ```
//! use brddefs::{BoardRegistry, Role};
//!
//! let registry = BoardRegistry::builtin().unwrap();
//! let board = registry.get("tang25k").unwrap();
//! assert_eq!(board.lookup(Role::Clock), Ok(0));
//! assert_eq!(board.highest_io_slot(), 10);
//! ```

pub mod board;
pub mod boards;
pub mod error;
pub mod export;
pub mod registry;
pub mod role;

pub use board::BoardDefinition;
pub use error::{ExportError, QueryError, RegistryError, ValidationError};
pub use registry::BoardRegistry;
pub use role::Role;
