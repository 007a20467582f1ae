//! Shipped board definitions.
//!
//! One module per supported FPGA board. Each module builds the board's
//! complete pin table plus its bus-capacity constants; the tables here
//! are the source of truth the generated board headers are derived from.

pub mod cmods7;
pub mod tang25k;
