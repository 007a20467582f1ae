//! Persisted board-definition layouts.
//!
//! Two interchange forms for the downstream bus/crossbar generator:
//! a Verilog header in the classic `brddefs.h` shape, and a structured
//! TOML record. Both keep role names verbatim, indices decimal, and the
//! table in declaration order; both re-parse through the same validation
//! as a hand-written table, so a persisted file can never smuggle an
//! inconsistent definition back in.

use serde::{Deserialize, Serialize};

use crate::board::BoardDefinition;
use crate::error::{ExportError, ValidationError};
use crate::role::Role;

/// Structured interchange record for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub board: String,
    pub mx_io: u32,
    pub num_core: u32,
    pub mx_pcpin: u32,
    pub pins: Vec<PinRecord>,
}

/// One (role, slot) binding, role name verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRecord {
    pub role: String,
    pub index: u32,
}

/// Snapshot a definition into its interchange record.
pub fn to_record(def: &BoardDefinition) -> BoardRecord {
    BoardRecord {
        board: def.board_id().to_string(),
        mx_io: def.highest_io_slot(),
        num_core: def.peripheral_capacity(),
        mx_pcpin: def.connector_pin_budget(),
        pins: def
            .pins()
            .map(|(role, index)| PinRecord {
                role: role.as_str().to_string(),
                index,
            })
            .collect(),
    }
}

/// Rebuild a definition from a record, re-running full validation.
///
/// The record's stored `mx_io` must agree with the slot maximum of its
/// own pin table; a mismatch means the record drifted.
pub fn from_record(rec: &BoardRecord) -> Result<BoardDefinition, ExportError> {
    let mut pins = Vec::with_capacity(rec.pins.len());
    for pin in &rec.pins {
        let role = Role::parse(&pin.role)
            .ok_or_else(|| ExportError::UnknownRoleName(pin.role.clone()))?;
        pins.push((role, pin.index));
    }
    let def = BoardDefinition::new(&rec.board, &pins, rec.num_core, rec.mx_pcpin)?;
    if rec.mx_io != def.highest_io_slot() {
        return Err(ValidationError::IoAliasMismatch {
            stored: rec.mx_io,
            computed: def.highest_io_slot(),
        }
        .into());
    }
    Ok(def)
}

/// Serialize a definition to its TOML record.
pub fn to_toml(def: &BoardDefinition) -> Result<String, ExportError> {
    Ok(toml::to_string_pretty(&to_record(def))?)
}

/// Parse a TOML record back into a validated definition.
pub fn from_toml(text: &str) -> Result<BoardDefinition, ExportError> {
    let rec: BoardRecord = toml::from_str(text)?;
    from_record(&rec)
}

/// Render a definition as a `brddefs.h`-style Verilog header.
///
/// Line shape matches the hand-written board headers: one `BRD_*`
/// define per role in declaration order, the `BRD_MX_IO` alias naming
/// the last assigned role, then the two capacity constants.
pub fn to_verilog_header(def: &BoardDefinition) -> String {
    let mut out = String::new();
    out.push_str(
        "/////////////////////////////////////////////////////////////////////////\n",
    );
    out.push_str("//  File: brddefs.h     FPGA board specific pin definitions\n");
    out.push_str(&format!("//  Board: {}\n", def.board_id()));
    out.push_str(
        "/////////////////////////////////////////////////////////////////////////\n\n",
    );

    let mx_io = def.highest_io_slot();
    let mut last_role = None;
    for (role, index) in def.pins() {
        out.push_str(&format!("`define BRD_{:<15}{}\n", role.as_str(), index));
        if index == mx_io {
            last_role = Some(role);
        }
    }
    if let Some(role) = last_role {
        out.push_str(&format!("`define BRD_{:<15}(`BRD_{})\n", "MX_IO", role.as_str()));
    }

    out.push('\n');
    out.push_str(&format!(
        "`define NUM_CORE       {:<4}// can address up to NUM_CORE peripherals\n",
        def.peripheral_capacity()
    ));
    out.push_str(&format!("`define MX_PCPIN       {}\n", def.connector_pin_budget()));
    out
}

/// Parse a `brddefs.h`-style header back into a validated definition.
///
/// The header carries no board id, so the caller supplies one.
/// Comment-only lines and the license block are skipped; a `BRD_MX_IO`
/// alias (either a decimal or a `(`BRD_*)` reference) is checked
/// against the parsed table.
pub fn from_verilog_header(board_id: &str, text: &str) -> Result<BoardDefinition, ExportError> {
    let mut pins: Vec<(Role, u32)> = Vec::new();
    let mut mx_io: Option<u32> = None;
    let mut num_core: Option<u32> = None;
    let mut mx_pcpin: Option<u32> = None;

    for raw in text.lines() {
        let line = raw.trim();
        let Some(rest) = line.strip_prefix("`define") else {
            continue;
        };
        // Drop any trailing comment.
        let rest = rest.split("//").next().unwrap_or("").trim();
        let mut fields = rest.split_whitespace();
        let (Some(name), Some(value)) = (fields.next(), fields.next()) else {
            return Err(ExportError::MalformedLine(line.to_string()));
        };

        match name {
            "NUM_CORE" => num_core = Some(parse_index(line, value)?),
            "MX_PCPIN" => mx_pcpin = Some(parse_index(line, value)?),
            "BRD_MX_IO" => mx_io = Some(resolve_alias(line, value, &pins)?),
            _ => {
                let role_name = name
                    .strip_prefix("BRD_")
                    .ok_or_else(|| ExportError::MalformedLine(line.to_string()))?;
                let role = Role::parse(role_name)
                    .ok_or_else(|| ExportError::UnknownRoleName(role_name.to_string()))?;
                pins.push((role, parse_index(line, value)?));
            }
        }
    }

    let num_core =
        num_core.ok_or_else(|| ExportError::MalformedLine("missing NUM_CORE".to_string()))?;
    let mx_pcpin =
        mx_pcpin.ok_or_else(|| ExportError::MalformedLine("missing MX_PCPIN".to_string()))?;

    let def = BoardDefinition::new(board_id, &pins, num_core, mx_pcpin)?;
    if let Some(stored) = mx_io {
        if stored != def.highest_io_slot() {
            return Err(ValidationError::IoAliasMismatch {
                stored,
                computed: def.highest_io_slot(),
            }
            .into());
        }
    }
    Ok(def)
}

fn parse_index(line: &str, value: &str) -> Result<u32, ExportError> {
    value
        .parse::<u32>()
        .map_err(|_| ExportError::MalformedLine(line.to_string()))
}

/// Resolve a `BRD_MX_IO` value: either a decimal slot or a reference
/// like `` (`BRD_USBA_N) `` to an already-parsed role.
fn resolve_alias(line: &str, value: &str, pins: &[(Role, u32)]) -> Result<u32, ExportError> {
    if let Some(name) = value
        .strip_prefix("(`BRD_")
        .and_then(|v| v.strip_suffix(')'))
    {
        let role =
            Role::parse(name).ok_or_else(|| ExportError::UnknownRoleName(name.to_string()))?;
        pins.iter()
            .find(|&&(r, _)| r == role)
            .map(|&(_, index)| index)
            .ok_or_else(|| ExportError::MalformedLine(line.to_string()))
    } else {
        parse_index(line, value)
    }
}
