//! Error types for board definitions and the registry.
//!
//! Construction-time failures (`ValidationError`, `RegistryError`) are
//! fatal to the offending board: a table that fails validation is never
//! exposed to consumers. Query-time failures (`QueryError`) are ordinary
//! recoverable results the caller is expected to handle.

use crate::role::Role;

/// A board table violated one of the construction-time invariants.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("role {role} appears more than once in the pin table")]
    DuplicateRole { role: Role },
    #[error("roles {first} and {second} share pin slot {index}")]
    DuplicateIndex { index: u32, first: Role, second: Role },
    #[error("pin slot {index} is outside the dense range 0..{count}")]
    NonContiguousRange { index: u32, count: u32 },
    #[error("pin table is empty")]
    EmptyPinMap,
    #[error("MX_IO is {stored} but the highest assigned slot is {computed}")]
    IoAliasMismatch { stored: u32, computed: u32 },
    #[error("MX_PCPIN is {mx_pcpin} but the highest assigned slot is {mx_io}")]
    PinBudgetTooSmall { mx_pcpin: u32, mx_io: u32 },
    #[error("NUM_CORE must be at least 1")]
    NonPositiveCoreCount,
}

/// Registration failed; the registry is left unchanged.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("board id '{0}' is already registered")]
    DuplicateBoardId(String),
    #[error("invalid board definition: {0}")]
    Invalid(#[from] ValidationError),
}

/// A lookup against a valid registry or board came up empty.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("role {role} is not defined on board '{board_id}'")]
    UnknownRole { board_id: String, role: Role },
    #[error("unknown board '{board_id}' (known boards: {})", .known.join(", "))]
    BoardNotFound { board_id: String, known: Vec<String> },
}

/// Serializing or re-parsing a persisted board record failed.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("unknown role name '{0}'")]
    UnknownRoleName(String),
    #[error("malformed definition line: {0}")]
    MalformedLine(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("toml serialize: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("toml parse: {0}")]
    Parse(#[from] toml::de::Error),
}
