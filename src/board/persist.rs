//! Persisted form of a position.
//!
//! A mapping from vertex name to checker for occupied vertices only, plus
//! the side to move:
//!
//! ```json
//! {"checkers":{"C1":{"color":"WHITE","isUpgraded":false}},"currentTurn":"WHITE"}
//! ```
//!
//! Keys are written in canonical vertex order, so equal positions always
//! serialize to identical text.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::{Checker, Color, Position, Vertex};
use crate::error::TaratiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPosition {
    pub checkers: BTreeMap<Vertex, Checker>,
    pub current_turn: Color,
}

impl From<Position> for PersistedPosition {
    fn from(pos: Position) -> Self {
        Self {
            checkers: pos.checkers().collect(),
            current_turn: pos.side_to_move(),
        }
    }
}

impl From<PersistedPosition> for Position {
    fn from(p: PersistedPosition) -> Self {
        let mut pos = Position::empty(p.current_turn);
        for (v, c) in p.checkers {
            pos.place(v, c);
        }
        pos
    }
}

impl Position {
    /// Serialize to the persisted JSON form
    pub fn to_json(&self) -> Result<String, TaratiError> {
        Ok(serde_json::to_string(&PersistedPosition::from(*self))?)
    }

    /// Parse the persisted JSON form
    pub fn from_json(s: &str) -> Result<Self, TaratiError> {
        let persisted: PersistedPosition = serde_json::from_str(s)?;
        Ok(persisted.into())
    }

    pub fn read_json<R: Read>(reader: R) -> Result<Self, TaratiError> {
        let persisted: PersistedPosition = serde_json::from_reader(reader)?;
        Ok(persisted.into())
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), TaratiError> {
        serde_json::to_writer_pretty(&mut writer, &PersistedPosition::from(*self))?;
        writeln!(writer)?;
        Ok(())
    }
}
