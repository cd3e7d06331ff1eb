//! Key/value pairs and the vectors built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalogue::{key_name, value_name};

/// One graph selector: a catalogue key and the value chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue {
    /// Catalogue key.
    pub key: u32,
    /// Selected value.
    pub value: u32,
}

impl KeyValue {
    /// Pair `key` with `value`.
    pub const fn new(key: u32, value: u32) -> Self {
        Self { key, value }
    }
}

impl From<(u32, u32)> for KeyValue {
    fn from((key, value): (u32, u32)) -> Self {
        Self { key, value }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match key_name(self.key) {
            Some(name) => write!(f, "{name}")?,
            None => write!(f, "{:#010x}", self.key)?,
        }
        f.write_str("=")?;
        match value_name(self.value) {
            Some(name) => write!(f, "{name}"),
            None if self.value > 0xFFFF_FF => write!(f, "{:#010x}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Ordered key/value pairs handed to the graph manager.
pub type KeyVector = Vec<KeyValue>;

/// Key vectors of the playback and capture halves of a two-sided graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyVectorPair {
    /// Playback half.
    pub rx: KeyVector,
    /// Capture half.
    pub tx: KeyVector,
}
