//! Knobs for the differ.
//!
//! Options deserialize from any serde format; missing fields take their
//! defaults, so an empty table is a valid configuration.

use serde::{Deserialize, Serialize};

/// How a value whose kind changes into an object or array is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeChange {
    /// One `replace` carrying the whole new value.
    #[default]
    Replace,
    /// `remove`, then `add` of an empty container of the new kind, then one
    /// `add` per member, recursively. The document root always uses
    /// [`TypeChange::Replace`], since RFC 6902 cannot remove the root.
    Granular,
}

/// Options for [`diff_with_options`](super::diff_with_options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub type_change: TypeChange,
    /// When an unmatched original element and an unmatched new element share
    /// an array index, diff them in place instead of emitting `remove` plus
    /// `add`.
    pub recurse_slots: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            type_change: TypeChange::Replace,
            recurse_slots: true,
        }
    }
}
