//! Error types for kinofeat.
//!
//! Only input misuse and unusable input are errors. Missing atoms inside a
//! resolved chain are not: the featurizers drop the affected groups and report
//! them as diagnostics instead.

use thiserror::Error;

/// Unified error type for topology resolution and featurization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinofeatError {
    /// Numbering of the wrong length, or a chain selector that cannot be parsed.
    #[error("Input shape error: {0}")]
    InputShape(String),

    /// The chain selector is well formed but names no chain of the topology.
    #[error("Chain '{selector}' does not resolve to any chain in the topology")]
    UnknownChain { selector: String },

    /// A resolved pocket position points at a residue without an alpha carbon.
    #[error("Pocket position {position} references residue {residue}, which has no CA atom in the chain")]
    PocketMismatch { position: usize, residue: i32 },

    /// The ligand identifier matches no heavy atom in the ligand chain.
    #[error("Ligand '{ligand}' matches no heavy atoms in the ligand chain")]
    UnresolvableLigand { ligand: String },

    /// Every ligand-pocket pair was excluded, so no mean distance exists.
    #[error("No ligand-pocket pair has both atoms resolved")]
    NoResolvedPocketAtoms,

    /// Coordinates and topology disagree on the number of atoms.
    #[error("Frame mismatch: expected {expected} atoms per frame, found {found}")]
    FrameMismatch { expected: usize, found: usize },

    /// The structure file could not be read.
    #[error("Structure error: {0}")]
    Structure(String),
}

impl KinofeatError {
    /// Creates an input shape error.
    pub fn input_shape(message: impl Into<String>) -> Self {
        KinofeatError::InputShape(message.into())
    }

    /// Creates an unknown chain error.
    pub fn unknown_chain(selector: impl ToString) -> Self {
        KinofeatError::UnknownChain {
            selector: selector.to_string(),
        }
    }

    /// True for errors caused by the caller's input rather than by the structure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            KinofeatError::InputShape(_) | KinofeatError::UnknownChain { .. }
        )
    }

    /// Creates an unresolvable ligand error.
    pub fn unresolvable_ligand(ligand: impl Into<String>) -> Self {
        KinofeatError::UnresolvableLigand {
            ligand: ligand.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KinofeatError>;
