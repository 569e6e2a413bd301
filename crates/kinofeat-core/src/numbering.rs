//! KLIFS pocket numbering.
//!
//! KLIFS aligns every kinase onto the same 85 binding-pocket positions. A
//! [`Numbering`] maps each position to the residue sequence number it occupies in
//! one particular structure, or to a gap when the position is unresolved there.
use crate::error::{KinofeatError, Result};
use serde::Serialize;

/// Number of KLIFS binding-pocket positions.
pub const POCKET_SIZE: usize = 85;

/// Gap marker used at the external boundary.
pub const GAP: i32 = 0;

/// Gap marker used by the KLIFS web service.
pub const KLIFS_GAP: i32 = -1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Numbering {
    residues: Vec<i32>,
}

impl Numbering {
    /// Numbering from 85 residue numbers with `0` marking gaps.
    pub fn new(residues: Vec<i32>) -> Result<Self> {
        if residues.len() != POCKET_SIZE {
            return Err(KinofeatError::input_shape(format!(
                "pocket numbering must have {} entries, found {}",
                POCKET_SIZE,
                residues.len()
            )));
        }
        Ok(Numbering { residues })
    }

    /// Numbering as returned by KLIFS, where gaps are `-1`.
    pub fn from_klifs(mut residues: Vec<i32>) -> Result<Self> {
        for (position, residue) in residues.iter_mut().enumerate() {
            if *residue == KLIFS_GAP {
                log::warn!(
                    "gap at pocket position {}; it will not be used for any feature",
                    position + 1
                );
                *residue = GAP;
            }
        }
        Numbering::new(residues)
    }

    /// Residue number at a pocket position, `None` for a gap.
    pub fn get(&self, position: usize) -> Option<i32> {
        self.residues
            .get(position)
            .copied()
            .filter(|&residue| residue != GAP)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<i32>> + '_ {
        (0..POCKET_SIZE).map(|position| self.get(position))
    }

    /// Pocket positions without a residue.
    pub fn gaps(&self) -> impl Iterator<Item = usize> + '_ {
        self.residues
            .iter()
            .enumerate()
            .filter(|(_, &residue)| residue == GAP)
            .map(|(position, _)| position)
    }

    /// Pocket position of a residue number.
    pub fn position_of(&self, residue: i32) -> Option<usize> {
        if residue == GAP {
            return None;
        }
        self.residues.iter().position(|&r| r == residue)
    }

    /// Raw values, gaps as `0`.
    pub fn as_slice(&self) -> &[i32] {
        &self.residues
    }
}

impl TryFrom<Vec<i32>> for Numbering {
    type Error = KinofeatError;

    fn try_from(residues: Vec<i32>) -> Result<Self> {
        Numbering::new(residues)
    }
}

impl TryFrom<&[i32]> for Numbering {
    type Error = KinofeatError;

    fn try_from(residues: &[i32]) -> Result<Self> {
        Numbering::new(residues.to_vec())
    }
}
