//! KLIFS key residues.
//!
//! Twelve residues summarise the conformation of a kinase pocket. Ten are read
//! straight from the 85-position pocket numbering. The last two are FRET reference
//! residues outside the pocket (Aurora-A Ser284 and Leu225 equivalents), placed
//! at a fixed sequence offset from the β3 lysine.
use kinofeat_core::{Numbering, GAP};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Pocket position that anchors the FRET reference residues.
pub const FRET_ANCHOR: usize = 16;
/// Sequence offset of the Ser284-equivalent FRET residue from the anchor.
pub const FRET_SER_OFFSET: i32 = 120;
/// Sequence offset of the Leu225-equivalent FRET residue from the anchor.
pub const FRET_LEU_OFFSET: i32 = 61;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KeyResidue {
    AlphaCStart,
    AlphaCEnd,
    AlphaEStart,
    AlphaEEnd,
    Beta3Lys,
    AlphaCGlu,
    AlphaCTurn,
    DfgPhe,
    PreDfg,
    DfgAsp,
    FretSer,
    FretLeu,
}

/// Where a key residue's sequence number comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResidueSource {
    /// Read from a pocket position.
    Pocket(usize),
    /// A fixed offset from the residue at a pocket position.
    Offset { anchor: usize, offset: i32 },
}

/// Key residues in output order.
pub const KEY_RESIDUE_POSITIONS: [(KeyResidue, ResidueSource); 12] = [
    (KeyResidue::AlphaCStart, ResidueSource::Pocket(20)),
    (KeyResidue::AlphaCEnd, ResidueSource::Pocket(28)),
    (KeyResidue::AlphaEStart, ResidueSource::Pocket(60)),
    (KeyResidue::AlphaEEnd, ResidueSource::Pocket(62)),
    (KeyResidue::Beta3Lys, ResidueSource::Pocket(16)),
    (KeyResidue::AlphaCGlu, ResidueSource::Pocket(23)),
    (KeyResidue::AlphaCTurn, ResidueSource::Pocket(27)),
    (KeyResidue::DfgPhe, ResidueSource::Pocket(81)),
    (KeyResidue::PreDfg, ResidueSource::Pocket(79)),
    (KeyResidue::DfgAsp, ResidueSource::Pocket(80)),
    (
        KeyResidue::FretSer,
        ResidueSource::Offset {
            anchor: FRET_ANCHOR,
            offset: FRET_SER_OFFSET,
        },
    ),
    (
        KeyResidue::FretLeu,
        ResidueSource::Offset {
            anchor: FRET_ANCHOR,
            offset: FRET_LEU_OFFSET,
        },
    ),
];

impl KeyResidue {
    pub fn source(&self) -> ResidueSource {
        KEY_RESIDUE_POSITIONS[*self as usize].1
    }
}

impl ResidueSource {
    /// Residue number in `numbering`; a gap anchor propagates as `None`.
    pub fn residue(&self, numbering: &Numbering) -> Option<i32> {
        match *self {
            ResidueSource::Pocket(position) => numbering.get(position),
            ResidueSource::Offset { anchor, offset } => numbering
                .get(anchor)
                .and_then(|residue| residue.checked_add(offset))
                .filter(|&residue| residue != GAP),
        }
    }
}

/// The twelve key residue numbers of one pocket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyResidueSet {
    residues: [i32; 12],
}

impl KeyResidueSet {
    pub fn get(&self, key: KeyResidue) -> Option<i32> {
        let residue = self.residues[key as usize];
        (residue != GAP).then_some(residue)
    }

    /// Residue numbers with `0` for gaps.
    pub fn as_array(&self) -> &[i32; 12] {
        &self.residues
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeyResidue, Option<i32>)> + '_ {
        KeyResidue::iter().map(|key| (key, self.get(key)))
    }
}

pub fn key_residues(numbering: &Numbering) -> KeyResidueSet {
    let mut residues = [GAP; 12];
    for (slot, (_, source)) in residues.iter_mut().zip(KEY_RESIDUE_POSITIONS.iter()) {
        *slot = source.residue(numbering).unwrap_or(GAP);
    }
    KeyResidueSet { residues }
}
