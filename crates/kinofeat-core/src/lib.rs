//! # kinofeat-core
//!
//! Structure handling for kinase featurization.
//!
//! __kinofeat-core__ provides functionality for:
//! * Loading PDB structures and multi-model trajectories
//! * Selecting atoms by chain, residue and atom name
//! * Resolving a chain letter and a KLIFS pocket numbering to atom indices
//! * Per-frame distances and dihedrals over atom tuples
//!
//! The main entry point is the [`AtomCollection`] struct, which holds the topology, together
//! with a [`Trajectory`] of coordinates. [`ChainTopology`] turns user-level identifiers into
//! atom indices on top of it.
//!
mod atomcollection;
mod conversions;
mod error;
mod geometry;
mod numbering;
mod selection;
#[cfg(test)]
mod test_utilities;
mod topology;
mod trajectory;

pub use self::atomcollection::AtomCollection;
pub use self::conversions::load_structure;
pub use self::error::{KinofeatError, Result};
pub use self::geometry::{compute_dihedrals, compute_distances, dihedral, distance};
pub use self::numbering::{Numbering, GAP, KLIFS_GAP, POCKET_SIZE};
pub use self::selection::{AtomIterator, AtomRef, AtomSelector, AtomView, Selection};
pub use self::topology::{
    resolve_chain_index, ChainIndex, ChainSelector, ChainStrategy, ChainTable, ChainTopology,
    PocketAtoms, ALPHA_CARBON, HET_MARKER, HYDROGEN_MARKER,
};
pub use self::trajectory::{LengthUnit, Trajectory};
