//! kinofeat-featurizers
//!
//! - conformational features of a kinase pocket (dihedrals and distances).
//! - ligand interaction features (mean ligand to pocket Cα distance).
//! - a single [`featurize`] entry point that runs either or both.
//!
mod config;
mod conformation;
mod diagnostics;
mod featurize;
mod interaction;
mod klifs;

pub use config::{AngleUnit, FeaturizeConfig, LIGAND_ATOM_CAPACITY};
pub use conformation::{
    compute_conformational_features, AtomQuery, ConformationFeatures, Dihedral, Distance,
    ResidueRef, ResolvedAtom,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, LogSink, MissingAtom};
pub use featurize::{featurize, FeatureKind, FeatureRequest, FeatureSet};
pub use interaction::{compute_interaction_features, is_apo, InteractionFeatures};
pub use klifs::{
    key_residues, KeyResidue, KeyResidueSet, ResidueSource, FRET_ANCHOR, FRET_LEU_OFFSET,
    FRET_SER_OFFSET, KEY_RESIDUE_POSITIONS,
};
