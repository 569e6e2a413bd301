//! Conformational features of the kinase pocket.
//!
//! Ten backbone and side-chain dihedrals around the αC helix and the DFG motif,
//! plus five distances: the β3 Lys to αC Glu salt bridge, two DFG placement
//! distances and one FRET reference distance.
//!
//! Atoms are addressed by pocket position (or key residue) and atom name. Each
//! distinct atom is looked up once and every group that uses it shares the same
//! index. A group with any atom missing is dropped from the output and reported
//! as a [`Diagnostic::MissingAtoms`].
use crate::config::FeaturizeConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, MissingAtom};
use crate::klifs::{key_residues, KeyResidue, KeyResidueSet};
use kinofeat_core::{
    compute_dihedrals, compute_distances, ChainTopology, Numbering, Result, Trajectory,
};
use ndarray::Array2;
use serde::Serialize;
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResidueRef {
    Pocket(usize),
    Key(KeyResidue),
}

/// An atom by residue and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtomQuery {
    pub residue: ResidueRef,
    pub atom_name: &'static str,
}

const fn pocket(position: usize, atom_name: &'static str) -> AtomQuery {
    AtomQuery {
        residue: ResidueRef::Pocket(position),
        atom_name,
    }
}

const fn key(residue: KeyResidue, atom_name: &'static str) -> AtomQuery {
    AtomQuery {
        residue: ResidueRef::Key(residue),
        atom_name,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize)]
pub enum Dihedral {
    /// Pseudo-dihedral over four Cα atoms of the αC and αE helices.
    #[strum(serialize = "aC_rot")]
    #[serde(rename = "aC_rot")]
    AlphaCRotation,
    #[strum(serialize = "xDFG_phi")]
    #[serde(rename = "xDFG_phi")]
    PreDfgPhi,
    #[strum(serialize = "xDFG_psi")]
    #[serde(rename = "xDFG_psi")]
    PreDfgPsi,
    #[strum(serialize = "dFG_phi")]
    #[serde(rename = "dFG_phi")]
    DfgAspPhi,
    #[strum(serialize = "dFG_psi")]
    #[serde(rename = "dFG_psi")]
    DfgAspPsi,
    #[strum(serialize = "dFG_chi1")]
    #[serde(rename = "dFG_chi1")]
    DfgAspChi1,
    #[strum(serialize = "dFG_chi2")]
    #[serde(rename = "dFG_chi2")]
    DfgAspChi2,
    #[strum(serialize = "DfG_phi")]
    #[serde(rename = "DfG_phi")]
    DfgPhePhi,
    #[strum(serialize = "DfG_psi")]
    #[serde(rename = "DfG_psi")]
    DfgPhePsi,
    #[strum(serialize = "DfG_chi1")]
    #[serde(rename = "DfG_chi1")]
    DfgPheChi1,
}

impl Dihedral {
    pub fn atoms(&self) -> [AtomQuery; 4] {
        match self {
            Dihedral::AlphaCRotation => [
                pocket(20, "CA"),
                pocket(28, "CA"),
                pocket(60, "CA"),
                pocket(62, "CA"),
            ],
            Dihedral::PreDfgPhi => [
                pocket(78, "C"),
                pocket(79, "N"),
                pocket(79, "CA"),
                pocket(79, "C"),
            ],
            Dihedral::PreDfgPsi => [
                pocket(79, "N"),
                pocket(79, "CA"),
                pocket(79, "C"),
                pocket(80, "N"),
            ],
            Dihedral::DfgAspPhi => [
                pocket(79, "C"),
                pocket(80, "N"),
                pocket(80, "CA"),
                pocket(80, "C"),
            ],
            Dihedral::DfgAspPsi => [
                pocket(80, "N"),
                pocket(80, "CA"),
                pocket(80, "C"),
                pocket(81, "N"),
            ],
            Dihedral::DfgAspChi1 => [
                pocket(80, "N"),
                pocket(80, "CA"),
                pocket(80, "CB"),
                pocket(80, "CG"),
            ],
            Dihedral::DfgAspChi2 => [
                pocket(80, "CA"),
                pocket(80, "CB"),
                pocket(80, "CG"),
                pocket(80, "OD1"),
            ],
            Dihedral::DfgPhePhi => [
                pocket(80, "C"),
                pocket(81, "N"),
                pocket(81, "CA"),
                pocket(81, "C"),
            ],
            Dihedral::DfgPhePsi => [
                pocket(81, "N"),
                pocket(81, "CA"),
                pocket(81, "C"),
                pocket(82, "N"),
            ],
            Dihedral::DfgPheChi1 => [
                pocket(81, "N"),
                pocket(81, "CA"),
                pocket(81, "CB"),
                pocket(81, "CG"),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize)]
pub enum Distance {
    #[strum(serialize = "K_E1")]
    #[serde(rename = "K_E1")]
    SaltBridge1,
    #[strum(serialize = "K_E2")]
    #[serde(rename = "K_E2")]
    SaltBridge2,
    #[strum(serialize = "DFG_conf1")]
    #[serde(rename = "DFG_conf1")]
    DfgPlacement1,
    #[strum(serialize = "DFG_conf2")]
    #[serde(rename = "DFG_conf2")]
    DfgPlacement2,
    #[strum(serialize = "fret")]
    #[serde(rename = "fret")]
    Fret,
}

impl Distance {
    pub fn atoms(&self) -> [AtomQuery; 2] {
        match self {
            Distance::SaltBridge1 => [pocket(16, "NZ"), pocket(23, "OE1")],
            Distance::SaltBridge2 => [pocket(16, "NZ"), pocket(23, "OE2")],
            Distance::DfgPlacement1 => [pocket(27, "CA"), pocket(81, "CZ")],
            Distance::DfgPlacement2 => [pocket(16, "CA"), pocket(81, "CZ")],
            Distance::Fret => [key(KeyResidue::FretSer, "CA"), key(KeyResidue::FretLeu, "CA")],
        }
    }
}

/// Outcome of one atom lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedAtom {
    pub residue: Option<i32>,
    pub atom_name: &'static str,
    pub index: Option<usize>,
}

/// Looks up every distinct atom once and hands out the cached result afterwards.
struct AtomResolver<'t, 'a> {
    topology: &'t ChainTopology<'a>,
    numbering: &'t Numbering,
    key_residues: &'t KeyResidueSet,
    resolved: HashMap<AtomQuery, ResolvedAtom>,
}

impl<'t, 'a> AtomResolver<'t, 'a> {
    fn new(
        topology: &'t ChainTopology<'a>,
        numbering: &'t Numbering,
        key_residues: &'t KeyResidueSet,
    ) -> Self {
        AtomResolver {
            topology,
            numbering,
            key_residues,
            resolved: HashMap::new(),
        }
    }

    fn resolve(&mut self, query: AtomQuery) -> ResolvedAtom {
        let (topology, numbering, key_residues) = (self.topology, self.numbering, self.key_residues);
        *self.resolved.entry(query).or_insert_with(|| {
            let residue = match query.residue {
                ResidueRef::Pocket(position) => numbering.get(position),
                ResidueRef::Key(key) => key_residues.get(key),
            };
            ResolvedAtom {
                residue,
                atom_name: query.atom_name,
                index: topology.find_atom(residue, query.atom_name),
            }
        })
    }

    fn resolve_group<const N: usize>(
        &mut self,
        queries: [AtomQuery; N],
    ) -> std::result::Result<[usize; N], Vec<MissingAtom>> {
        let mut indices = [0; N];
        let mut missing = Vec::new();
        for (slot, query) in indices.iter_mut().zip(queries) {
            let atom = self.resolve(query);
            match atom.index {
                Some(index) => *slot = index,
                None => missing.push(MissingAtom {
                    residue: atom.residue,
                    atom_name: atom.atom_name.to_string(),
                }),
            }
        }
        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(missing)
        }
    }
}

/// Per-frame conformational features; columns follow the name lists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConformationFeatures {
    pub key_residues: KeyResidueSet,
    /// `(frames, dihedral_names.len())`, in the configured angle unit.
    pub dihedrals: Array2<f64>,
    /// `(frames, distance_names.len())`, in the trajectory's length unit.
    pub distances: Array2<f64>,
    pub dihedral_names: Vec<Dihedral>,
    pub distance_names: Vec<Distance>,
    pub diagnostics: Diagnostics,
}

impl ConformationFeatures {
    pub fn dihedral(&self, name: Dihedral) -> Option<ndarray::ArrayView1<f64>> {
        let column = self.dihedral_names.iter().position(|&n| n == name)?;
        Some(self.dihedrals.column(column))
    }

    pub fn distance(&self, name: Distance) -> Option<ndarray::ArrayView1<f64>> {
        let column = self.distance_names.iter().position(|&n| n == name)?;
        Some(self.distances.column(column))
    }
}

/// Dihedrals and distances of the pocket for every frame of `trajectory`.
///
/// Missing atoms never fail the call; the affected groups are left out and
/// reported to `sink`.
pub fn compute_conformational_features(
    topology: &ChainTopology,
    trajectory: &Trajectory,
    numbering: &Numbering,
    config: &FeaturizeConfig,
    sink: &dyn DiagnosticSink,
) -> Result<ConformationFeatures> {
    trajectory.check_topology(topology.collection())?;
    let key_residues = key_residues(numbering);
    let mut diagnostics = Diagnostics::new();

    let mut resolver = AtomResolver::new(topology, numbering, &key_residues);
    let mut dihedral_names = Vec::new();
    let mut quartets = Vec::new();
    for dihedral in Dihedral::iter() {
        match resolver.resolve_group(dihedral.atoms()) {
            Ok(quartet) => {
                dihedral_names.push(dihedral);
                quartets.push(quartet);
            }
            Err(atoms) => diagnostics.record(
                Diagnostic::MissingAtoms {
                    group: dihedral.to_string(),
                    atoms,
                },
                sink,
            ),
        }
    }

    let mut distance_names = Vec::new();
    let mut pairs = Vec::new();
    for distance in Distance::iter() {
        match resolver.resolve_group(distance.atoms()) {
            Ok(pair) => {
                distance_names.push(distance);
                pairs.push(pair);
            }
            Err(atoms) => diagnostics.record(
                Diagnostic::MissingAtoms {
                    group: distance.to_string(),
                    atoms,
                },
                sink,
            ),
        }
    }

    let angle_unit = config.angle_unit;
    let dihedrals = compute_dihedrals(trajectory, &quartets).mapv(|angle| angle_unit.convert(angle));
    let distances = compute_distances(trajectory, &pairs);
    log::debug!(
        "{} frames: {} dihedrals, {} distances",
        trajectory.n_frames(),
        dihedral_names.len(),
        distance_names.len()
    );

    Ok(ConformationFeatures {
        key_residues,
        dihedrals,
        distances,
        dihedral_names,
        distance_names,
        diagnostics,
    })
}
