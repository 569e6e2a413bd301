//! Ligand to pocket contact features.
//!
//! Every heavy atom of the bound ligand is paired with the Cα of every pocket
//! residue; the feature is the mean pair distance per frame.
use crate::config::FeaturizeConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics};
use kinofeat_core::{
    compute_distances, ChainTopology, KinofeatError, Numbering, Result, Trajectory, POCKET_SIZE,
};
use ndarray::Axis;
use serde::Serialize;

const APO: &str = "apo";

/// True when no ligand is named.
pub fn is_apo(ligand_id: &str) -> bool {
    let ligand_id = ligand_id.trim();
    ligand_id.is_empty() || ligand_id.eq_ignore_ascii_case(APO)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InteractionFeatures {
    /// Mean ligand-pocket distance of each frame, in the trajectory's length unit.
    pub mean_distance: Vec<f64>,
    /// Number of pairs that entered the mean.
    pub pair_count: usize,
    pub diagnostics: Diagnostics,
}

/// Mean distance between the heavy atoms of `ligand_id` and the pocket Cα atoms.
///
/// The ligand is taken from the chain right after the selected protein chain.
/// Pairs against unresolved pocket positions are dropped and reported to `sink`.
pub fn compute_interaction_features(
    topology: &ChainTopology,
    trajectory: &Trajectory,
    ligand_id: &str,
    numbering: &Numbering,
    config: &FeaturizeConfig,
    sink: &dyn DiagnosticSink,
) -> Result<InteractionFeatures> {
    if is_apo(ligand_id) {
        return Err(KinofeatError::unresolvable_ligand(ligand_id));
    }
    trajectory.check_topology(topology.collection())?;
    let pocket = topology.find_pocket_atoms(numbering)?;
    let ligand = topology.ligand_heavy_atoms(ligand_id, config.hydrogen_marker);
    if ligand.is_empty() {
        return Err(KinofeatError::unresolvable_ligand(ligand_id));
    }

    let mut diagnostics = Diagnostics::new();
    if ligand.len() > config.ligand_atom_capacity {
        diagnostics.record(
            Diagnostic::LigandCapacity {
                atoms: ligand.len(),
                capacity: config.ligand_atom_capacity,
            },
            sink,
        );
    }
    for position in pocket.unresolved() {
        diagnostics.record(
            Diagnostic::PocketGap {
                position,
                pairs_dropped: ligand.len(),
            },
            sink,
        );
    }

    let mut pairs = Vec::with_capacity(
        ligand
            .len()
            .min(config.ligand_atom_capacity)
            .saturating_mul(POCKET_SIZE),
    );
    for &ligand_atom in &ligand {
        pairs.extend(pocket.resolved().map(|(_, pocket_atom)| [ligand_atom, pocket_atom]));
    }
    if pairs.is_empty() {
        return Err(KinofeatError::NoResolvedPocketAtoms);
    }

    let distances = compute_distances(trajectory, &pairs);
    let mean_distance = distances
        .mean_axis(Axis(1))
        .ok_or(KinofeatError::NoResolvedPocketAtoms)?
        .to_vec();
    log::debug!(
        "ligand {}: {} heavy atoms, {} pairs over {} frames",
        ligand_id,
        ligand.len(),
        pairs.len(),
        trajectory.n_frames()
    );

    Ok(InteractionFeatures {
        mean_distance,
        pair_count: pairs.len(),
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_apo() {
        assert!(is_apo("apo"));
        assert!(is_apo("APO"));
        assert!(is_apo(""));
        assert!(is_apo("  "));
        assert!(!is_apo("03Q"));
    }
}
