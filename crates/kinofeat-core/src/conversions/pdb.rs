use crate::error::{KinofeatError, Result};
use crate::trajectory::{LengthUnit, Trajectory};
use crate::AtomCollection;
use itertools::Itertools;
use pdbtbx::{Element, Model, PDB};

impl From<&PDB> for AtomCollection {
    // the PDB API requires us to iterate:
    // Model --> Chain --> Residue --> Atom if we want data from all.
    // Only the first model defines the topology; further models are frames.
    fn from(pdb_data: &PDB) -> Self {
        let (serials, coords, is_hetero, atom_names, res_ids, res_names, elements, chain_ids): (
            Vec<usize>,
            Vec<[f32; 3]>,
            Vec<bool>,
            Vec<String>,
            Vec<i32>,
            Vec<String>,
            Vec<Element>,
            Vec<String>,
        ) = pdb_data
            .models()
            .take(1)
            .flat_map(|model| model.chains())
            .flat_map(|chain| {
                let chain_id = chain.id().to_string();
                chain.residues().flat_map(move |residue| {
                    let (res_number, _insertion_code) = residue.id();
                    let res_id = res_number as i32;
                    let res_name = residue.name().unwrap_or_default().to_string();
                    let chain_id = chain_id.clone();
                    residue.atoms().filter_map(move |atom| {
                        atom.element().map(|element| {
                            let (x, y, z) = atom.pos();
                            (
                                atom.serial_number(),
                                [x as f32, y as f32, z as f32],
                                atom.hetero(),
                                atom.name().to_string(),
                                res_id,
                                res_name.clone(),
                                element.clone(),
                                chain_id.clone(),
                            )
                        })
                    })
                })
            })
            .multiunzip();

        AtomCollection::new(
            coords.len(),
            serials,
            coords,
            res_ids,
            res_names,
            is_hetero,
            elements,
            atom_names,
            chain_ids,
        )
    }
}

// Same traversal and element filter as the topology, so row indices line up.
fn model_coords(model: &Model) -> Vec<[f32; 3]> {
    model
        .chains()
        .flat_map(|chain| chain.residues())
        .flat_map(|residue| residue.atoms())
        .filter(|atom| atom.element().is_some())
        .map(|atom| {
            let (x, y, z) = atom.pos();
            [x as f32, y as f32, z as f32]
        })
        .collect()
}

/// Every model of the file as one frame, in Ångström.
pub(crate) fn trajectory_from_pdb(pdb_data: &PDB) -> Result<Trajectory> {
    let frames: Vec<Vec<[f32; 3]>> = pdb_data.models().map(model_coords).collect();
    let n_atoms = frames.first().map(|f| f.len()).unwrap_or(0);
    Trajectory::from_frames(frames, n_atoms, LengthUnit::Angstrom)
}

/// Read a PDB or mmCIF file into a topology and its coordinate frames.
///
/// A multi-model file becomes a multi-frame [`Trajectory`]; all models must
/// carry the same atoms.
pub fn load_structure(path: &str) -> Result<(AtomCollection, Trajectory)> {
    let (pdb, warnings) = pdbtbx::open(path).map_err(|errors| {
        KinofeatError::Structure(errors.iter().map(|e| e.to_string()).join("; "))
    })?;
    for warning in &warnings {
        log::debug!("{}: {}", path, warning);
    }
    let collection = AtomCollection::from(&pdb);
    let trajectory = trajectory_from_pdb(&pdb)?;
    trajectory.check_topology(&collection)?;
    Ok((collection, trajectory))
}
