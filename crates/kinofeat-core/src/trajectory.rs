//! Coordinate frames.
//!
//! A [`Trajectory`] stores positions as an `(frames, atoms, 3)` array. A single
//! static structure is a trajectory with one frame; zero frames is allowed and
//! simply yields empty feature arrays downstream.
use crate::error::{KinofeatError, Result};
use crate::AtomCollection;
use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Angstrom,
    Nanometer,
}

impl LengthUnit {
    /// Number of this unit in one Ångström.
    pub fn per_angstrom(&self) -> f32 {
        match self {
            LengthUnit::Angstrom => 1.0,
            LengthUnit::Nanometer => 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Trajectory {
    xyz: Array3<f32>,
    unit: LengthUnit,
}

impl Trajectory {
    pub fn new(xyz: Array3<f32>, unit: LengthUnit) -> Result<Self> {
        let (_, _, dim3) = xyz.dim();
        if dim3 != 3 {
            return Err(KinofeatError::input_shape(format!(
                "coordinates need 3 components per atom, found {}",
                dim3
            )));
        }
        Ok(Trajectory { xyz, unit })
    }

    /// A trajectory with no frames for a topology of `n_atoms` atoms.
    pub fn empty(n_atoms: usize, unit: LengthUnit) -> Self {
        Trajectory {
            xyz: Array3::zeros((0, n_atoms, 3)),
            unit,
        }
    }

    /// Stack per-frame coordinate lists. Every frame must hold `n_atoms` atoms.
    pub fn from_frames(frames: Vec<Vec<[f32; 3]>>, n_atoms: usize, unit: LengthUnit) -> Result<Self> {
        if let Some(bad) = frames.iter().find(|frame| frame.len() != n_atoms) {
            return Err(KinofeatError::FrameMismatch {
                expected: n_atoms,
                found: bad.len(),
            });
        }
        let n_frames = frames.len();
        let flat: Vec<f32> = frames.into_iter().flatten().flatten().collect();
        let xyz = Array3::from_shape_vec((n_frames, n_atoms, 3), flat)
            .map_err(|e| KinofeatError::input_shape(e.to_string()))?;
        Ok(Trajectory { xyz, unit })
    }

    pub fn n_frames(&self) -> usize {
        self.xyz.dim().0
    }

    pub fn n_atoms(&self) -> usize {
        self.xyz.dim().1
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn xyz(&self) -> ArrayView3<f32> {
        self.xyz.view()
    }

    /// Copy of the trajectory expressed in `unit`.
    pub fn to_unit(&self, unit: LengthUnit) -> Trajectory {
        let factor = unit.per_angstrom() / self.unit.per_angstrom();
        Trajectory {
            xyz: self.xyz.mapv(|v| v * factor),
            unit,
        }
    }

    pub fn check_topology(&self, collection: &AtomCollection) -> Result<()> {
        if self.n_atoms() != collection.get_size() {
            return Err(KinofeatError::FrameMismatch {
                expected: collection.get_size(),
                found: self.n_atoms(),
            });
        }
        Ok(())
    }
}

/// One frame holding the reference coordinates of the collection.
impl From<&AtomCollection> for Trajectory {
    fn from(collection: &AtomCollection) -> Self {
        let flat: Vec<f32> = collection.get_coords().iter().flatten().copied().collect();
        let xyz = Array3::from_shape_vec((1, collection.get_size(), 3), flat)
            .unwrap_or_else(|_| Array3::zeros((0, collection.get_size(), 3)));
        Trajectory {
            xyz,
            unit: LengthUnit::Angstrom,
        }
    }
}
