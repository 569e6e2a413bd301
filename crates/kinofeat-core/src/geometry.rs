//! Distances and dihedrals over every frame of a [`Trajectory`].
//!
//! Indices are zero-based rows of the topology and must be in bounds for the
//! trajectory; callers check this with [`Trajectory::check_topology`].
use crate::Trajectory;
use ndarray::{Array2, ArrayView2};

fn position(frame: &ArrayView2<f32>, idx: usize) -> [f64; 3] {
    [
        frame[[idx, 0]] as f64,
        frame[[idx, 1]] as f64,
        frame[[idx, 2]] as f64,
    ]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d = sub(a, b);
    dot(d, d).sqrt()
}

/// Torsion angle p0-p1-p2-p3 in radians, in (-π, π].
///
/// Uses the `atan2` form, which keeps full precision near 0 and ±π.
pub fn dihedral(p0: [f64; 3], p1: [f64; 3], p2: [f64; 3], p3: [f64; 3]) -> f64 {
    let b1 = sub(p1, p0);
    let b2 = sub(p2, p1);
    let b3 = sub(p3, p2);
    let c1 = cross(b2, b3);
    let c2 = cross(b1, b2);
    let y = dot(b1, c1) * dot(b2, b2).sqrt();
    let x = dot(c1, c2);
    y.atan2(x)
}

/// Pairwise distances, shape `(frames, pairs)`, in the trajectory's unit.
pub fn compute_distances(trajectory: &Trajectory, pairs: &[[usize; 2]]) -> Array2<f64> {
    let xyz = trajectory.xyz();
    let mut out = Array2::zeros((trajectory.n_frames(), pairs.len()));
    for (frame, mut row) in xyz.outer_iter().zip(out.outer_iter_mut()) {
        for (value, &[a, b]) in row.iter_mut().zip(pairs) {
            *value = distance(position(&frame, a), position(&frame, b));
        }
    }
    out
}

/// Dihedral angles in radians, shape `(frames, quartets)`.
pub fn compute_dihedrals(trajectory: &Trajectory, quartets: &[[usize; 4]]) -> Array2<f64> {
    let xyz = trajectory.xyz();
    let mut out = Array2::zeros((trajectory.n_frames(), quartets.len()));
    for (frame, mut row) in xyz.outer_iter().zip(out.outer_iter_mut()) {
        for (value, &[a, b, c, d]) in row.iter_mut().zip(quartets) {
            *value = dihedral(
                position(&frame, a),
                position(&frame, b),
                position(&frame, c),
                position(&frame, d),
            );
        }
    }
    out
}
