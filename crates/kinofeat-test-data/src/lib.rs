//! kinofeat-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! The structures are small synthetic kinase models (see `data/structures/Readme.md`)
//! laid out like a KLIFS-annotated PDB entry: a protein chain `A`, the ligand `03Q`
//! and two waters after a `TER`, and a short second protein chain `B`.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use kinofeat_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::kinase_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Complete pocket, ligand `03Q` bound in chain A.
    pub fn kinase_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/kinase_01.pdb"),
            suffix: "pdb",
        }
    }
    /// Same model as `kinase_01` with residue 873 (the FRET reference Ser) deleted.
    pub fn kinase_02() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/kinase_02.pdb"),
            suffix: "pdb",
        }
    }
    /// Same atoms as `kinase_01` written as chain A, chain B, then the chain A HETATM records.
    pub fn kinase_03() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/kinase_03.pdb"),
            suffix: "pdb",
        }
    }
    /// Three-model trajectory of `kinase_01`, each model rigidly translated.
    pub fn kinase_traj() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/kinase_traj.pdb"),
            suffix: "pdb",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}

/// KLIFS pocket numbering of the synthetic kinase, no gaps.
#[rustfmt::skip]
pub const NUMBERING_01: [i32; 85] = [
    724, 725, 726, 728, 729, 730, 731, 732, 733, 734,
    747, 748, 749, 750, 751, 752, 753, 764, 765, 766,
    767, 768, 769, 770, 771, 772, 773, 774, 775, 777,
    778, 779, 780, 781, 782, 783, 784, 795, 796, 797,
    798, 799, 800, 801, 802, 803, 804, 805, 806, 807,
    808, 809, 810, 811, 812, 813, 814, 815, 816, 817,
    836, 837, 838, 839, 840, 841, 842, 843, 844, 845,
    846, 847, 848, 856, 857, 858, 859, 860, 861, 862,
    863, 864, 865, 866, 867,
];

/// [`NUMBERING_01`] with the last pocket position unresolved.
pub fn numbering_02() -> Vec<i32> {
    let mut numbering = NUMBERING_01.to_vec();
    numbering[84] = 0;
    numbering
}
