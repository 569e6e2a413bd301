use crate::AtomCollection;
use kinofeat_test_data::TestFile;
use pdbtbx::Element;

pub(crate) fn get_atom_container() -> AtomCollection {
    let (prot_file, _temp) = TestFile::kinase_01().create_temp().unwrap();
    let (pdb, _errors) = pdbtbx::open(prot_file).unwrap();
    AtomCollection::from(&pdb)
}

/// Twelve atoms: two alanines in chain A (residues 10, 11, no O), a ligand `LIG`
/// with one carbon and one hydrogen, then two backbone atoms of chain B.
pub(crate) fn mini_kinase() -> AtomCollection {
    #[rustfmt::skip]
    let rows: [(&str, i32, &str, &str, bool, Element, [f32; 3]); 12] = [
        ("N",  10, "ALA", "A", false, Element::N, [0.0, 0.0, 0.0]),
        ("CA", 10, "ALA", "A", false, Element::C, [1.0, 0.0, 0.0]),
        ("C",  10, "ALA", "A", false, Element::C, [1.0, 1.0, 0.0]),
        ("CB", 10, "ALA", "A", false, Element::C, [1.0, 0.0, 1.0]),
        ("N",  11, "ALA", "A", false, Element::N, [2.0, 1.0, 0.0]),
        ("CA", 11, "ALA", "A", false, Element::C, [3.0, 1.0, 0.0]),
        ("C",  11, "ALA", "A", false, Element::C, [3.0, 2.0, 0.0]),
        ("CB", 11, "ALA", "A", false, Element::C, [3.0, 1.0, 1.0]),
        ("C1", 50, "LIG", "A", true,  Element::C, [2.0, 4.0, 0.0]),
        ("H1", 50, "LIG", "A", true,  Element::H, [2.0, 5.0, 0.0]),
        ("N",   1, "GLY", "B", false, Element::N, [19.0, 1.0, 0.0]),
        ("CA",  1, "GLY", "B", false, Element::C, [20.0, 1.0, 0.0]),
    ];
    // serial 9 is taken by the TER record after chain A
    let serials = vec![1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13];
    collection_from_rows(&rows, serials)
}

pub(crate) fn collection_from_rows(
    rows: &[(&str, i32, &str, &str, bool, Element, [f32; 3])],
    serials: Vec<usize>,
) -> AtomCollection {
    AtomCollection::new(
        rows.len(),
        serials,
        rows.iter().map(|r| r.6).collect(),
        rows.iter().map(|r| r.1).collect(),
        rows.iter().map(|r| r.2.to_string()).collect(),
        rows.iter().map(|r| r.4).collect(),
        rows.iter().map(|r| r.5.clone()).collect(),
        rows.iter().map(|r| r.0.to_string()).collect(),
        rows.iter().map(|r| r.3.to_string()).collect(),
    )
}
