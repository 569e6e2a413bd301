use crate::selection::{AtomSelector, AtomView, Selection};
use itertools::{izip, Itertools};
use pdbtbx::Element;

/// Column-oriented atom table.
///
/// One entry per atom, in file order. Row indices are the zero-based atom
/// indices used everywhere in kinofeat; `serials` keeps the one-based numbering
/// of the source file for reporting.
#[derive(Clone, Debug)]
pub struct AtomCollection {
    size: usize,
    serials: Vec<usize>,
    coords: Vec<[f32; 3]>,
    res_ids: Vec<i32>,
    res_names: Vec<String>,
    is_hetero: Vec<bool>,
    elements: Vec<Element>,
    atom_names: Vec<String>,
    chain_ids: Vec<String>,
}

impl AtomCollection {
    pub fn new(
        size: usize,
        serials: Vec<usize>,
        coords: Vec<[f32; 3]>,
        res_ids: Vec<i32>,
        res_names: Vec<String>,
        is_hetero: Vec<bool>,
        elements: Vec<Element>,
        atom_names: Vec<String>,
        chain_ids: Vec<String>,
    ) -> Self {
        AtomCollection {
            size,
            serials,
            coords,
            res_ids,
            res_names,
            is_hetero,
            elements,
            atom_names,
            chain_ids,
        }
    }
    pub fn get_size(&self) -> usize {
        self.size
    }
    pub fn get_atom_name(&self, idx: usize) -> &String {
        &self.atom_names[idx]
    }
    pub fn get_chain_id(&self, idx: usize) -> &String {
        &self.chain_ids[idx]
    }
    pub fn get_coord(&self, idx: usize) -> &[f32; 3] {
        &self.coords[idx]
    }
    pub fn get_coords(&self) -> &Vec<[f32; 3]> {
        self.coords.as_ref()
    }
    pub fn get_element(&self, idx: usize) -> &Element {
        &self.elements[idx]
    }
    pub fn get_is_hetero(&self, idx: usize) -> bool {
        self.is_hetero[idx]
    }
    pub fn get_res_id(&self, idx: usize) -> &i32 {
        &self.res_ids[idx]
    }
    pub fn get_res_name(&self, idx: usize) -> &String {
        &self.res_names[idx]
    }
    pub fn get_serial(&self, idx: usize) -> usize {
        self.serials[idx]
    }
    /// Start row and HETATM flag of every chain segment.
    ///
    /// Segments break where the chain ID changes. Within a chain, HETATM records
    /// only form a segment of their own when no ATOM record of the same chain
    /// follows them: modified residues inside the polymer (TPO, MSE, ...) stay
    /// with it, a ligand or waters after `TER` do not.
    pub(crate) fn get_chain_segments(&self) -> Vec<(usize, bool)> {
        if self.size == 0 {
            return Vec::new();
        }
        let mut trailing_het = vec![false; self.size];
        let mut polymer_follows = false;
        for idx in (0..self.size).rev() {
            if idx + 1 < self.size && self.chain_ids[idx] != self.chain_ids[idx + 1] {
                polymer_follows = false;
            }
            trailing_het[idx] = self.is_hetero[idx] && !polymer_follows;
            polymer_follows |= !self.is_hetero[idx];
        }

        let mut segments = vec![(0, trailing_het[0])];
        segments.extend(
            izip!(&self.chain_ids, &trailing_het)
                .tuple_windows()
                .enumerate()
                .filter_map(|(i, ((chain1, het1), (chain2, het2)))| {
                    if chain1 != chain2 || het1 != het2 {
                        Some((i + 1, *het2))
                    } else {
                        None
                    }
                }),
        );
        segments
    }
    pub fn select(&self) -> AtomSelector {
        AtomSelector::new(self)
    }
    pub fn select_by_residue(&self, res_name: &str) -> Selection {
        let indices: Vec<usize> = self
            .res_names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.as_str() == res_name)
            .map(|(i, _)| i)
            .collect();
        Selection::new(indices)
    }
    pub fn view(&self, selection: Selection) -> AtomView {
        AtomView::new(self, selection)
    }
}
