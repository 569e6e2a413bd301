//! View-based access to a subset of an [`AtomCollection`].
//!
//! - [`AtomView`] - A view into a subset of atoms in a collection
//! - [`AtomRef`] - A reference to atomic properties
//! - [`AtomIterator`] - An iterator over atoms in a view

use super::selection::Selection;
use crate::AtomCollection;
use pdbtbx::Element;

pub struct AtomView<'a> {
    /// Reference to the underlying atom collection
    collection: &'a AtomCollection,
    /// The selected subset of atoms in the collection
    selection: Selection,
}

impl<'a> AtomView<'a> {
    pub(crate) fn new(collection: &'a AtomCollection, selection: Selection) -> Self {
        AtomView {
            collection,
            selection,
        }
    }
    pub fn indices(&self) -> &[usize] {
        &self.selection.indices
    }
    pub fn size(&self) -> usize {
        self.selection.indices.len()
    }
}

/// A reference to an atom's properties
#[derive(Debug)]
pub struct AtomRef<'a> {
    /// Row index in the collection
    pub index: usize,
    /// Serial number from the source file
    pub serial: usize,
    pub atom_name: &'a String,
    pub coords: &'a [f32; 3],
    pub res_id: &'a i32,
    pub res_name: &'a String,
    pub chain_id: &'a String,
    pub element: &'a Element,
}

/// An iterator over atoms in an [`AtomView`], yielding [`AtomRef`]s
pub struct AtomIterator<'a> {
    view: &'a AtomView<'a>,
    current: usize,
}

impl<'a> IntoIterator for &'a AtomView<'a> {
    type Item = AtomRef<'a>;
    type IntoIter = AtomIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        AtomIterator {
            view: self,
            current: 0,
        }
    }
}

impl<'a> Iterator for AtomIterator<'a> {
    type Item = AtomRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.view.selection.indices.len() {
            return None;
        }

        let idx = self.view.selection.indices[self.current];
        self.current += 1;

        let collection = self.view.collection;
        Some(AtomRef {
            index: idx,
            serial: collection.get_serial(idx),
            atom_name: collection.get_atom_name(idx),
            coords: collection.get_coord(idx),
            res_id: collection.get_res_id(idx),
            res_name: collection.get_res_name(idx),
            chain_id: collection.get_chain_id(idx),
            element: collection.get_element(idx),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utilities::mini_kinase;

    #[test]
    fn test_iterate_view() {
        let ac = mini_kinase();
        let view = ac.select().residue("GLY").collect();
        assert_eq!(view.size(), 2);
        let names: Vec<&str> = (&view).into_iter().map(|a| a.atom_name.as_str()).collect();
        assert_eq!(names, ["N", "CA"]);
        let first = (&view).into_iter().next().unwrap();
        assert_eq!(first.index, 10);
        assert_eq!(first.serial, 12);
        assert_eq!(first.chain_id, "B");
        let last = (&view).into_iter().last().unwrap();
        assert_eq!(last.coords, &[20.0, 1.0, 0.0]);
    }
}
