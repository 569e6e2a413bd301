use super::selection::Selection;
use super::view::AtomView;
use crate::AtomCollection;

/// Builder-style atom query. Every step narrows the current selection.
pub struct AtomSelector<'a> {
    collection: &'a AtomCollection,
    current_selection: Selection,
}

impl<'a> AtomSelector<'a> {
    pub(crate) fn new(collection: &AtomCollection) -> AtomSelector<'_> {
        let size = collection.get_size();
        AtomSelector {
            collection,
            current_selection: Selection::new((0..size).collect()),
        }
    }
    pub fn collect(self) -> AtomView<'a> {
        AtomView::new(self.collection, self.current_selection)
    }
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let filtered = self
            .current_selection
            .indices
            .iter()
            .filter(|&&idx| predicate(idx))
            .copied()
            .collect();
        self.current_selection = Selection::new(filtered);
        self
    }
    pub fn residue(mut self, res_name: &str) -> Self {
        let res_selection = self.collection.select_by_residue(res_name);
        let intersected = self
            .current_selection
            .indices
            .iter()
            .filter(|idx| res_selection.indices.contains(idx))
            .copied()
            .collect();
        self.current_selection = Selection::new(intersected);
        self
    }
}
