//! Row-index Selections

/// Selection
///
/// Selection are indices that can be use used to
/// identify specific sets of atoms within an [`AtomCollection`](crate::AtomCollection)
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub(crate) indices: Vec<usize>,
}

impl Selection {
    pub fn new(indices: Vec<usize>) -> Self {
        Selection { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
