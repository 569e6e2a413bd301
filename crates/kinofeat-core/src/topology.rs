//! Topology resolution: from a chain selector and a pocket numbering to atom
//! indices.
//!
//! The atom table is cut into chain segments. A segment ends where the chain ID
//! changes or where the records switch between ATOM and HETATM, so a ligand
//! following its protein chain after `TER` is a chain of its own, labelled with
//! the `HET` marker (`"A"` then `"HETA"`). Labels are numbered in order of first
//! appearance; that number is the [`ChainIndex`].
use crate::error::{KinofeatError, Result};
use crate::numbering::{Numbering, POCKET_SIZE};
use crate::selection::{AtomView, Selection};
use crate::AtomCollection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};

/// Atom name of the alpha carbon.
pub const ALPHA_CARBON: &str = "CA";

/// Prefix for chain labels of HETATM segments.
pub const HET_MARKER: &str = "HET";

/// Atom names containing this character are treated as hydrogens.
pub const HYDROGEN_MARKER: char = 'H';

/// User-facing chain identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChainSelector {
    /// A chain ID as written in the structure file, case-sensitive.
    Id(char),
    /// An explicit position in the chain list.
    Position(usize),
}

impl FromStr for ChainSelector {
    type Err = KinofeatError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => Ok(ChainSelector::Id(c)),
            _ => Err(KinofeatError::input_shape(format!(
                "chain selector must be a single letter or digit, got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainSelector::Id(c) => write!(f, "{}", c),
            ChainSelector::Position(n) => write!(f, "#{}", n),
        }
    }
}

/// How a chain letter becomes a [`ChainIndex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChainStrategy {
    /// `A -> 0, B -> 1, ...`. Only correct when chains are contiguous and no
    /// HETATM segment sits between protein chains.
    Alphabetic,
    /// Position of the chain's label in the first-appearance chain list.
    #[default]
    FirstAppearance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChainIndex(pub usize);

impl ChainIndex {
    /// The chain that follows this one in file order.
    pub fn next(self) -> ChainIndex {
        ChainIndex(self.0 + 1)
    }
}

/// Chain labels in first-appearance order and the chain of every atom.
#[derive(Clone, Debug)]
pub struct ChainTable {
    labels: Vec<String>,
    atom_chain: Vec<usize>,
}

impl ChainTable {
    pub fn new(collection: &AtomCollection) -> Self {
        let mut labels: Vec<String> = Vec::new();
        let mut atom_chain = vec![0; collection.get_size()];
        let segments = collection.get_chain_segments();
        let ends = segments
            .iter()
            .skip(1)
            .map(|&(start, _)| start)
            .chain(std::iter::once(collection.get_size()));

        for (&(start, hetero), end) in segments.iter().zip(ends) {
            let chain_id = collection.get_chain_id(start);
            let label = if hetero {
                format!("{}{}", HET_MARKER, chain_id)
            } else {
                chain_id.clone()
            };
            let index = match labels.iter().position(|l| *l == label) {
                Some(index) => index,
                None => {
                    labels.push(label);
                    labels.len() - 1
                }
            };
            atom_chain[start..end].fill(index);
        }
        ChainTable { labels, atom_chain }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, chain: ChainIndex) -> Option<&str> {
        self.labels.get(chain.0).map(String::as_str)
    }

    pub fn chain_of(&self, atom: usize) -> ChainIndex {
        ChainIndex(self.atom_chain[atom])
    }

    pub fn contains(&self, chain: ChainIndex) -> bool {
        chain.0 < self.labels.len()
    }

    /// All atoms of one chain, in file order.
    pub fn selection(&self, chain: ChainIndex) -> Selection {
        Selection::new(
            self.atom_chain
                .iter()
                .enumerate()
                .filter(|(_, &c)| c == chain.0)
                .map(|(i, _)| i)
                .collect(),
        )
    }

    pub fn resolve(&self, selector: &ChainSelector, strategy: ChainStrategy) -> Result<ChainIndex> {
        let index = match (selector, strategy) {
            (ChainSelector::Position(n), _) => Some(*n),
            (ChainSelector::Id(c), ChainStrategy::Alphabetic) => {
                let lower = c.to_ascii_lowercase();
                lower
                    .is_ascii_lowercase()
                    .then(|| (lower as u8 - b'a') as usize)
            }
            (ChainSelector::Id(c), ChainStrategy::FirstAppearance) => {
                let label = c.to_string();
                self.labels.iter().position(|l| *l == label)
            }
        };
        index
            .map(ChainIndex)
            .filter(|&chain| self.contains(chain))
            .ok_or_else(|| KinofeatError::unknown_chain(selector))
    }
}

/// Map a chain selector onto the chain list of a topology.
pub fn resolve_chain_index(
    collection: &AtomCollection,
    selector: &ChainSelector,
    strategy: ChainStrategy,
) -> Result<ChainIndex> {
    ChainTable::new(collection).resolve(selector, strategy)
}

/// Alpha-carbon indices of the 85 pocket positions, aligned with the numbering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PocketAtoms {
    slots: Vec<Option<usize>>,
}

impl PocketAtoms {
    pub fn get(&self, position: usize) -> Option<usize> {
        self.slots.get(position).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `(position, atom index)` of every resolved position.
    pub fn resolved(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|atom| (position, atom)))
    }

    pub fn unresolved(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(position, _)| position)
    }

    /// File serial numbers, `0` for unresolved positions.
    pub fn to_serials(&self, collection: &AtomCollection) -> Vec<usize> {
        self.slots
            .iter()
            .map(|slot| slot.map_or(0, |atom| collection.get_serial(atom)))
            .collect()
    }
}

/// Atom lookup tables for one chain, built in a single pass over the atoms.
pub struct ChainTopology<'a> {
    collection: &'a AtomCollection,
    chains: ChainTable,
    chain: ChainIndex,
    atoms: Selection,
    lookup: HashMap<i32, HashMap<String, usize>>,
}

impl<'a> ChainTopology<'a> {
    pub fn new(
        collection: &'a AtomCollection,
        selector: &ChainSelector,
        strategy: ChainStrategy,
    ) -> Result<Self> {
        let chains = ChainTable::new(collection);
        let chain = chains.resolve(selector, strategy)?;
        log::debug!(
            "chain {} resolved to index {} ({:?}) using {}",
            selector,
            chain.0,
            chains.label(chain),
            strategy
        );
        Ok(Self::build(collection, chains, chain))
    }

    pub fn from_index(collection: &'a AtomCollection, chain: ChainIndex) -> Result<Self> {
        let chains = ChainTable::new(collection);
        if !chains.contains(chain) {
            return Err(KinofeatError::unknown_chain(ChainSelector::Position(chain.0)));
        }
        Ok(Self::build(collection, chains, chain))
    }

    fn build(collection: &'a AtomCollection, chains: ChainTable, chain: ChainIndex) -> Self {
        let atoms = chains.selection(chain);
        let mut lookup: HashMap<i32, HashMap<String, usize>> = HashMap::new();
        for &idx in atoms.indices() {
            // first hit wins: alternate conformers never shadow the primary atom
            lookup
                .entry(*collection.get_res_id(idx))
                .or_default()
                .entry(collection.get_atom_name(idx).clone())
                .or_insert(idx);
        }
        ChainTopology {
            collection,
            chains,
            chain,
            atoms,
            lookup,
        }
    }

    pub fn collection(&self) -> &'a AtomCollection {
        self.collection
    }

    pub fn chain_index(&self) -> ChainIndex {
        self.chain
    }

    pub fn chains(&self) -> &ChainTable {
        &self.chains
    }

    /// Every atom of the chain, for pattern matching by the caller.
    pub fn atoms(&self) -> AtomView<'a> {
        self.collection.view(self.atoms.clone())
    }

    /// Index of `atom_name` in residue `residue`; a gap residue never matches.
    pub fn find_atom(&self, residue: Option<i32>, atom_name: &str) -> Option<usize> {
        let residue = residue?;
        self.lookup.get(&residue)?.get(atom_name).copied()
    }

    /// Alpha carbons of the 85 pocket residues.
    ///
    /// Gap positions stay `None` in place, so position `k` of the result always
    /// belongs to position `k` of the numbering. A resolved residue without an
    /// alpha carbon in this chain is an inconsistency between numbering and
    /// structure and is returned as [`KinofeatError::PocketMismatch`].
    pub fn find_pocket_atoms(&self, numbering: &Numbering) -> Result<PocketAtoms> {
        let mut slots = Vec::with_capacity(POCKET_SIZE);
        for (position, residue) in numbering.iter().enumerate() {
            let slot = match residue {
                None => None,
                Some(residue) => Some(
                    self.find_atom(Some(residue), ALPHA_CARBON)
                        .ok_or(KinofeatError::PocketMismatch { position, residue })?,
                ),
            };
            slots.push(slot);
        }
        Ok(PocketAtoms { slots })
    }

    /// The chain right after this one, where the bound ligand is expected.
    pub fn ligand_chain(&self) -> Option<ChainIndex> {
        Some(self.chain.next()).filter(|&chain| self.chains.contains(chain))
    }

    /// Heavy atoms of `ligand_id` in the ligand chain.
    ///
    /// Hydrogens are recognised by `hydrogen_marker` in the atom name.
    pub fn ligand_heavy_atoms(&self, ligand_id: &str, hydrogen_marker: char) -> Vec<usize> {
        let Some(ligand_chain) = self.ligand_chain() else {
            return Vec::new();
        };
        let collection = self.collection;
        let chains = &self.chains;
        collection
            .select()
            .residue(ligand_id)
            .filter(|idx| {
                chains.chain_of(idx) == ligand_chain
                    && !collection.get_atom_name(idx).contains(hydrogen_marker)
            })
            .collect()
            .indices()
            .to_vec()
    }
}
