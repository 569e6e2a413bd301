mod pdb;

pub use pdb::load_structure;
