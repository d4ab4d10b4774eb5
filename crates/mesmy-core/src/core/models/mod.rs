//! # Core Models Module
//!
//! This module contains the data structures used to represent a parsed
//! biomolecular system in mesmy.
//!
//! ## Overview
//!
//! A [`system::MolecularSystem`] is built once per invocation by the structure
//! loader from an AMBER topology/coordinate pair and is read-only afterwards.
//! Atoms, residues and chains are stored in slot maps and referenced through
//! the stable keys defined in [`ids`].
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom records (name, element, charge, position)
//! - [`residue`] - Residue records holding their member atoms in file order
//! - [`chain`] - Chains grouping residues
//! - [`system`] - The complete molecular system and its unit cell
//! - [`topology`] - Covalent bonds read from the topology file
//! - [`ids`] - Key types for atoms, residues, and chains
//!
//! ## Usage
//!
//! ```
//! use mesmy::core::models::{atom::Atom, system::MolecularSystem};
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! let residue_id = system.add_residue(chain_id, 1, "ALA").unwrap();
//! system.add_atom_to_residue(residue_id, Atom::new("CA", residue_id));
//! assert_eq!(system.atom_count(), 1);
//! ```

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod system;
pub mod topology;
