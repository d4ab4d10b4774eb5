//! # Topology Module
//!
//! Residue-level classification of a loaded system.
//!
//! ## Key Components
//!
//! - [`solvent`] - The water predicate ([`solvent::WaterClassifier`]) and the
//!   default name-based classifier
//! - [`selection`] - Non-water ("solute") residue selection used to size the
//!   restraint masks of the generated workflow
//!
//! ## Usage
//!
//! ```
//! use mesmy::core::models::system::MolecularSystem;
//! use mesmy::core::topology::selection::select_non_water;
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! system.add_residue(chain_id, 1, "ALA");
//! system.add_residue(chain_id, 2, "WAT");
//!
//! let solute = select_non_water(&system);
//! assert_eq!(solute.residue_count(), 1);
//! ```

pub mod selection;
pub mod solvent;
