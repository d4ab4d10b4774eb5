//! Provides the structure loader: readers for AMBER topology and coordinate
//! files and the [`loader::load`] entry point combining them into a
//! [`MolecularSystem`](crate::core::models::system::MolecularSystem).

pub mod inpcrd;
pub mod loader;
pub mod prmtop;
pub mod traits;

#[cfg(test)]
pub(crate) mod fixtures;
