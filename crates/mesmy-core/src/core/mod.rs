//! # Core Module
//!
//! The building blocks of mesmy:
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains, bonds and the system
//! - **File I/O** ([`io`]) - AMBER prmtop and inpcrd readers and the structure loader
//! - **Structural Knowledge** ([`topology`]) - Water classification and solute selection

pub mod io;
pub mod models;
pub mod topology;
