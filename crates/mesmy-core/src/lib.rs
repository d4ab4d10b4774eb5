//! # mesmy Core Library
//!
//! Reads an AMBER topology/coordinate pair, counts the solute (non-water)
//! residues, and renders a shell script driving a nine-stage MD relaxation
//! and equilibration protocol sized to that solute.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Read-only data models (`MolecularSystem`),
//!   the AMBER file readers and loader, and residue classification.
//!
//! - **[`workflows`]: The Public API.** Ties loading, selection, and template
//!   rendering together into the single end-to-end operation used by the CLI.

pub mod core;
pub mod workflows;
