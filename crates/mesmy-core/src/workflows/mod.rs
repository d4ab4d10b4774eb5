//! # Workflows Module
//!
//! High-level entry points tying the structure loader and the residue
//! selection to the script generator.
//!
//! - **Equilibration Workflow** ([`equilibration`]) - Renders the multi-stage
//!   minimization/equilibration shell script for a topology/coordinate pair.
//! - **Protocol Template** ([`template`]) - The fixed protocol text and its
//!   placeholders.

pub mod equilibration;
pub mod template;
