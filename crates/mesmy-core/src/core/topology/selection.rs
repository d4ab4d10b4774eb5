use super::solvent::{ResidueNameClassifier, WaterClassifier};
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::system::MolecularSystem;
use tracing::debug;

/// The non-water part of a system: residues and atoms kept in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoluteSelection {
    residues: Vec<ResidueId>,
    atoms: Vec<AtomId>,
}

impl SoluteSelection {
    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    /// Number of solute residues; this is the upper bound of the workflow's
    /// restraint masks.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// Selects every residue not classified as water by the default classifier.
pub fn select_non_water(system: &MolecularSystem) -> SoluteSelection {
    select_non_water_with(system, &ResidueNameClassifier)
}

/// Selects every residue for which `classifier` reports non-water, together
/// with all of its atoms.
pub fn select_non_water_with<C: WaterClassifier + ?Sized>(
    system: &MolecularSystem,
    classifier: &C,
) -> SoluteSelection {
    let mut selection = SoluteSelection::default();
    let mut water_residues = 0usize;

    for (residue_id, residue) in system.residues_iter() {
        if classifier.is_water(residue) {
            water_residues += 1;
            continue;
        }
        selection.residues.push(residue_id);
        selection.atoms.extend_from_slice(residue.atoms());
    }

    debug!(
        "Solute selection: {} residues / {} atoms kept, {} water residues skipped.",
        selection.residue_count(),
        selection.atom_count(),
        water_residues
    );
    selection
}
