use crate::core::models::residue::Residue;
use phf::{Set, phf_set};

/// Residue names treated as water, following the convention of the common
/// trajectory-analysis toolkits. Ions and other solvent species are not water.
static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "SOL", "WAT", "TIP", "TIP2", "TIP3", "TIP4", "T3P", "T4P", "T5P", "T3H",
};

pub fn is_water_residue_name(name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(name.trim())
}

/// Decides whether a residue is water.
pub trait WaterClassifier {
    fn is_water(&self, residue: &Residue) -> bool;
}

impl<F> WaterClassifier for F
where
    F: Fn(&Residue) -> bool,
{
    fn is_water(&self, residue: &Residue) -> bool {
        self(residue)
    }
}

/// The default classifier: matches the residue name against a fixed set of
/// water residue names (case-sensitive, surrounding whitespace ignored).
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidueNameClassifier;

impl WaterClassifier for ResidueNameClassifier {
    fn is_water(&self, residue: &Residue) -> bool {
        is_water_residue_name(&residue.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::system::MolecularSystem;

    fn residue_named(name: &str) -> Residue {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let residue_id = system.add_residue(chain_id, 1, name).unwrap();
        system.residue(residue_id).unwrap().clone()
    }

    #[test]
    fn recognizes_standard_water_names() {
        for name in ["HOH", "SOL", "WAT", "TIP3", "T3P", "T4P", "TIP4", "T5P"] {
            assert!(is_water_residue_name(name), "{} should be water", name);
        }
    }

    #[test]
    fn ions_and_ligands_are_not_water() {
        for name in ["Na+", "Cl-", "NA", "CL", "K+", "LIG", "ALA", "MOH", ""] {
            assert!(!is_water_residue_name(name), "{} should not be water", name);
        }
    }

    #[test]
    fn name_matching_trims_but_is_case_sensitive() {
        assert!(is_water_residue_name(" WAT "));
        assert!(!is_water_residue_name("wat"));
    }

    #[test]
    fn default_classifier_uses_residue_name() {
        let classifier = ResidueNameClassifier;
        assert!(classifier.is_water(&residue_named("WAT")));
        assert!(!classifier.is_water(&residue_named("GLY")));
    }

    #[test]
    fn closures_act_as_classifiers() {
        let everything_is_water = |_: &Residue| true;
        assert!(everything_is_water.is_water(&residue_named("ALA")));
    }
}
