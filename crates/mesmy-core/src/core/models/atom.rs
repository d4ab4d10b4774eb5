use super::ids::ResidueId;
use nalgebra::Point3;
use std::fmt;

/// Chemical element of an atom, limited to the elements found in typical
/// solvated biomolecular systems.
///
/// Elements outside this table are reported as [`Element::Unknown`]; nothing
/// in the loader depends on a precise element assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Sodium,
    Magnesium,
    Phosphorus,
    Sulfur,
    Chlorine,
    Potassium,
    Calcium,
    Iron,
    Zinc,
    Bromine,
    Iodine,
    #[default]
    Unknown,
}

// (element, atomic number, standard atomic weight)
const ELEMENT_TABLE: [(Element, u8, f64); 16] = [
    (Element::Hydrogen, 1, 1.008),
    (Element::Carbon, 6, 12.011),
    (Element::Nitrogen, 7, 14.007),
    (Element::Oxygen, 8, 15.999),
    (Element::Fluorine, 9, 18.998),
    (Element::Sodium, 11, 22.990),
    (Element::Magnesium, 12, 24.305),
    (Element::Phosphorus, 15, 30.974),
    (Element::Sulfur, 16, 32.06),
    (Element::Chlorine, 17, 35.45),
    (Element::Potassium, 19, 39.098),
    (Element::Calcium, 20, 40.078),
    (Element::Iron, 26, 55.845),
    (Element::Zinc, 30, 65.38),
    (Element::Bromine, 35, 79.904),
    (Element::Iodine, 53, 126.904),
];

/// Largest mass difference (in daltons) accepted when guessing an element
/// from a topology mass. Wide enough to absorb hydrogen mass repartitioning.
const MASS_GUESS_TOLERANCE: f64 = 2.5;

impl Element {
    /// Looks up an element by atomic number.
    pub fn from_atomic_number(number: i64) -> Self {
        ELEMENT_TABLE
            .iter()
            .find(|(_, z, _)| i64::from(*z) == number)
            .map_or(Element::Unknown, |(element, _, _)| *element)
    }

    /// Guesses the element whose standard atomic weight is closest to `mass`.
    ///
    /// Returns [`Element::Unknown`] for non-positive masses (e.g. extra points)
    /// or when no table entry lies within the tolerance.
    pub fn from_mass(mass: f64) -> Self {
        if mass.is_nan() || mass <= 0.0 {
            return Element::Unknown;
        }
        ELEMENT_TABLE
            .iter()
            .map(|(element, _, weight)| (*element, (weight - mass).abs()))
            .filter(|(_, diff)| *diff <= MASS_GUESS_TOLERANCE)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(Element::Unknown, |(element, _)| element)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Fluorine => "F",
            Element::Sodium => "Na",
            Element::Magnesium => "Mg",
            Element::Phosphorus => "P",
            Element::Sulfur => "S",
            Element::Chlorine => "Cl",
            Element::Potassium => "K",
            Element::Calcium => "Ca",
            Element::Iron => "Fe",
            Element::Zinc => "Zn",
            Element::Bromine => "Br",
            Element::Iodine => "I",
            Element::Unknown => "X",
        }
    }

    pub fn is_hydrogen(&self) -> bool {
        *self == Element::Hydrogen
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An atom of the parsed system.
///
/// Topology-derived fields are filled in by the prmtop reader; the position
/// is assigned afterwards from the coordinate file.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 1-based index of the atom in file order.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "O", "H1").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The chemical element, if it could be determined.
    pub element: Element,
    /// The AMBER atom type (e.g., "CT", "OW").
    pub force_field_type: String,
    /// The partial atomic charge in elementary charge units.
    pub partial_charge: f64,
    /// The atomic mass in daltons.
    pub mass: f64,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with default values for everything but the name
    /// and parent residue.
    pub fn new(name: &str, residue_id: ResidueId) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            residue_id,
            element: Element::default(),
            force_field_type: String::new(),
            partial_charge: 0.0,
            mass: 0.0,
            position: Point3::origin(),
        }
    }
}
