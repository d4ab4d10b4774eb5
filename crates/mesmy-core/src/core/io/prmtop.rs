use super::traits::MolecularFile;
use crate::core::models::atom::{Atom, Element};
use crate::core::models::ids::AtomId;
use crate::core::models::system::MolecularSystem;
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// AMBER stores partial charges pre-multiplied by this factor.
pub const AMBER_CHARGE_FACTOR: f64 = 18.2223;

const POINTER_NATOM: usize = 0;
const POINTER_NRES: usize = 11;
const POINTER_IFBOX: usize = 27;

const DEFAULT_CHAIN_ID: char = 'A';

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrmtopMetadata {
    /// Contents of the `%VERSION` line, if any.
    pub version: Option<String>,
    /// The `TITLE` (or `CTITLE`) section, trimmed.
    pub title: String,
    /// The raw `POINTERS` section.
    pub pointers: Vec<i64>,
}

impl PrmtopMetadata {
    /// Whether the topology declares a periodic box (`IFBOX > 0`).
    pub fn is_periodic(&self) -> bool {
        self.pointers
            .get(POINTER_IFBOX)
            .is_some_and(|&ifbox| ifbox > 0)
    }
}

#[derive(Debug, Error)]
pub enum PrmtopError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PrmtopParseErrorKind,
    },
    #[error("Missing required section: %FLAG {0}")]
    MissingSection(&'static str),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("No %FLAG records found; not an AMBER7 topology file")]
    NotAmber7,
}

#[derive(Debug, Error)]
pub enum PrmtopParseErrorKind {
    #[error("Invalid integer in section {section} (value: '{value}')")]
    InvalidInt { section: String, value: String },
    #[error("Invalid float in section {section} (value: '{value}')")]
    InvalidFloat { section: String, value: String },
    #[error("Unrecognized format specifier '{0}'")]
    InvalidFormat(String),
}

/// Fixed field width taken from a `%FORMAT(nXw[.d])` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldFormat {
    width: usize,
    /// Character (`a`) fields, where a blank field is a value.
    text: bool,
}

impl FieldFormat {
    fn parse(spec: &str) -> Option<Self> {
        let letter_pos = spec.find(|c: char| c.is_ascii_alphabetic())?;
        if !spec[..letter_pos].chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let text = spec[letter_pos..].starts_with(['a', 'A']);
        let width_str = spec[letter_pos + 1..].split('.').next()?;
        let width: usize = width_str.trim().parse().ok()?;
        (width > 0).then_some(Self { width, text })
    }
}

fn split_fixed(line: &str, width: usize) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        let (field, tail) = rest.split_at(end);
        rest = tail;
        Some(field)
    })
}

#[derive(Debug, Default)]
struct RawSection {
    format: Option<FieldFormat>,
    lines: Vec<(usize, String)>,
}

impl RawSection {
    /// Splits every data line into fields. Blank fields at line ends are
    /// dropped, except in character sections where they are values.
    fn fields(&self) -> Vec<(usize, &str)> {
        let keep_blank = self.format.is_some_and(|format| format.text);
        let mut fields = Vec::new();
        for (line_num, line) in &self.lines {
            let mut line_fields: Vec<&str> = match self.format {
                Some(format) => split_fixed(line, format.width).collect(),
                None => line.split_whitespace().collect(),
            };
            while !keep_blank && line_fields.last().is_some_and(|f| f.trim().is_empty()) {
                line_fields.pop();
            }
            fields.extend(line_fields.into_iter().map(|f| (*line_num, f)));
        }
        fields
    }
}

struct SectionTable {
    sections: HashMap<String, RawSection>,
    version: Option<String>,
}

impl SectionTable {
    fn read(reader: &mut impl BufRead) -> Result<Self, PrmtopError> {
        let mut sections = HashMap::new();
        let mut version = None;
        let mut current: Option<(String, RawSection)> = None;

        for (line_idx, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_idx + 1;

            if let Some(rest) = line.strip_prefix("%VERSION") {
                version = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix("%FLAG") {
                if let Some((name, section)) = current.take() {
                    sections.insert(name, section);
                }
                current = Some((rest.trim().to_string(), RawSection::default()));
            } else if let Some(rest) = line.strip_prefix("%FORMAT") {
                let Some((_, section)) = current.as_mut() else {
                    return Err(PrmtopError::NotAmber7);
                };
                let spec = rest.trim().trim_start_matches('(').trim_end_matches(')');
                let format = FieldFormat::parse(spec).ok_or_else(|| PrmtopError::Parse {
                    line: line_num,
                    kind: PrmtopParseErrorKind::InvalidFormat(rest.trim().to_string()),
                })?;
                section.format = Some(format);
            } else if line.starts_with("%COMMENT") {
                continue;
            } else {
                match current.as_mut() {
                    Some((_, section)) => section.lines.push((line_num, line)),
                    None if line.trim().is_empty() => {}
                    None => return Err(PrmtopError::NotAmber7),
                }
            }
        }

        if let Some((name, section)) = current {
            sections.insert(name, section);
        }
        if sections.is_empty() {
            return Err(PrmtopError::NotAmber7);
        }
        trace!("Read {} %FLAG sections from topology.", sections.len());

        Ok(Self { sections, version })
    }

    /// String values of a section, cut to `expected` entries so that
    /// column padding after the last value is not read as data.
    fn strings(&self, name: &str, expected: usize) -> Option<Vec<String>> {
        let section = self.sections.get(name)?;
        Some(
            section
                .fields()
                .into_iter()
                .take(expected)
                .map(|(_, field)| field.trim().to_string())
                .collect(),
        )
    }

    /// Raw data lines of a free-text section, joined and trimmed.
    fn text(&self, name: &str) -> Option<String> {
        let section = self.sections.get(name)?;
        let joined: Vec<&str> = section.lines.iter().map(|(_, line)| line.trim_end()).collect();
        Some(joined.join(" ").trim().to_string())
    }

    fn numbers<T: FromStr>(
        &self,
        name: &str,
        invalid: fn(String, String) -> PrmtopParseErrorKind,
    ) -> Result<Option<Vec<T>>, PrmtopError> {
        let Some(section) = self.sections.get(name) else {
            return Ok(None);
        };
        section
            .fields()
            .into_iter()
            .map(|(line, field)| (line, field.trim()))
            .filter(|(_, field)| !field.is_empty())
            .map(|(line, field)| {
                field.parse().map_err(|_| PrmtopError::Parse {
                    line,
                    kind: invalid(name.to_string(), field.to_string()),
                })
            })
            .collect::<Result<Vec<T>, _>>()
            .map(Some)
    }

    fn integers(&self, name: &str) -> Result<Option<Vec<i64>>, PrmtopError> {
        self.numbers(name, |section, value| PrmtopParseErrorKind::InvalidInt {
            section,
            value,
        })
    }

    fn floats(&self, name: &str) -> Result<Option<Vec<f64>>, PrmtopError> {
        self.numbers(name, |section, value| PrmtopParseErrorKind::InvalidFloat {
            section,
            value,
        })
    }
}

fn to_count(value: i64, what: &str) -> Result<usize, PrmtopError> {
    usize::try_from(value).map_err(|_| {
        PrmtopError::Inconsistency(format!("POINTERS field {} is negative ({})", what, value))
    })
}

fn ensure_len(section: &str, actual: usize, expected: usize) -> Result<(), PrmtopError> {
    if actual < expected {
        return Err(PrmtopError::Inconsistency(format!(
            "{} has {} entries, expected {}",
            section, actual, expected
        )));
    }
    Ok(())
}

fn optional_per_item<T>(
    values: Option<Vec<T>>,
    section: &str,
    expected: usize,
) -> Result<Option<Vec<T>>, PrmtopError> {
    match values {
        Some(values) => {
            ensure_len(section, values.len(), expected)?;
            Ok(Some(values))
        }
        None => Ok(None),
    }
}

fn residue_atom_ranges(pointers: &[i64], n_atoms: usize) -> Result<Vec<Range<usize>>, PrmtopError> {
    let mut starts = Vec::with_capacity(pointers.len());
    for (res_idx, &pointer) in pointers.iter().enumerate() {
        if pointer < 1 || pointer as usize > n_atoms {
            return Err(PrmtopError::Inconsistency(format!(
                "RESIDUE_POINTER of residue {} is {}, outside 1..={}",
                res_idx + 1,
                pointer,
                n_atoms
            )));
        }
        starts.push(pointer as usize - 1);
    }

    match starts.first() {
        Some(&first) if first != 0 => {
            return Err(PrmtopError::Inconsistency(format!(
                "first residue starts at atom {} instead of atom 1",
                first + 1
            )));
        }
        None if n_atoms > 0 => {
            return Err(PrmtopError::Inconsistency(format!(
                "topology has {} atoms but no residues",
                n_atoms
            )));
        }
        _ => {}
    }

    let mut ranges = Vec::with_capacity(starts.len());
    for (res_idx, &start) in starts.iter().enumerate() {
        let end = starts.get(res_idx + 1).copied().unwrap_or(n_atoms);
        if end <= start {
            return Err(PrmtopError::Inconsistency(format!(
                "residue {} has no atoms (RESIDUE_POINTER must be strictly increasing)",
                res_idx + 1
            )));
        }
        ranges.push(start..end);
    }
    Ok(ranges)
}

fn add_bonds(
    system: &mut MolecularSystem,
    atom_ids: &[AtomId],
    section: &str,
    raw: &[i64],
) -> Result<(), PrmtopError> {
    if raw.len() % 3 != 0 {
        return Err(PrmtopError::Inconsistency(format!(
            "{} has {} values, expected triplets",
            section,
            raw.len()
        )));
    }
    let resolve = |coord_index: i64| -> Result<AtomId, PrmtopError> {
        usize::try_from(coord_index / 3)
            .ok()
            .filter(|_| coord_index >= 0)
            .and_then(|idx| atom_ids.get(idx).copied())
            .ok_or_else(|| {
                PrmtopError::Inconsistency(format!(
                    "{} references atom coordinate index {} outside the topology",
                    section, coord_index
                ))
            })
    };
    for triplet in raw.chunks_exact(3) {
        let atom1 = resolve(triplet[0])?;
        let atom2 = resolve(triplet[1])?;
        system.add_bond(atom1, atom2).ok_or_else(|| {
            PrmtopError::Inconsistency(format!("{} bond references a missing atom", section))
        })?;
    }
    Ok(())
}

/// Reader for AMBER7 `%FLAG`-style topology (prmtop/parm7) files.
pub struct PrmtopFile;

impl MolecularFile for PrmtopFile {
    type Output = (MolecularSystem, PrmtopMetadata);
    type Error = PrmtopError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let table = SectionTable::read(reader)?;

        let pointers = table
            .integers("POINTERS")?
            .ok_or(PrmtopError::MissingSection("POINTERS"))?;
        ensure_len("POINTERS", pointers.len(), POINTER_NRES + 1)?;
        let n_atoms = to_count(pointers[POINTER_NATOM], "NATOM")?;
        let n_residues = to_count(pointers[POINTER_NRES], "NRES")?;
        debug!(
            "Topology declares {} atoms in {} residues.",
            n_atoms, n_residues
        );

        let atom_names = table
            .strings("ATOM_NAME", n_atoms)
            .ok_or(PrmtopError::MissingSection("ATOM_NAME"))?;
        ensure_len("ATOM_NAME", atom_names.len(), n_atoms)?;

        let residue_labels = table
            .strings("RESIDUE_LABEL", n_residues)
            .ok_or(PrmtopError::MissingSection("RESIDUE_LABEL"))?;
        ensure_len("RESIDUE_LABEL", residue_labels.len(), n_residues)?;

        let residue_pointers = table
            .integers("RESIDUE_POINTER")?
            .ok_or(PrmtopError::MissingSection("RESIDUE_POINTER"))?;
        ensure_len("RESIDUE_POINTER", residue_pointers.len(), n_residues)?;
        let residue_ranges = residue_atom_ranges(&residue_pointers[..n_residues], n_atoms)?;

        let charges = optional_per_item(table.floats("CHARGE")?, "CHARGE", n_atoms)?;
        let masses = optional_per_item(table.floats("MASS")?, "MASS", n_atoms)?;
        let atomic_numbers =
            optional_per_item(table.integers("ATOMIC_NUMBER")?, "ATOMIC_NUMBER", n_atoms)?;
        let atom_types = optional_per_item(
            table.strings("AMBER_ATOM_TYPE", n_atoms),
            "AMBER_ATOM_TYPE",
            n_atoms,
        )?;
        let chain_labels = table
            .strings("RESIDUE_CHAINID", n_residues)
            .filter(|labels| {
                let complete = labels.len() == n_residues;
                if !complete {
                    warn!(
                        "RESIDUE_CHAINID has {} entries for {} residues; using chain '{}' throughout.",
                        labels.len(),
                        n_residues,
                        DEFAULT_CHAIN_ID
                    );
                }
                complete
            });

        let mut system = MolecularSystem::new();
        let mut atom_ids = Vec::with_capacity(n_atoms);

        for (res_idx, atom_range) in residue_ranges.into_iter().enumerate() {
            let chain_char = chain_labels
                .as_ref()
                .and_then(|labels| labels[res_idx].chars().next())
                .unwrap_or(DEFAULT_CHAIN_ID);
            let chain_id = system.add_chain(chain_char);
            let residue_id = system
                .add_residue(chain_id, res_idx as isize + 1, &residue_labels[res_idx])
                .ok_or_else(|| {
                    PrmtopError::Inconsistency(format!("could not create residue {}", res_idx + 1))
                })?;

            for atom_idx in atom_range {
                let mut atom = Atom::new(&atom_names[atom_idx], residue_id);
                atom.serial = atom_idx + 1;
                if let Some(charges) = &charges {
                    atom.partial_charge = charges[atom_idx] / AMBER_CHARGE_FACTOR;
                }
                if let Some(masses) = &masses {
                    atom.mass = masses[atom_idx];
                }
                if let Some(types) = &atom_types {
                    atom.force_field_type = types[atom_idx].clone();
                }
                atom.element = match atomic_numbers.as_ref().map(|z| z[atom_idx]) {
                    Some(z) if z > 0 => Element::from_atomic_number(z),
                    _ => Element::from_mass(atom.mass),
                };

                let atom_id = system.add_atom_to_residue(residue_id, atom).ok_or_else(|| {
                    PrmtopError::Inconsistency(format!("could not add atom {}", atom_idx + 1))
                })?;
                atom_ids.push(atom_id);
            }
        }

        for section in ["BONDS_INC_HYDROGEN", "BONDS_WITHOUT_HYDROGEN"] {
            if let Some(raw) = table.integers(section)? {
                add_bonds(&mut system, &atom_ids, section, &raw)?;
            }
        }

        let title = table
            .text("TITLE")
            .or_else(|| table.text("CTITLE"))
            .unwrap_or_default();

        let metadata = PrmtopMetadata {
            version: table.version,
            title,
            pointers,
        };
        Ok((system, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::fixtures::{BACKBONE, N_CA, WATER, prmtop_text};
    use std::io::Cursor;

    fn read(text: &str) -> Result<(MolecularSystem, PrmtopMetadata), PrmtopError> {
        PrmtopFile::read_from(&mut Cursor::new(text.as_bytes()))
    }

    #[test]
    fn field_format_parses_common_specifiers() {
        let text = |width| Some(FieldFormat { width, text: true });
        let numeric = |width| Some(FieldFormat { width, text: false });
        assert_eq!(FieldFormat::parse("20a4"), text(4));
        assert_eq!(FieldFormat::parse("10I8"), numeric(8));
        assert_eq!(FieldFormat::parse("5E16.8"), numeric(16));
        assert_eq!(FieldFormat::parse("1a80"), text(80));
        assert_eq!(FieldFormat::parse("a4"), text(4));
        assert_eq!(FieldFormat::parse("xyz"), None);
        assert_eq!(FieldFormat::parse("20a0"), None);
        assert_eq!(FieldFormat::parse("20"), None);
    }

    #[test]
    fn split_fixed_keeps_adjacent_fields_apart() {
        let fields: Vec<&str> = split_fixed("N   CA  C   O", 4).collect();
        assert_eq!(fields, vec!["N   ", "CA  ", "C   ", "O"]);
        assert_eq!(split_fixed("", 4).count(), 0);
    }

    #[test]
    fn reads_residues_atoms_and_bonds() {
        let text = prmtop_text(&[("ALA", BACKBONE), ("WAT", WATER), ("WAT", WATER)]);
        let (system, metadata) = read(&text).unwrap();

        assert_eq!(system.atom_count(), 10);
        assert_eq!(system.residue_count(), 3);
        let labels: Vec<_> = system.residues_iter().map(|(_, r)| r.name.clone()).collect();
        assert_eq!(labels, vec!["ALA", "WAT", "WAT"]);
        let numbers: Vec<_> = system.residues_iter().map(|(_, r)| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let serials: Vec<_> = system.atoms_iter().map(|(_, a)| a.serial).collect();
        assert_eq!(serials, (1..=10).collect::<Vec<_>>());

        // star bonds from the first atom of each residue: 3 + 2 + 2
        assert_eq!(system.bonds().len(), 7);
        assert_eq!(metadata.title, "FIXTURE");
        assert!(metadata.version.is_some());
        assert!(!metadata.is_periodic());
    }

    #[test]
    fn atom_properties_come_from_optional_sections() {
        let text = prmtop_text(&[("WAT", WATER)]);
        let (system, _) = read(&text).unwrap();
        let (_, oxygen) = system.atoms_iter().next().unwrap();

        assert_eq!(oxygen.name, "O");
        assert_eq!(oxygen.element, Element::Oxygen);
        assert_eq!(oxygen.force_field_type, "OW");
        assert!((oxygen.partial_charge - (-0.834)).abs() < 1e-6);
        assert!((oxygen.mass - 16.0).abs() < 1e-6);
    }

    #[test]
    fn every_residue_belongs_to_default_chain_without_chain_ids() {
        let text = prmtop_text(&[("ALA", N_CA), ("WAT", WATER)]);
        let (system, _) = read(&text).unwrap();
        assert_eq!(system.chains_iter().count(), 1);
        let chain_id = system.find_chain_by_id('A').unwrap();
        assert_eq!(system.chain(chain_id).unwrap().residues().len(), 2);
    }

    #[test]
    fn residue_chain_ids_create_chains() {
        let mut text = prmtop_text(&[("ALA", N_CA), ("GLY", N_CA)]);
        text.push_str("%FLAG RESIDUE_CHAINID\n%FORMAT(20a4)\nA   B   \n");
        let (system, _) = read(&text).unwrap();
        assert_eq!(system.chains_iter().count(), 2);
        assert!(system.find_chain_by_id('B').is_some());
    }

    #[test]
    fn blank_chain_id_at_line_end_is_a_value() {
        let mut text = prmtop_text(&[("ALA", N_CA), ("WAT", WATER)]);
        text.push_str("%FLAG RESIDUE_CHAINID\n%FORMAT(20a4)\nB       \n");
        let (system, _) = read(&text).unwrap();

        let chains: Vec<char> = system
            .residues_iter()
            .map(|(_, r)| system.chain(r.chain_id).unwrap().id)
            .collect();
        assert_eq!(chains, vec!['B', DEFAULT_CHAIN_ID]);
    }

    #[test]
    fn short_chain_id_section_falls_back_to_default_chain() {
        let mut text = prmtop_text(&[("ALA", N_CA), ("WAT", WATER)]);
        text.push_str("%FLAG RESIDUE_CHAINID\n%FORMAT(20a4)\nB\n");
        let (system, _) = read(&text).unwrap();

        assert_eq!(system.residue_count(), 2);
        assert_eq!(system.chains_iter().count(), 1);
        assert!(system.find_chain_by_id(DEFAULT_CHAIN_ID).is_some());
    }

    #[test]
    fn padding_after_the_last_name_is_ignored() {
        let text = prmtop_text(&[("WAT", WATER)]).replace("O   H1  H2  \n", "O   H1  H2          \n");
        let (system, _) = read(&text).unwrap();
        let names: Vec<_> = system.atoms_iter().map(|(_, a)| a.name.clone()).collect();
        assert_eq!(names, vec!["O", "H1", "H2"]);
    }

    #[test]
    fn element_falls_back_to_mass_without_atomic_numbers() {
        let text = prmtop_text(&[("WAT", WATER)]).replace("%FLAG ATOMIC_NUMBER", "%FLAG IGNORED");
        let (system, _) = read(&text).unwrap();
        let elements: Vec<_> = system.atoms_iter().map(|(_, a)| a.element).collect();
        assert_eq!(
            elements,
            vec![Element::Oxygen, Element::Hydrogen, Element::Hydrogen]
        );
    }

    #[test]
    fn reads_fortran_exponent_floats() {
        let text = "\
%VERSION  VERSION_STAMP = V0001.000
%FLAG POINTERS
%FORMAT(10I8)
       1       1       0       0       0       0       0       0       0       0
       0       1
%FLAG ATOM_NAME
%FORMAT(20a4)
NA+ 
%FLAG CHARGE
%FORMAT(5E16.8)
  1.82223000E+01
%FLAG MASS
%FORMAT(5E16.8)
  2.29900000E+01
%FLAG RESIDUE_LABEL
%FORMAT(20a4)
Na+ 
%FLAG RESIDUE_POINTER
%FORMAT(10I8)
       1
";
        let (system, metadata) = read(text).unwrap();
        let (_, sodium) = system.atoms_iter().next().unwrap();
        assert_eq!(sodium.name, "NA+");
        assert!((sodium.partial_charge - 1.0).abs() < 1e-9);
        assert_eq!(sodium.element, Element::Sodium);
        assert_eq!(metadata.title, "");
    }

    #[test]
    fn missing_required_section_is_reported() {
        let text = prmtop_text(&[("WAT", WATER)]).replace("%FLAG RESIDUE_LABEL", "%FLAG RENAMED");
        assert!(matches!(
            read(&text),
            Err(PrmtopError::MissingSection("RESIDUE_LABEL"))
        ));
    }

    #[test]
    fn non_amber7_input_is_rejected() {
        assert!(matches!(read("ATOM      1  N   ALA A   1\n"), Err(PrmtopError::NotAmber7)));
        assert!(matches!(read(""), Err(PrmtopError::NotAmber7)));
    }

    #[test]
    fn invalid_integer_reports_line_and_section() {
        let text = "%FLAG POINTERS\n%FORMAT(10I8)\n       1     abc\n";
        match read(text) {
            Err(PrmtopError::Parse { line, kind }) => {
                assert_eq!(line, 3);
                assert!(matches!(
                    kind,
                    PrmtopParseErrorKind::InvalidInt { ref section, ref value }
                        if section == "POINTERS" && value == "abc"
                ));
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn bad_format_line_is_a_parse_error() {
        let text = "%FLAG POINTERS\n%FORMAT(garbage)\n";
        assert!(matches!(
            read(text),
            Err(PrmtopError::Parse {
                line: 2,
                kind: PrmtopParseErrorKind::InvalidFormat(_)
            })
        ));
    }

    #[test]
    fn short_atom_name_table_is_inconsistent() {
        let text = prmtop_text(&[("WAT", WATER)]).replace("O   H1  H2  ", "O   H1  ");
        assert!(matches!(read(&text), Err(PrmtopError::Inconsistency(_))));
    }

    #[test]
    fn residue_pointer_ranges_are_validated() {
        assert_eq!(residue_atom_ranges(&[1, 3], 5).unwrap(), vec![0..2, 2..5]);
        assert!(residue_atom_ranges(&[2, 3], 5).is_err());
        assert!(residue_atom_ranges(&[1, 1], 5).is_err());
        assert!(residue_atom_ranges(&[1, 6], 5).is_err());
        assert!(residue_atom_ranges(&[0], 5).is_err());
        assert!(residue_atom_ranges(&[], 5).is_err());
        assert!(residue_atom_ranges(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_bond_is_inconsistent() {
        let mut text = prmtop_text(&[("WAT", WATER)]);
        text = text.replace(
            "%FLAG BONDS_WITHOUT_HYDROGEN\n%FORMAT(10I8)\n",
            "%FLAG BONDS_WITHOUT_HYDROGEN\n%FORMAT(10I8)\n       0      99       1\n",
        );
        assert!(matches!(read(&text), Err(PrmtopError::Inconsistency(_))));
    }
}
