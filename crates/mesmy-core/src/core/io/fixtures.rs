//! Text builders for small prmtop/inpcrd pairs used by the reader tests.

use super::prmtop::AMBER_CHARGE_FACTOR;

pub(crate) const WATER: &[&str] = &["O", "H1", "H2"];
pub(crate) const BACKBONE: &[&str] = &["N", "CA", "C", "O"];
pub(crate) const N_CA: &[&str] = &["N", "CA"];

fn atom_properties(name: &str) -> (i64, f64, f64, &'static str) {
    match name.chars().next() {
        Some('H') => (1, 1.008, 0.417, "HW"),
        Some('O') => (8, 16.0, -0.834, "OW"),
        Some('N') => (7, 14.01, -0.4157, "N"),
        Some('C') => (6, 12.01, 0.5973, "C"),
        _ => (0, 0.0, 0.0, "EP"),
    }
}

fn write_section(out: &mut String, flag: &str, format: &str, fields: &[String], per_line: usize) {
    out.push_str(&format!("%FLAG {}\n%FORMAT({})\n", flag, format));
    for chunk in fields.chunks(per_line) {
        out.push_str(&chunk.concat());
        out.push('\n');
    }
}

fn ints(values: impl IntoIterator<Item = i64>) -> Vec<String> {
    values.into_iter().map(|v| format!("{:>8}", v)).collect()
}

fn floats(values: impl IntoIterator<Item = f64>) -> Vec<String> {
    values.into_iter().map(|v| format!("{:>16.8E}", v)).collect()
}

fn labels<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values.into_iter().map(|v| format!("{:<4}", v)).collect()
}

/// Builds an AMBER7 topology for the given `(residue label, atom names)` list.
///
/// Each residue is bonded as a star around its first atom.
pub(crate) fn prmtop_text(residues: &[(&str, &[&str])]) -> String {
    let names: Vec<&str> = residues.iter().flat_map(|(_, atoms)| atoms.iter().copied()).collect();
    let n_atoms = names.len() as i64;

    let mut pointers = vec![0i64; 31];
    pointers[0] = n_atoms;
    pointers[11] = residues.len() as i64;

    let mut residue_pointers = Vec::new();
    let mut bonds_h = Vec::new();
    let mut bonds_heavy = Vec::new();
    let mut start = 0i64;
    for (_, atoms) in residues {
        residue_pointers.push(start + 1);
        for (offset, name) in atoms.iter().enumerate().skip(1) {
            let triplet = [3 * start, 3 * (start + offset as i64), 1];
            if name.starts_with('H') || atoms[0].starts_with('H') {
                bonds_h.extend(triplet);
            } else {
                bonds_heavy.extend(triplet);
            }
        }
        start += atoms.len() as i64;
    }

    let props: Vec<_> = names.iter().map(|n| atom_properties(n)).collect();

    let mut out = String::from("%VERSION  VERSION_STAMP = V0001.000  DATE = 01/01/24  12:00:00\n");
    write_section(&mut out, "TITLE", "20a4", &labels(["FIXTURE"]), 20);
    write_section(&mut out, "POINTERS", "10I8", &ints(pointers), 10);
    write_section(&mut out, "ATOM_NAME", "20a4", &labels(names.iter().copied()), 20);
    write_section(
        &mut out,
        "CHARGE",
        "5E16.8",
        &floats(props.iter().map(|p| p.2 * AMBER_CHARGE_FACTOR)),
        5,
    );
    write_section(&mut out, "ATOMIC_NUMBER", "10I8", &ints(props.iter().map(|p| p.0)), 10);
    write_section(&mut out, "MASS", "5E16.8", &floats(props.iter().map(|p| p.1)), 5);
    write_section(
        &mut out,
        "RESIDUE_LABEL",
        "20a4",
        &labels(residues.iter().map(|(label, _)| *label)),
        20,
    );
    write_section(&mut out, "RESIDUE_POINTER", "10I8", &ints(residue_pointers), 10);
    write_section(
        &mut out,
        "AMBER_ATOM_TYPE",
        "20a4",
        &labels(props.iter().map(|p| p.3)),
        20,
    );
    write_section(&mut out, "BONDS_INC_HYDROGEN", "10I8", &ints(bonds_h), 10);
    write_section(&mut out, "BONDS_WITHOUT_HYDROGEN", "10I8", &ints(bonds_heavy), 10);
    out
}

/// Builds an ASCII inpcrd for `n_atoms` atoms with deterministic coordinates.
pub(crate) fn inpcrd_text(n_atoms: usize, with_box: bool) -> String {
    let mut out = format!("FIXTURE\n{:>6}\n", n_atoms);
    let values: Vec<f64> = (0..n_atoms)
        .flat_map(|i| {
            let i = i as f64;
            [1.5 * i, -0.5 * i, 100.0 - i]
        })
        .collect();
    for chunk in values.chunks(6) {
        for value in chunk {
            out.push_str(&format!("{:12.7}", value));
        }
        out.push('\n');
    }
    if with_box {
        out.push_str("  40.0000000  41.0000000  42.0000000  90.0000000  90.0000000  90.0000000\n");
    }
    out
}
