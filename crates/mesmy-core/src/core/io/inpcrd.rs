use super::traits::MolecularFile;
use crate::core::models::system::UnitCell;
use nalgebra::{Point3, Vector3};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Width of a coordinate field (Fortran `F12.7`).
const FIELD_WIDTH: usize = 12;
const BOX_VALUE_COUNT: usize = 6;

/// Contents of an AMBER ASCII coordinate/restart file.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub title: String,
    /// Simulation time in ps, present in restart files.
    pub time: Option<f64>,
    /// Atom positions in Angstroms, in file order.
    pub positions: Vec<Point3<f64>>,
    pub velocities: Option<Vec<Vector3<f64>>>,
    pub unit_cell: Option<UnitCell>,
}

impl Coordinates {
    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }
}

#[derive(Debug, Error)]
pub enum InpcrdError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: InpcrdParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(&'static str),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

#[derive(Debug, Error)]
pub enum InpcrdParseErrorKind {
    #[error("Invalid atom count (value: '{0}')")]
    InvalidAtomCount(String),
    #[error("Invalid time value (value: '{0}')")]
    InvalidTime(String),
    #[error("Invalid float in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
}

fn parse_values(line_num: usize, line: &str, values: &mut Vec<f64>) -> Result<(), InpcrdError> {
    let mut column = 0;
    let mut rest = line;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(FIELD_WIDTH)
            .map_or(rest.len(), |(idx, _)| idx);
        let (field, tail) = rest.split_at(end);
        let trimmed = field.trim();
        if !trimmed.is_empty() {
            let value = trimmed.parse().map_err(|_| InpcrdError::Parse {
                line: line_num,
                kind: InpcrdParseErrorKind::InvalidFloat {
                    columns: format!("{}-{}", column + 1, column + FIELD_WIDTH),
                    value: trimmed.to_string(),
                },
            })?;
            values.push(value);
        }
        column += FIELD_WIDTH;
        rest = tail;
    }
    Ok(())
}

fn to_vectors(values: &[f64]) -> impl Iterator<Item = Vector3<f64>> + '_ {
    values
        .chunks_exact(3)
        .map(|xyz| Vector3::new(xyz[0], xyz[1], xyz[2]))
}

/// Reader for AMBER ASCII inpcrd/rst7 files.
///
/// The data after the coordinates is interpreted by count: nothing, a
/// six-value box, `3 * N` velocities, or velocities followed by a box. When
/// `3 * N == 6` a trailing block of six values is read as a box.
pub struct InpcrdFile;

impl MolecularFile for InpcrdFile {
    type Output = Coordinates;
    type Error = InpcrdError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut lines = reader.lines();

        let title = lines
            .next()
            .ok_or(InpcrdError::MissingRecord("title line"))??
            .trim_end()
            .to_string();

        let count_line = lines
            .next()
            .ok_or(InpcrdError::MissingRecord("atom count line"))??;
        let mut tokens = count_line.split_whitespace();
        let count_str = tokens
            .next()
            .ok_or(InpcrdError::MissingRecord("atom count"))?;
        let n_atoms: usize = count_str.parse().map_err(|_| InpcrdError::Parse {
            line: 2,
            kind: InpcrdParseErrorKind::InvalidAtomCount(count_str.to_string()),
        })?;
        let time = tokens
            .next()
            .map(|t| {
                t.parse::<f64>().map_err(|_| InpcrdError::Parse {
                    line: 2,
                    kind: InpcrdParseErrorKind::InvalidTime(t.to_string()),
                })
            })
            .transpose()?;

        let n_coords = n_atoms.checked_mul(3).ok_or_else(|| InpcrdError::Parse {
            line: 2,
            kind: InpcrdParseErrorKind::InvalidAtomCount(count_str.to_string()),
        })?;

        // The count is untrusted; the buffer grows with what is actually read.
        let mut values = Vec::new();
        for (line_idx, line_res) in lines.enumerate() {
            let line = line_res?;
            parse_values(line_idx + 3, &line, &mut values)?;
        }

        if values.len() < n_coords {
            return Err(InpcrdError::Inconsistency(format!(
                "expected {} coordinate values for {} atoms, found {}",
                n_coords,
                n_atoms,
                values.len()
            )));
        }
        let (coords, extra) = values.split_at(n_coords);

        let (velocity_values, box_values) = match extra.len() {
            0 => (None, None),
            BOX_VALUE_COUNT => (None, Some(extra)),
            n if n == n_coords => (Some(extra), None),
            n if n == n_coords + BOX_VALUE_COUNT => {
                let (v, b) = extra.split_at(n_coords);
                (Some(v), Some(b))
            }
            n => {
                return Err(InpcrdError::Inconsistency(format!(
                    "{} unexpected values after the coordinates of {} atoms",
                    n, n_atoms
                )));
            }
        };

        let positions: Vec<Point3<f64>> = to_vectors(coords).map(Point3::from).collect();
        let velocities = velocity_values.map(|v| to_vectors(v).collect());
        let unit_cell = box_values.map(|b| UnitCell {
            lengths: Vector3::new(b[0], b[1], b[2]),
            angles: Vector3::new(b[3], b[4], b[5]),
        });

        debug!(
            "Read {} atom positions (velocities: {}, box: {}).",
            positions.len(),
            velocities.is_some(),
            unit_cell.is_some()
        );

        Ok(Coordinates {
            title,
            time,
            positions,
            velocities,
            unit_cell,
        })
    }
}
