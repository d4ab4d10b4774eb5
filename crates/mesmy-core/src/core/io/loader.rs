use super::inpcrd::{Coordinates, InpcrdError, InpcrdFile};
use super::prmtop::{PrmtopError, PrmtopFile};
use super::traits::MolecularFile;
use crate::core::models::system::MolecularSystem;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a topology/coordinate pair.
///
/// `Topology` and `Coordinates` are format errors from the respective reader;
/// `Mismatch` means both files parsed but describe different atom counts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read topology file '{path}': {source}", path = path.display())]
    Topology {
        path: PathBuf,
        #[source]
        source: PrmtopError,
    },

    #[error("Failed to read coordinate file '{path}': {source}", path = path.display())]
    Coordinates {
        path: PathBuf,
        #[source]
        source: InpcrdError,
    },

    #[error(
        "Atom count mismatch: topology has {topology_atoms} atoms but coordinates have {coordinate_atoms}"
    )]
    Mismatch {
        topology_atoms: usize,
        coordinate_atoms: usize,
    },
}

impl LoadError {
    /// Whether this error comes from an unparseable file (as opposed to a
    /// well-formed but mismatched pair).
    pub fn is_format_error(&self) -> bool {
        matches!(self, LoadError::Topology { .. } | LoadError::Coordinates { .. })
    }
}

/// Loads a structural model from an AMBER coordinate file and its topology.
///
/// The topology is read first and defines atoms and residues; coordinates
/// (and the periodic box, if present) are then assigned in file order.
///
/// # Errors
///
/// Returns [`LoadError::Topology`] or [`LoadError::Coordinates`] if either file
/// cannot be parsed, and [`LoadError::Mismatch`] if their atom counts differ.
pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
    coordinate_path: P,
    topology_path: Q,
) -> Result<MolecularSystem, LoadError> {
    let coordinate_path = coordinate_path.as_ref();
    let topology_path = topology_path.as_ref();

    info!("Loading topology from {:?}", topology_path);
    let (system, metadata) =
        PrmtopFile::read_from_path(topology_path).map_err(|source| LoadError::Topology {
            path: topology_path.to_path_buf(),
            source,
        })?;
    debug!(
        "Topology '{}' parsed: {} atoms, {} residues, periodic: {}.",
        metadata.title,
        system.atom_count(),
        system.residue_count(),
        metadata.is_periodic()
    );

    info!("Loading coordinates from {:?}", coordinate_path);
    let coordinates =
        InpcrdFile::read_from_path(coordinate_path).map_err(|source| LoadError::Coordinates {
            path: coordinate_path.to_path_buf(),
            source,
        })?;

    assemble(system, coordinates)
}

/// Assigns parsed coordinates to a topology-derived system.
///
/// # Errors
///
/// Returns [`LoadError::Mismatch`] if the atom counts differ.
pub fn assemble(
    mut system: MolecularSystem,
    coordinates: Coordinates,
) -> Result<MolecularSystem, LoadError> {
    if system.atom_count() != coordinates.atom_count() {
        return Err(LoadError::Mismatch {
            topology_atoms: system.atom_count(),
            coordinate_atoms: coordinates.atom_count(),
        });
    }

    for ((_, atom), position) in system.atoms_iter_mut().zip(coordinates.positions) {
        atom.position = position;
    }
    system.set_unit_cell(coordinates.unit_cell);

    Ok(system)
}
