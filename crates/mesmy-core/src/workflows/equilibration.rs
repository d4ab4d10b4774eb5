use super::template::TEMPLATE;
use crate::core::io::loader::{self, LoadError};
use crate::core::topology::selection::select_non_water;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Path '{}' is not valid UTF-8 and cannot be written into the script", .0.display())]
    NonUtf8Path(PathBuf),
}

/// The values stamped into the protocol template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowParameters {
    pub topology_path: String,
    pub coordinate_path: String,
    pub solute_residue_count: usize,
}

impl WorkflowParameters {
    pub fn new(
        topology_path: impl Into<String>,
        coordinate_path: impl Into<String>,
        solute_residue_count: usize,
    ) -> Self {
        Self {
            topology_path: topology_path.into(),
            coordinate_path: coordinate_path.into(),
            solute_residue_count,
        }
    }

    fn value(&self, placeholder: &str) -> Option<Cow<'_, str>> {
        match placeholder {
            "prmtop" => Some(Cow::Borrowed(&self.topology_path)),
            "inpcrd" => Some(Cow::Borrowed(&self.coordinate_path)),
            "solute" => Some(Cow::Owned(self.solute_residue_count.to_string())),
            _ => None,
        }
    }

    /// Renders the protocol template with these parameters.
    pub fn render(&self) -> String {
        render_template(TEMPLATE, self)
    }
}

/// Substitutes `{name}` placeholders known to [`WorkflowParameters`] in one
/// pass. Substituted text is never re-scanned and unknown `{...}` sequences
/// are copied unchanged.
pub fn render_template(template: &str, params: &WorkflowParameters) -> String {
    let mut out = String::with_capacity(
        template.len() + params.topology_path.len() + params.coordinate_path.len(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substitution = after
            .find('}')
            .and_then(|close| params.value(&after[..close]).map(|value| (close, value)));
        match substitution {
            Some((close, value)) => {
                out.push_str(&value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Renders the workflow script for the given paths and solute residue count.
pub fn render(topology_path: &str, coordinate_path: &str, solute_residue_count: usize) -> String {
    WorkflowParameters::new(topology_path, coordinate_path, solute_residue_count).render()
}

/// Result of [`generate`]: the rendered script plus the values that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWorkflow {
    pub parameters: WorkflowParameters,
    pub total_residues: usize,
    pub script: String,
}

fn path_text(path: &Path) -> Result<&str, WorkflowError> {
    path.to_str().ok_or_else(|| WorkflowError::NonUtf8Path(path.to_path_buf()))
}

/// Loads the structure, counts its non-water residues, and renders the script.
///
/// The paths are stamped into the script exactly as given.
///
/// # Errors
///
/// Returns [`WorkflowError::NonUtf8Path`] before reading anything if either
/// path is not valid UTF-8, and propagates any [`LoadError`] from the
/// structure loader.
#[instrument(skip_all, name = "equilibration_workflow")]
pub fn generate(
    coordinate_path: &Path,
    topology_path: &Path,
) -> Result<GeneratedWorkflow, WorkflowError> {
    let topology_text = path_text(topology_path)?;
    let coordinate_text = path_text(coordinate_path)?;

    let system = loader::load(coordinate_path, topology_path)?;
    let solute = select_non_water(&system);
    info!(
        "Found {} solute residues out of {} total.",
        solute.residue_count(),
        system.residue_count()
    );

    let parameters =
        WorkflowParameters::new(topology_text, coordinate_text, solute.residue_count());
    let script = parameters.render();
    info!("Rendered workflow script ({} bytes).", script.len());

    Ok(GeneratedWorkflow {
        parameters,
        total_residues: system.residue_count(),
        script,
    })
}
