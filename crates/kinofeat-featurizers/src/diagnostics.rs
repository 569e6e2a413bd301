//! Non-fatal findings of a featurization run.
//!
//! Every [`Diagnostic`] is forwarded to a [`DiagnosticSink`] as it is found and
//! also returned with the features, so callers can inspect them after the fact
//! without installing a logger.
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// An atom that was queried but does not exist in the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissingAtom {
    /// `None` when the residue itself is a gap in the numbering.
    pub residue: Option<i32>,
    pub atom_name: String,
}

impl fmt::Display for MissingAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.residue {
            Some(residue) => write!(f, "{}:{}", residue, self.atom_name),
            None => write!(f, "gap:{}", self.atom_name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A feature group was dropped because some of its atoms are missing.
    MissingAtoms {
        group: String,
        atoms: Vec<MissingAtom>,
    },
    /// Pairs against an unresolved pocket position were dropped.
    PocketGap {
        position: usize,
        pairs_dropped: usize,
    },
    /// The ligand has more heavy atoms than the configured pair capacity.
    LigandCapacity { atoms: usize, capacity: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingAtoms { group, atoms } => {
                write!(f, "{} dropped, missing atoms: {}", group, atoms.iter().join(", "))
            }
            Diagnostic::PocketGap {
                position,
                pairs_dropped,
            } => write!(
                f,
                "pocket position {} unresolved, {} ligand pairs dropped",
                position, pairs_dropped
            ),
            Diagnostic::LigandCapacity { atoms, capacity } => write!(
                f,
                "ligand has {} heavy atoms, more than the expected {}",
                atoms, capacity
            ),
        }
    }
}

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards every diagnostic to the `log` facade at `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic),
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Diagnostics collected during one extractor run, in the order they occurred.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `diagnostic` to `sink` and keep it.
    pub fn record(&mut self, diagnostic: Diagnostic, sink: &dyn DiagnosticSink) {
        sink.report(&diagnostic);
        self.0.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
