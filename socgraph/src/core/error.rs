use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<V> {
    pub from: V,
    pub to: V,
    pub kind: AddEdgeErrorKind,
}

impl<V> AddEdgeError<V> {
    pub fn new(from: V, to: V, kind: AddEdgeErrorKind) -> Self {
        Self { from, to, kind }
    }

    /// Returns the endpoint that caused the failure.
    pub fn absent(&self) -> &V {
        match self.kind {
            AddEdgeErrorKind::SourceAbsent => &self.from,
            AddEdgeErrorKind::DestinationAbsent => &self.to,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("vertex does not exist")]
pub struct VertexAbsent<V>(pub V);
