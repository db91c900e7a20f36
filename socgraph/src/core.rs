pub mod error;
pub mod id;

mod graph;
mod neighbors;
mod path;

pub use error::{AddEdgeError, AddEdgeErrorKind, VertexAbsent};
pub use graph::Graph;
pub use id::{IdType, IntegerIdType};
pub use neighbors::{GraphBase, Neighbors};
pub use path::Path;
