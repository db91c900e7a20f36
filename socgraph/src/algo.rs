pub mod path;
pub mod path_tree;

pub use path::{any_path, is_path_between, shortest_path, PathSearch};
pub use path_tree::PathTree;
