//! Undirected friendship network built on top of [`Graph`](crate::core::Graph).
//!
//! Every friendship is stored as a pair of opposite directed edges, so the
//! traversal and path search algorithms work on the network unchanged.
//!
//! # Examples
//!
//! ```
//! use socgraph::social::{SocialNetwork, UserId};
//!
//! let mut network = SocialNetwork::new();
//! network.populate().seed(7).run(10, 2).unwrap();
//!
//! assert_eq!(network.user_count(), 10);
//! assert_eq!(network.friendship_count(), 10);
//!
//! let paths = network.get_all_social_paths(UserId(1)).unwrap();
//! assert_eq!(paths.path_to(UserId(1)).unwrap().vertices(), &[UserId(1)]);
//!
//! for (friend, path) in paths.iter() {
//!     assert_eq!(path.end(), friend);
//! }
//! ```

mod network;
mod paths;
mod populate;

use std::fmt;

use crate::core::IntegerIdType;

pub use network::{FriendshipError, SocialNetwork};
pub use paths::SocialPaths;
pub use populate::{Populate, PopulateError, Strategy};

/// Identifier of a user in a [`SocialNetwork`].
///
/// Identifiers are assigned sequentially starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub usize);

impl UserId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for UserId {
    fn from(id: usize) -> Self {
        UserId(id)
    }
}

impl From<UserId> for usize {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl IntegerIdType for UserId {
    fn as_usize(&self) -> usize {
        self.0
    }

    fn from_usize(id: usize) -> Self {
        UserId(id)
    }
}

/// A member of a [`SocialNetwork`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
