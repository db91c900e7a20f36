use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::{
    algo::PathTree,
    core::{Graph, VertexAbsent},
    visit::TypedBitSet,
};

use super::{
    paths::SocialPaths,
    populate::{Populate, PopulateError},
    User, UserId,
};

/// The error encountered when adding a friendship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FriendshipError {
    #[error("user {0} cannot be friends with themselves")]
    SelfFriendship(UserId),

    #[error("friendship between {0} and {1} already exists")]
    AlreadyFriends(UserId, UserId),

    #[error("user {0} does not exist")]
    UserAbsent(UserId),
}

/// Users and the symmetric friendships between them.
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    last_id: usize,
    users: FxHashMap<UserId, User>,
    friendships: Graph<UserId>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new user with the next sequential ID and no friends.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        let id = UserId(self.last_id);

        self.users.insert(id, User::new(name.into()));
        self.friendships.add_vertex(id);

        id
    }

    /// Creates a bidirectional friendship.
    ///
    /// Friendship with oneself and a friendship that already exists (in any
    /// direction) are rejected and the network stays unchanged.
    pub fn add_friendship(&mut self, user: UserId, friend: UserId) -> Result<(), FriendshipError> {
        if user == friend {
            tracing::warn!(%user, "cannot be friends with yourself");
            return Err(FriendshipError::SelfFriendship(user));
        }

        for id in [user, friend] {
            if !self.users.contains_key(&id) {
                tracing::warn!(user = %id, "user does not exist");
                return Err(FriendshipError::UserAbsent(id));
            }
        }

        if self.are_friends(user, friend) {
            tracing::warn!(%user, %friend, "friendship already exists");
            return Err(FriendshipError::AlreadyFriends(user, friend));
        }

        // Both users are known to exist, so neither insertion can fail.
        self.friendships
            .add_edge(user, friend)
            .and_then(|_| self.friendships.add_edge(friend, user))
            .map_err(|error| FriendshipError::UserAbsent(*error.absent()))
    }

    /// Clears all users and friendships and restarts the ID sequence.
    pub fn reset(&mut self) {
        self.last_id = 0;
        self.users.clear();
        self.friendships.clear();
    }

    /// Configures a random population of the network. See [`Populate`].
    pub fn populate(&mut self) -> Populate<'_> {
        Populate::new(self)
    }

    /// Replaces the network with `num_users` users and randomly distributed
    /// friendships so that each user has `avg_friendships` friends on
    /// average.
    ///
    /// The number of users must be greater than the average number of
    /// friendships, otherwise the network is left empty and an error is
    /// returned.
    pub fn populate_graph(
        &mut self,
        num_users: usize,
        avg_friendships: usize,
    ) -> Result<(), PopulateError> {
        self.populate().run(num_users, avg_friendships)
    }

    /// Returns the shortest friendship path from the user to every user in
    /// their extended network, including the trivial path to themselves.
    ///
    /// Returns [`VertexAbsent`] if the user does not exist.
    pub fn get_all_social_paths(&self, user: UserId) -> Result<SocialPaths, VertexAbsent<UserId>> {
        let discovered = TypedBitSet::with_capacity(self.last_id + 1);
        let tree = PathTree::run_with(&self.friendships, user, discovered)?;

        Ok(SocialPaths::new(user, tree.into_paths()))
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn users(&self) -> impl Iterator<Item = (&UserId, &User)> + '_ {
        self.users.iter()
    }

    /// Returns the friends of the user, or `None` if the user does not exist.
    pub fn friends(&self, id: UserId) -> Option<&FxHashSet<UserId>> {
        self.friendships.neighbors(&id)
    }

    pub fn are_friends(&self, user: UserId, friend: UserId) -> bool {
        self.friendships.contains_edge(&user, &friend)
            || self.friendships.contains_edge(&friend, &user)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of (undirected) friendships.
    pub fn friendship_count(&self) -> usize {
        self.friendships.edge_count() / 2
    }

    /// Average number of friends per user.
    pub fn average_friendships(&self) -> f64 {
        if self.users.is_empty() {
            0.0
        } else {
            self.friendships.edge_count() as f64 / self.users.len() as f64
        }
    }

    /// The underlying directed graph, where each friendship is represented by
    /// two opposite edges.
    pub fn graph(&self) -> &Graph<UserId> {
        &self.friendships
    }
}
