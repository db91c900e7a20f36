use arbitrary::Arbitrary;

use crate::{
    core::{AddEdgeError, Graph},
    social::{FriendshipError, SocialNetwork, UserId},
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Mutation of a graph with vertices `0..n`.
///
/// Edge endpoints are taken modulo one more than the current vertex count, so
/// that adding an edge to an absent vertex is exercised too.
#[derive(Debug, Arbitrary, Clone, Copy)]
pub enum MutOp {
    AddVertex,
    ReAddVertex(Index),
    AddEdge(Index, Index),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOpResult {
    AddVertex(usize),
    ReAddVertex(Option<usize>),
    AddEdge(Result<(), AddEdgeError<usize>>),
    Clear,
}

impl MutOp {
    pub fn apply(self, graph: &mut Graph<usize>) -> MutOpResult {
        let n = graph.vertex_count();

        match self {
            MutOp::AddVertex => {
                graph.add_vertex(n);
                MutOpResult::AddVertex(n)
            }
            MutOp::ReAddVertex(index) => {
                let id = index.get(n);
                if let Some(id) = id {
                    graph.add_vertex(id);
                }
                MutOpResult::ReAddVertex(id)
            }
            MutOp::AddEdge(from, to) => {
                let from = from.get(n + 1).unwrap_or_default();
                let to = to.get(n + 1).unwrap_or_default();
                MutOpResult::AddEdge(graph.add_edge(from, to))
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub struct MutOpsSeq {
    pub ops: Vec<MutOp>,
}

impl MutOpsSeq {
    pub fn apply(self, graph: &mut Graph<usize>) -> Vec<MutOpResult> {
        self.ops.into_iter().map(|op| op.apply(graph)).collect()
    }
}

/// Operation on a social network. User IDs are taken modulo two more than the
/// current number of users, which covers unknown users as well.
#[derive(Debug, Arbitrary, Clone, Copy)]
pub enum SocialOp {
    AddUser,
    AddFriendship(Index, Index),
    Populate { num_users: u8, avg_friendships: u8, seed: u64 },
    Reset,
}

impl SocialOp {
    pub fn apply(self, network: &mut SocialNetwork) -> Option<FriendshipError> {
        match self {
            SocialOp::AddUser => {
                network.add_user("fuzz");
                None
            }
            SocialOp::AddFriendship(user, friend) => {
                let m = network.user_count() + 2;
                let user = UserId(user.get(m).unwrap_or_default());
                let friend = UserId(friend.get(m).unwrap_or_default());
                network.add_friendship(user, friend).err()
            }
            SocialOp::Populate {
                num_users,
                avg_friendships,
                seed,
            } => {
                let num_users = usize::from(num_users % 32);
                let avg_friendships = usize::from(avg_friendships % 32);
                // On failure the network is left empty.
                let _ = network
                    .populate()
                    .seed(seed)
                    .run(num_users, avg_friendships);
                None
            }
            SocialOp::Reset => {
                network.reset();
                None
            }
        }
    }
}
