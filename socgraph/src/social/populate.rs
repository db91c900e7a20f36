use fastrand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::{network::FriendshipError, SocialNetwork, UserId};

/// Multiple of the pair space size used as the default cap on the number of
/// random draws in [`Strategy::Rejection`].
const DEFAULT_ATTEMPTS_FACTOR: usize = 32;
const MIN_ATTEMPTS: usize = 64;

/// How the random friendships are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Draws random pairs of distinct users and discards the pairs that were
    /// already drawn, until enough unique pairs are collected. Cheap for
    /// sparse networks, but the number of discarded draws grows quickly as
    /// the requested number of friendships approaches the number of all
    /// possible pairs.
    #[default]
    Rejection,

    /// Enumerates all possible pairs, shuffles them and takes as many as
    /// needed. Memory is quadratic in the number of users.
    Shuffle,

    /// [`Strategy::Shuffle`] if more than half of all possible pairs are
    /// requested, [`Strategy::Rejection`] otherwise.
    Auto,
}

impl Strategy {
    fn resolve(self, requested: usize, available: usize) -> Strategy {
        match self {
            Strategy::Auto if requested.saturating_mul(2) > available => Strategy::Shuffle,
            Strategy::Auto => Strategy::Rejection,
            strategy => strategy,
        }
    }
}

/// The error encountered during random population of a [`SocialNetwork`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopulateError {
    #[error(
        "the number of users ({num_users}) must be greater than the average number of friendships ({avg_friendships})"
    )]
    TooManyFriendships {
        num_users: usize,
        avg_friendships: usize,
    },

    #[error("requested {requested} friendships, but only {available} pairs of users exist")]
    Infeasible { requested: usize, available: usize },

    #[error("created only {created} of {requested} friendships in {attempts} attempts")]
    AttemptsExhausted {
        created: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("{0}")]
    Friendship(#[from] FriendshipError),
}

/// Random population of a [`SocialNetwork`].
///
/// Created by [`SocialNetwork::populate`]. Any previous content of the network
/// is discarded when the population runs.
///
/// # Examples
///
/// ```
/// use socgraph::social::{SocialNetwork, Strategy};
///
/// let mut network = SocialNetwork::new();
/// network
///     .populate()
///     .seed(42)
///     .strategy(Strategy::Auto)
///     .run(100, 10)
///     .unwrap();
///
/// assert_eq!(network.friendship_count(), 500);
/// ```
pub struct Populate<'a> {
    network: &'a mut SocialNetwork,
    seed: Option<u64>,
    max_attempts: Option<usize>,
    strategy: Strategy,
}

impl<'a> Populate<'a> {
    pub(super) fn new(network: &'a mut SocialNetwork) -> Self {
        Self {
            network,
            seed: None,
            max_attempts: None,
            strategy: Strategy::default(),
        }
    }

    /// Seeds the random number generator, making the population reproducible.
    /// Without a seed, a fresh generator is used.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Caps the number of random draws in [`Strategy::Rejection`].
    pub fn max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..self
        }
    }

    pub fn strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Replaces the network with `num_users` users and
    /// `num_users * avg_friendships / 2` random unique friendships.
    ///
    /// On error, the network is left empty.
    pub fn run(self, num_users: usize, avg_friendships: usize) -> Result<(), PopulateError> {
        let Populate {
            network,
            seed,
            max_attempts,
            strategy,
        } = self;

        network.reset();

        let result = populate(network, num_users, avg_friendships, seed, max_attempts, strategy);

        match result {
            Ok(()) => tracing::debug!(
                users = network.user_count(),
                friendships = network.friendship_count(),
                avg_friendships,
                "populated social network"
            ),
            Err(ref error) => {
                tracing::warn!(%error, "could not populate social network");
                network.reset();
            }
        }

        result
    }
}

fn populate(
    network: &mut SocialNetwork,
    num_users: usize,
    avg_friendships: usize,
    seed: Option<u64>,
    max_attempts: Option<usize>,
    strategy: Strategy,
) -> Result<(), PopulateError> {
    if avg_friendships >= num_users {
        return Err(PopulateError::TooManyFriendships {
            num_users,
            avg_friendships,
        });
    }

    // Pair counts that do not fit in `usize` saturate.
    let requested = num_users
        .checked_mul(avg_friendships)
        .map_or(usize::MAX, |n| n / 2);
    let available = num_users
        .checked_mul(num_users - 1)
        .map_or(usize::MAX, |n| n / 2);

    if requested == usize::MAX || requested > available {
        return Err(PopulateError::Infeasible {
            requested,
            available,
        });
    }

    for i in 1..=num_users {
        network.add_user(format!("User {i}"));
    }

    let mut rng = seed.map(Rng::with_seed).unwrap_or_default();

    let pairs = match strategy.resolve(requested, available) {
        Strategy::Shuffle => shuffled_pairs(&mut rng, num_users, requested),
        _ => {
            let max_attempts = max_attempts.unwrap_or_else(|| {
                available
                    .saturating_mul(DEFAULT_ATTEMPTS_FACTOR)
                    .max(MIN_ATTEMPTS)
            });
            sampled_pairs(&mut rng, num_users, requested, max_attempts)?
        }
    };

    for (user, friend) in pairs {
        network.add_friendship(user, friend)?;
    }

    Ok(())
}

/// Draws random pairs of distinct users until `requested` unique unordered
/// pairs are collected. Each pair is returned with the smaller ID first.
fn sampled_pairs(
    rng: &mut Rng,
    num_users: usize,
    requested: usize,
    max_attempts: usize,
) -> Result<Vec<(UserId, UserId)>, PopulateError> {
    let mut seen = FxHashSet::default();
    let mut pairs = Vec::with_capacity(requested);
    let mut attempts = 0;

    while pairs.len() < requested {
        if attempts >= max_attempts {
            return Err(PopulateError::AttemptsExhausted {
                created: pairs.len(),
                requested,
                attempts,
            });
        }

        attempts += 1;

        let u = rng.usize(1..=num_users);
        let v = rng.usize(1..=num_users);

        if u == v {
            continue;
        }

        let pair = (UserId(u.min(v)), UserId(u.max(v)));

        if seen.insert(pair) {
            pairs.push(pair);
        }
    }

    Ok(pairs)
}

/// Takes `requested` pairs from a random permutation of all unordered pairs.
fn shuffled_pairs(rng: &mut Rng, num_users: usize, requested: usize) -> Vec<(UserId, UserId)> {
    let mut pairs = (1..=num_users)
        .flat_map(|u| (u + 1..=num_users).map(move |v| (UserId(u), UserId(v))))
        .collect::<Vec<_>>();

    rng.shuffle(&mut pairs);
    pairs.truncate(requested);
    pairs
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::testing::{check_consistency, check_symmetric};

    use super::*;
    // Shadows `proptest::strategy::Strategy` from the prelude.
    use super::Strategy;

    fn assert_populated(network: &SocialNetwork, num_users: usize, avg_friendships: usize) {
        assert_eq!(network.user_count(), num_users);
        assert_eq!(
            network.friendship_count(),
            num_users * avg_friendships / 2
        );

        for (id, user) in network.users() {
            assert_eq!(user.name(), format!("User {}", id.get()));
            assert!(!network.are_friends(*id, *id));
        }

        check_symmetric(network.graph()).unwrap();
        check_consistency(network.graph()).unwrap();
    }

    #[test]
    fn ten_users_two_friends() {
        let mut network = SocialNetwork::new();

        network.populate_graph(10, 2).unwrap();

        assert_populated(&network, 10, 2);
        assert_eq!(network.friendship_count(), 10);
        assert_eq!(network.average_friendships(), 2.0);
    }

    #[test]
    fn too_many_friendships() {
        let mut network = SocialNetwork::new();
        network.add_user("existing");

        assert_matches!(
            network.populate_graph(5, 5),
            Err(PopulateError::TooManyFriendships {
                num_users: 5,
                avg_friendships: 5
            })
        );
        assert_eq!(network.user_count(), 0);
        assert_eq!(network.graph().vertex_count(), 0);
    }

    #[test]
    fn replaces_previous_content() {
        let mut network = SocialNetwork::new();
        network.populate().seed(1).run(20, 4).unwrap();
        network.populate().seed(2).run(5, 2).unwrap();

        assert_populated(&network, 5, 2);
        assert!(network.user(UserId(6)).is_none());
    }

    #[test]
    fn complete_network() {
        for strategy in [Strategy::Rejection, Strategy::Shuffle, Strategy::Auto] {
            let mut network = SocialNetwork::new();
            network.populate().seed(3).strategy(strategy).run(8, 7).unwrap();

            assert_populated(&network, 8, 7);
            assert_eq!(network.friendship_count(), 28);
        }
    }

    #[test]
    fn odd_total_rounds_down() {
        let mut network = SocialNetwork::new();
        network.populate().seed(5).run(5, 3).unwrap();

        assert_eq!(network.friendship_count(), 7);
    }

    #[test]
    fn empty_requests() {
        let mut network = SocialNetwork::new();

        network.populate_graph(1, 0).unwrap();
        assert_populated(&network, 1, 0);

        assert_matches!(
            network.populate_graph(0, 0),
            Err(PopulateError::TooManyFriendships { .. })
        );
    }

    #[test]
    fn pair_count_overflow() {
        let mut network = SocialNetwork::new();

        assert_matches!(
            network.populate_graph(usize::MAX / 2, 4),
            Err(PopulateError::Infeasible {
                requested: usize::MAX,
                ..
            })
        );
        assert_eq!(network.user_count(), 0);
    }

    #[test]
    fn attempts_exhausted() {
        let mut network = SocialNetwork::new();

        let result = network
            .populate()
            .seed(11)
            .strategy(Strategy::Rejection)
            .max_attempts(3)
            .run(50, 10);

        assert_matches!(
            result,
            Err(PopulateError::AttemptsExhausted {
                requested: 250,
                attempts: 3,
                ..
            })
        );
        assert_eq!(network.user_count(), 0);
    }

    #[test]
    fn seed_is_reproducible() {
        let mut lhs = SocialNetwork::new();
        let mut rhs = SocialNetwork::new();

        lhs.populate().seed(99).run(30, 6).unwrap();
        rhs.populate().seed(99).run(30, 6).unwrap();

        assert_eq!(lhs.graph(), rhs.graph());
    }

    #[test]
    fn auto_resolution() {
        assert_eq!(Strategy::Auto.resolve(10, 45), Strategy::Rejection);
        assert_eq!(Strategy::Auto.resolve(30, 45), Strategy::Shuffle);
        assert_eq!(Strategy::Rejection.resolve(45, 45), Strategy::Rejection);
        assert_eq!(Strategy::Shuffle.resolve(1, 45), Strategy::Shuffle);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn friendship_count_matches(
            num_users in 1usize..40,
            avg in 0usize..40,
            seed in any::<u64>(),
            auto in any::<bool>(),
        ) {
            let avg = avg % num_users;
            let strategy = if auto { Strategy::Auto } else { Strategy::Rejection };

            let mut network = SocialNetwork::new();
            network.populate().seed(seed).strategy(strategy).run(num_users, avg).unwrap();

            prop_assert_eq!(network.user_count(), num_users);
            prop_assert_eq!(network.friendship_count(), num_users * avg / 2);
            prop_assert!(check_symmetric(network.graph()).is_ok());
        }
    }
}
