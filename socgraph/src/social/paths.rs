use std::collections::hash_map;

use rustc_hash::FxHashMap;

use crate::core::Path;

use super::UserId;

/// Shortest friendship paths from a user to everyone in their extended
/// network.
///
/// Returned by [`SocialNetwork::get_all_social_paths`](super::SocialNetwork::get_all_social_paths).
/// Users outside of the extended network have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPaths {
    source: UserId,
    paths: FxHashMap<UserId, Path<UserId>>,
}

impl SocialPaths {
    pub(crate) fn new(source: UserId, paths: FxHashMap<UserId, Path<UserId>>) -> Self {
        Self { source, paths }
    }

    pub fn source(&self) -> UserId {
        self.source
    }

    pub fn path_to(&self, user: UserId) -> Option<&Path<UserId>> {
        self.paths.get(&user)
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.paths.contains_key(&user)
    }

    /// Number of entries, including the source itself.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of users in the extended network, not counting the source.
    pub fn reach(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Fraction of the other users in a network of `total_users` users that
    /// are in the extended network.
    pub fn coverage(&self, total_users: usize) -> f64 {
        if total_users <= 1 {
            0.0
        } else {
            self.reach() as f64 / (total_users - 1) as f64
        }
    }

    /// Average degree of separation between the source and the users in its
    /// extended network, or `None` if the extended network is empty.
    pub fn average_separation(&self) -> Option<f64> {
        let reach = self.reach();

        if reach == 0 {
            return None;
        }

        let total = self.paths.values().map(Path::edge_count).sum::<usize>();
        Some(total as f64 / reach as f64)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, UserId, Path<UserId>> {
        self.paths.iter()
    }

    pub fn into_inner(self) -> FxHashMap<UserId, Path<UserId>> {
        self.paths
    }
}

impl IntoIterator for SocialPaths {
    type Item = (UserId, Path<UserId>);
    type IntoIter = hash_map::IntoIter<UserId, Path<UserId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a SocialPaths {
    type Item = (&'a UserId, &'a Path<UserId>);
    type IntoIter = hash_map::Iter<'a, UserId, Path<UserId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_paths() -> SocialPaths {
        // 1 - 2 - 3, 1 - 4
        let p = |ids: &[usize]| Path::new(ids.iter().copied().map(UserId).collect()).unwrap();
        let paths = [p(&[1]), p(&[1, 2]), p(&[1, 2, 3]), p(&[1, 4])]
            .into_iter()
            .map(|path| (*path.end(), path))
            .collect();

        SocialPaths::new(UserId(1), paths)
    }

    #[test]
    fn statistics() {
        let paths = create_paths();

        assert_eq!(paths.len(), 4);
        assert_eq!(paths.reach(), 3);
        assert_eq!(paths.coverage(7), 0.5);
        assert_eq!(paths.average_separation(), Some(4.0 / 3.0));
    }

    #[test]
    fn isolated_source() {
        let paths = SocialPaths::new(
            UserId(1),
            [(UserId(1), Path::trivial(UserId(1)))].into_iter().collect(),
        );

        assert_eq!(paths.reach(), 0);
        assert_eq!(paths.coverage(10), 0.0);
        assert_eq!(paths.average_separation(), None);
        assert_eq!(paths.coverage(1), 0.0);
    }

    #[test]
    fn iteration() {
        let paths = create_paths();

        for (user, path) in &paths {
            assert_eq!(path.end(), user);
            assert_eq!(path.start(), &paths.source());
        }

        let mut users = paths.into_iter().map(|(user, _)| user.get()).collect::<Vec<_>>();
        users.sort_unstable();
        assert_eq!(users, vec![1, 2, 3, 4]);
    }
}
