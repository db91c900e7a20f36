mod common;

use common::RANDOM_SEED;
use socgraph::social::{SocialNetwork, Strategy, UserId};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [5, 20])]
fn populate_rejection<const N: usize>(bencher: divan::Bencher, avg_friendships: usize) {
    let mut network = SocialNetwork::new();

    bencher.bench_local(|| {
        network
            .populate()
            .seed(RANDOM_SEED)
            .strategy(Strategy::Rejection)
            .run(N, avg_friendships)
    });
}

#[divan::bench(consts = [100, 1000], args = [5, 20])]
fn populate_shuffle<const N: usize>(bencher: divan::Bencher, avg_friendships: usize) {
    let mut network = SocialNetwork::new();

    bencher.bench_local(|| {
        network
            .populate()
            .seed(RANDOM_SEED)
            .strategy(Strategy::Shuffle)
            .run(N, avg_friendships)
    });
}

#[divan::bench(consts = [100, 1000, 10000], args = [5, 20])]
fn all_social_paths<const N: usize>(bencher: divan::Bencher, avg_friendships: usize) {
    let mut network = SocialNetwork::new();
    network
        .populate()
        .seed(RANDOM_SEED)
        .run(N, avg_friendships)
        .unwrap();

    bencher.bench(|| network.get_all_social_paths(UserId(1)));
}
