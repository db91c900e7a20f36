#![no_main]

use libfuzzer_sys::fuzz_target;

use socgraph::{
    infra::{
        arbitrary::SocialOp,
        testing::{check_consistency, check_symmetric},
    },
    social::{SocialNetwork, UserId},
};

fuzz_target!(|ops: Vec<SocialOp>| {
    let mut network = SocialNetwork::new();

    for op in ops {
        let before = network.friendship_count();

        if op.apply(&mut network).is_some() {
            assert_eq!(network.friendship_count(), before);
        }

        check_symmetric(network.graph())
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
        check_consistency(network.graph())
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
        assert_eq!(network.graph().vertex_count(), network.user_count());
    }

    if network.user_count() > 0 {
        let paths = network.get_all_social_paths(UserId(1)).unwrap();

        for (user, path) in &paths {
            assert_eq!(path.end(), user);
            assert!(path.is_valid_in(network.graph()));
        }
    }
});
