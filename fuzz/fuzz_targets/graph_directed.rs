#![no_main]

use libfuzzer_sys::fuzz_target;

use socgraph::{
    core::Graph,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    visit::{bft, dft},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = Graph::new();

    for op in ops.ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    if graph.is_empty() {
        return;
    }

    let bfs = bft(&graph, 0).unwrap();
    let dfs = dft(&graph, 0).unwrap();

    assert_eq!(bfs.len(), dfs.len());
    assert_eq!(bfs[0], 0);
    assert_eq!(dfs[0], 0);
});
