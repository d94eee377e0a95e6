use brgen::{
    graphgen::{
        fold::{fold, group_of},
        probability::ProbabilityCalculator,
    },
    prelude::*,
};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};

fn params(n: usize, m: usize, threads: usize) -> GenerationParams {
    GenerationParams::new(n, m, threads).unwrap()
}

#[test]
fn default_cli_sizes_produce_six_vertices() {
    let generator = PreferentialAttachment::bollobas_riordan(params(6, 2, 1));
    let rng = &mut StdRng::seed_from_u64(1);

    let stubs = generator.build_stub_graph(rng).unwrap();
    assert_eq!(stubs.count(), 12);

    let graph = generator.fold_stub_graph(&stubs).unwrap();
    assert_eq!(graph.count(), 6);
    assert_eq!(
        graph.vertices().iter().map(|v| v.id()).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn final_edges_are_folded_stub_edges() {
    let generator = PreferentialAttachment::buckley_osthus(params(40, 3, 2), 0.47).unwrap();
    let rng = &mut StdRng::seed_from_u64(99);
    let stubs = generator.build_stub_graph(rng).unwrap();
    let graph = generator.fold_stub_graph(&stubs).unwrap();

    let mut expected: Vec<(u64, u64)> = stubs
        .vertices()
        .iter()
        .map(|s| (group_of(s.id(), 3), group_of(s.neighbors()[0], 3)))
        .collect();
    let mut actual: Vec<(u64, u64)> = graph
        .vertices()
        .iter()
        .flat_map(|v| v.neighbors().iter().map(move |&nb| (v.id(), nb)))
        .collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);
}

#[test]
fn seeded_generation_is_independent_of_threads() {
    for model in [
        Attractiveness::bollobas_riordan(),
        Attractiveness::constant(0.47).unwrap(),
        Attractiveness::sweep(1.0, 0.47, 0.01).unwrap(),
    ] {
        let reference = PreferentialAttachment::new(params(150, 2, 1), model)
            .unwrap()
            .with_calculator(ProbabilityCalculator::sequential())
            .generate(&mut StdRng::seed_from_u64(2718))
            .unwrap();

        for threads in [2, 5, 8] {
            let graph = PreferentialAttachment::new(params(150, 2, threads), model)
                .unwrap()
                .with_calculator(ProbabilityCalculator::with_partitions(threads))
                .generate(&mut StdRng::seed_from_u64(2718))
                .unwrap();
            assert_eq!(graph, reference);
        }
    }
}

#[test]
fn folding_whole_range_matches_orchestrator() {
    let generator = PreferentialAttachment::bollobas_riordan(params(64, 4, 6));
    let stubs = generator
        .build_stub_graph(&mut StdRng::seed_from_u64(8))
        .unwrap();
    assert_eq!(
        generator.fold_stub_graph(&stubs).unwrap(),
        fold(&stubs, 0..stubs.count(), 4).unwrap()
    );
}

#[test]
fn cleanup_after_generation() {
    let mut graph = PreferentialAttachment::buckley_osthus(params(300, 2, 3), 0.47)
        .unwrap()
        .generate(&mut StdRng::seed_from_u64(31))
        .unwrap();
    remove_self_loops_and_multi_edges(&mut graph);

    for v in graph.vertices() {
        assert!(v.neighbor_count() > 0);
        assert_eq!(v.neighbor_count(), v.neighbors().len());
        assert!(v.neighbors().iter().all(|&nb| nb != v.id()));
    }
    let snapshot = graph.clone();
    remove_self_loops_and_multi_edges(&mut graph);
    assert_eq!(graph, snapshot);
}

#[test]
fn configuration_errors_surface_before_generation() {
    assert_eq!(
        GenerationParams::new(6, 1, 1),
        Err(ConfigError::EdgeMultiplicityTooSmall(1))
    );
    assert_eq!(
        GenerationParams::new(6, 2, 0),
        Err(ConfigError::ThreadCountTooSmall(0))
    );
    assert!(matches!(
        "6x2".parse::<SizeSpec>(),
        Err(ConfigError::MalformedSizeSpec(_))
    ));
}
