use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netgrow_core::rng::RngHandle;
use netgrow_graph::{grow_network, NetworkConfig};

fn grow_network_bench(c: &mut Criterion) {
    c.bench_function("grow_network_m0_5_10k", |b| {
        b.iter(|| {
            let (network, _) = grow_network(
                NetworkConfig::with_initial_nodes(5),
                10_000,
                64,
                RngHandle::from_seed(42),
            )
            .unwrap();
            black_box(network);
        });
    });
}

fn degree_distribution_bench(c: &mut Criterion) {
    let (network, _) = grow_network(
        NetworkConfig::with_initial_nodes(5),
        10_000,
        64,
        RngHandle::from_seed(7),
    )
    .unwrap();
    c.bench_function("degree_distribution_10k", |b| {
        b.iter(|| black_box(network.degree_distribution().unwrap()));
    });
}

criterion_group!(benches, grow_network_bench, degree_distribution_bench);
criterion_main!(benches);
