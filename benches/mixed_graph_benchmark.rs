use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mixgraph::{Graph, WeightedGraph};

fn bench_build_chain(c: &mut Criterion) {
    let size = 500;

    c.bench_function("mixed_graph_build_chain", |b| {
        b.iter(|| {
            let mut graph: Graph<usize> = Graph::with_capacity(size, size);
            let nodes: Vec<_> = (0..size).filter_map(|i| graph.insert_node(i)).collect();
            // Chain: 0->1->...->N, alternating direction flags.
            for i in 0..size - 1 {
                let _ = graph.insert_edge(nodes[i], nodes[i + 1], i % 2 == 0);
            }
            black_box(graph.edge_count())
        });
    });

    c.bench_function("weighted_graph_build_chain", |b| {
        b.iter(|| {
            let mut graph: WeightedGraph<usize> = WeightedGraph::with_capacity(size, size);
            let nodes: Vec<_> = (0..size).filter_map(|i| graph.insert_node(i)).collect();
            for i in 0..size - 1 {
                let _ = graph.insert_edge(nodes[i], nodes[i + 1], 1.0, true);
            }
            black_box(graph.edge_count())
        });
    });
}

fn bench_downgrade_and_remove(c: &mut Criterion) {
    let size = 200;

    c.bench_function("mixed_graph_downgrade_all", |b| {
        b.iter(|| {
            let mut graph: Graph<usize> = Graph::new();
            let nodes: Vec<_> = (0..size).filter_map(|i| graph.insert_node(i)).collect();
            for i in 0..size - 1 {
                let _ = graph.insert_edge(nodes[i], nodes[i + 1], true);
            }
            // Reverse requests fold every edge into an undirected one.
            for i in 0..size - 1 {
                let _ = graph.insert_edge(nodes[i + 1], nodes[i], true);
            }
            black_box(graph.is_digraph())
        });
    });

    c.bench_function("mixed_graph_remove_hub", |b| {
        b.iter(|| {
            let mut graph: Graph<usize> = Graph::new();
            let nodes: Vec<_> = (0..size).filter_map(|i| graph.insert_node(i)).collect();
            // Star around node 0.
            for &spoke in &nodes[1..] {
                let _ = graph.insert_edge(nodes[0], spoke, false);
            }
            black_box(graph.remove_node(nodes[0]))
        });
    });
}

fn bench_lookup(c: &mut Criterion) {
    let size = 1000;
    let mut graph: Graph<String> = Graph::new();
    for i in 0..size {
        graph.insert_node(format!("node-{i}"));
    }
    let needle = format!(" node-{} ", size - 1);

    c.bench_function("mixed_graph_find_node_last", |b| {
        b.iter(|| black_box(graph.find_node(black_box(&needle))));
    });
}

criterion_group!(benches, bench_build_chain, bench_downgrade_and_remove, bench_lookup);
criterion_main!(benches);
