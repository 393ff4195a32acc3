use mixgraph::{Edge, EdgeInsertion, EdgeKind, Graph, GraphError, WeightedGraph};

#[test]
fn insert_node_twice_keeps_one_node() {
    let mut graph: Graph<&str> = Graph::new();
    for value in ["v", "v", " v", "v\t"] {
        graph.insert_node(value);
    }
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.nodes().filter(|(_, n)| n.matches(&"v")).count(), 1);
}

#[test]
fn find_node_round_trip() {
    let mut graph: Graph<i64> = Graph::new();
    let id = graph.insert_node(42).unwrap();
    let found = graph.find_node(&42).unwrap();
    assert_eq!(found, id);
    assert!(graph.node(found).unwrap().matches(&42));

    assert!(graph.remove_node(found));
    assert_eq!(graph.find_node(&42), None);
    assert!(graph.is_empty());
}

#[test]
fn downgrade_scenarios() {
    let mut graph: Graph<&str> = Graph::new();
    let a = graph.insert_node("A").unwrap();
    let b = graph.insert_node("B").unwrap();

    let directed = graph.insert_edge(a, b, true).unwrap();
    let EdgeInsertion::Inserted(id) = directed else {
        panic!("expected a fresh edge, got {directed:?}");
    };

    assert_eq!(graph.insert_edge(a, b, true).unwrap(), EdgeInsertion::Rejected);
    assert_eq!(graph.insert_edge(b, a, true).unwrap(), EdgeInsertion::Downgraded(id));
    assert!(!graph.edge(id).unwrap().is_directed());

    // Once undirected, further requests are absorbed.
    assert_eq!(graph.insert_edge(a, b, true).unwrap(), EdgeInsertion::Rejected);
    assert_eq!(graph.insert_edge(b, a, false).unwrap(), EdgeInsertion::Rejected);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn undirected_edge_cannot_be_promoted_by_insertion() {
    let mut graph: Graph<char> = Graph::new();
    let x = graph.insert_node('x').unwrap();
    let y = graph.insert_node('y').unwrap();

    graph.insert_edge(x, y, false).unwrap();
    assert!(graph.insert_edge(x, y, true).unwrap().is_rejected());
    assert!(!graph.is_digraph());

    // Promotion means removing and recreating.
    assert!(graph.remove_edge(x, y, false).unwrap());
    assert!(graph.insert_edge(x, y, true).unwrap().is_inserted());
    assert!(graph.is_digraph());
}

#[test]
fn cascade_leaves_no_dangling_references() {
    let mut graph: Graph<u32> = Graph::new();
    let ids: Vec<_> = (0..6).map(|v| graph.insert_node(v).unwrap()).collect();
    let hub = ids[0];
    for (i, &spoke) in ids.iter().enumerate().skip(1) {
        graph.insert_edge(hub, spoke, i % 2 == 0).unwrap();
    }
    graph.insert_edge(ids[1], ids[2], true).unwrap();
    assert_eq!(graph.edge_count(), 6);

    assert!(graph.remove_node(hub));
    assert_eq!(graph.edge_count(), 1);
    for &id in &ids[1..] {
        let node = graph.node(id).unwrap();
        for edge in node.outgoing().iter().chain(node.incoming()) {
            let edge = graph.edge(*edge).expect("adjacency lists only name live edges");
            assert_ne!(edge.tail(), hub);
            assert_ne!(edge.head(), hub);
        }
    }
    assert!(graph.verify_consistency().is_ok());
}

#[test]
fn plain_graph_accepts_prebuilt_edges() {
    let mut graph: Graph<&str> = Graph::new();
    let a = graph.insert_node("A").unwrap();
    let b = graph.insert_node("B").unwrap();

    let edge = Edge::new(b, a, true).unwrap();
    let id = graph.insert_edge_object(edge).unwrap().edge().unwrap();
    assert_eq!(graph.edge(id).unwrap().tail(), b);
    assert!(graph.remove_edge_object(&edge));
    assert!(!graph.remove_edge_object(&edge));
}

#[test]
fn weighted_graph_rejects_bad_weights_up_front() {
    let mut graph: WeightedGraph<String> = WeightedGraph::new();
    let a = graph.insert_node("a".into()).unwrap();
    let b = graph.insert_node("b".into()).unwrap();

    assert_eq!(graph.create_edge(a, b, -0.5, false), Err(GraphError::InvalidWeight));
    assert_eq!(graph.create_edge(a, b, f64::NEG_INFINITY, false), Err(GraphError::InvalidWeight));

    let heavy = graph.create_edge(a, b, 10.0, false).unwrap();
    let light = graph.create_edge(b, a, 1.0, true).unwrap();
    assert!(graph.insert_edge_object(heavy).unwrap().is_inserted());
    assert!(graph.insert_edge_object(light).unwrap().is_rejected());
    assert!((graph.edges().next().unwrap().1.weight() - 10.0).abs() < f64::EPSILON);
}

#[test]
fn snapshot_reflects_latest_state() {
    let mut graph: Graph<&str> = Graph::new();
    let a = graph.insert_node("A").unwrap();
    let b = graph.insert_node("B").unwrap();
    assert!(graph.snapshot().edges.is_empty());

    graph.insert_edge(a, b, true).unwrap();
    let first = graph.snapshot();
    graph.insert_edge(b, a, true).unwrap();
    let second = graph.snapshot();

    assert_ne!(first, second);
    assert!(first.edges[0].arrows.to && !first.edges[0].arrows.from);
    assert!(second.edges[0].arrows.to && second.edges[0].arrows.from);
    assert_eq!((second.edges[0].from.as_str(), second.edges[0].to.as_str()), ("B", "A"));
}
