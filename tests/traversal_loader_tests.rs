use pathfind::algorithm::{breadth_first_search, depth_first_search, BidirectionalBfs, Dijkstra};
use pathfind::graph::{AdjacencyGraph, Graph, GraphBuilder};
use pathfind::loader::MapData;
use pathfind::{Edge, Error, PathSearch};

const MAP_JSON: &str = r#"{
    "0": {"1": {"v": 1.0}, "2": {"v": 5.0}},
    "1": {"2": {"v": 1.0}, "3": {"v": 4.0}},
    "2": {"3": {"v": 1.0}},
    "3": {}
}"#;

fn build_graph(nodes: usize, edges: &[(usize, usize, f64)]) -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::with_capacity(nodes);
    for index in 0..nodes {
        graph.add_node(index);
    }
    for &(from, to, cost) in edges {
        graph.add_edge(from, to, cost);
    }
    graph
}

fn assert_chain(path: &[Edge<f64>], source: usize, target: usize) {
    assert_eq!(path.first().map(|edge| edge.from), Some(source));
    assert_eq!(path.last().map(|edge| edge.to), Some(target));
    for pair in path.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
}

#[test]
fn test_dfs_finds_a_real_edge_chain() {
    let graph = build_graph(5, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (0, 4, 1.0)]);

    let path = depth_first_search(&graph, 0, 3).expect("path should exist");
    assert_chain(&path, 0, 3);
    for edge in &path {
        assert!(graph.outgoing_edges(edge.from).any(|e| e == *edge));
    }
}

#[test]
fn test_bfs_finds_fewest_edge_chain() {
    // direct hop beats the cheap detour when counting edges
    let graph = build_graph(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);

    let path = breadth_first_search(&graph, 0, 2).expect("path should exist");
    assert_chain(&path, 0, 2);
    assert_eq!(path.len(), 1);
}

#[test]
fn test_traversal_same_node_and_missing_paths() {
    let graph = build_graph(4, &[(0, 1, 1.0), (2, 3, 1.0)]);

    assert_eq!(depth_first_search(&graph, 1, 1), Ok(Vec::new()));
    assert_eq!(breadth_first_search(&graph, 2, 2), Ok(Vec::new()));

    assert_eq!(depth_first_search(&graph, 0, 3), Err(Error::PathNotFound));
    assert_eq!(breadth_first_search(&graph, 0, 3), Err(Error::PathNotFound));

    assert_eq!(
        depth_first_search(&graph, 9, 0),
        Err(Error::InvalidNodeIndex(9))
    );
    assert_eq!(
        breadth_first_search(&graph, 0, 9),
        Err(Error::InvalidNodeIndex(9))
    );
}

#[test]
fn test_parse_builds_directed_graph() {
    let data = MapData::parse(MAP_JSON).expect("map data should parse");
    assert_eq!(data.node_count(), 4);

    let graph = data.directed_graph();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);

    let mut search = Dijkstra::new(&graph, 0, 3);
    search.run();
    let path = search.path_to_target().expect("path should exist");

    assert_chain(&path, 0, 3);
    let total: f64 = path.iter().map(|edge| edge.cost).sum();
    assert!((total - 3.0).abs() < 1e-9); // 0->1->2->3 beats 0->1->3
}

#[test]
fn test_undirected_build_feeds_bidirectional_search() {
    let data = MapData::parse(MAP_JSON).expect("map data should parse");
    let graph = data.undirected_graph();
    assert_eq!(graph.edge_count(), 10);

    // traversable against the listed edge directions
    let search = BidirectionalBfs::new(&graph, 3, 0);
    let path = search.search().expect("path should exist");
    assert_chain(&path, 3, 0);
}

#[test]
fn test_destination_only_nodes_are_created() {
    let data = MapData::parse(r#"{"0": {"3": {"v": 2.0}}}"#).expect("map data should parse");
    assert_eq!(data.node_count(), 4);

    let graph = data.directed_graph();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_node(3));
}

#[test]
fn test_empty_table_builds_empty_graph() {
    let data = MapData::parse("{}").expect("map data should parse");
    assert_eq!(data.node_count(), 0);
    assert_eq!(data.directed_graph().node_count(), 0);
}

#[test]
fn test_malformed_map_data_is_a_parse_error() {
    assert!(matches!(
        MapData::parse("{not json"),
        Err(Error::MapParse(_))
    ));
    assert!(matches!(
        MapData::parse(r#"{"0": {"1": {"w": 1.0}}}"#),
        Err(Error::MapParse(_))
    ));
}

#[test]
fn test_missing_map_file_is_a_read_error() {
    assert!(matches!(
        MapData::load("no/such/file.map"),
        Err(Error::MapRead(_))
    ));
}

#[test]
fn test_load_reads_map_file() {
    let path = std::env::temp_dir().join("pathfind_loader_test.map");
    std::fs::write(&path, MAP_JSON).expect("write temp map file");

    let data = MapData::load(&path).expect("load map file");
    assert_eq!(data.node_count(), 4);

    let _ = std::fs::remove_file(&path);
}
