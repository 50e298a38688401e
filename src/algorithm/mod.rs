pub mod astar;
pub mod bidirectional;
pub mod dijkstra;
pub mod traits;
pub mod traversal;

pub use astar::AStar;
pub use bidirectional::BidirectionalBfs;
pub use dijkstra::Dijkstra;
pub use traits::PathSearch;
pub use traversal::{breadth_first_search, depth_first_search};
