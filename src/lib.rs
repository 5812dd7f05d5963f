//! Minimum spanning tree weights over undirected weighted graphs,
//! computed either by Prim's algorithm (vertex growth over a priority
//! queue) or Kruskal's algorithm (ascending edge scan over a
//! disjoint-set forest).

mod error;
mod graph;
mod heap;
mod union_find;

pub use error::GraphError;
pub use graph::{Edge, FloatGraph, Graph};
pub use heap::{MaxHeap, MinHeap};
pub use union_find::UnionFind;
