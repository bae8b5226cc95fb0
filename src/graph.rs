//! Graph view of a coordinate matrix, serialized as JSON
//!
//! ```json
//! {"nodes": [{"id": 0}, ...], "edges": [{"source": 0, "target": 1}, ...]}
//! ```
//!
//! There is one node per declared non-zero and one edge per stored entry,
//! in store order (mirrored entries of symmetric matrices included).

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::matrix::TripleStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn from_store(store: &TripleStore) -> Self {
        let nodes = (0..store.nonzero_count()).map(|id| Node { id }).collect();
        let edges = store
            .entries()
            .iter()
            .map(|entry| Edge {
                source: entry.row,
                target: entry.col,
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the compact JSON document to `writer`.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer(writer, self)?)
    }
}
