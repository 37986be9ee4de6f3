use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::config::READ_BUFFER_SIZE;
use crate::error::SlpaError;
use crate::memory::LabelMemory;

pub type VInt = u32;

/// The undirected graph under propagation. Each vertex carries its label
/// memory and its neighbor list in edge-insertion order. Adjacency is fixed
/// once loading completes, only the memories mutate during a run.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj_map: BTreeMap<VInt, (LabelMemory, Vec<VInt>)>,
    v_size: u32,
    e_size: u32,
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            adj_map: BTreeMap::new(),
            v_size: 0,
            e_size: 0,
        }
    }

    /// Insert a vertex with a freshly seeded memory. Inserting an existing
    /// vertex is a no-op, the memory is never re-seeded.
    pub fn add_node(&mut self, vertex_id: VInt) {
        if !self.adj_map.contains_key(&vertex_id) {
            self.adj_map
                .insert(vertex_id, (LabelMemory::create(vertex_id), vec![]));
            self.v_size += 1;
        }
    }

    /// Insert an undirected edge, creating missing endpoints on the fly.
    /// Both neighbor lists get an entry; a self-loop therefore lands twice
    /// in the vertex's own list. Parallel edges are kept as-is.
    pub fn add_edge(&mut self, src: VInt, dst: VInt) {
        self.add_node(src);
        self.add_node(dst);
        self.adj_map.get_mut(&src).unwrap().1.push(dst);
        self.adj_map.get_mut(&dst).unwrap().1.push(src);
        self.e_size += 1;
    }

    /// The stored neighbor sequence, duplicates and insertion order intact.
    pub fn neighbors(&self, vertex_id: &VInt) -> Result<&[VInt], SlpaError> {
        match self.adj_map.get(vertex_id) {
            Some((_, neighbors)) => Ok(neighbors.as_slice()),
            None => Err(SlpaError::NotFound(*vertex_id)),
        }
    }

    pub fn memory(&self, vertex_id: &VInt) -> Result<&LabelMemory, SlpaError> {
        match self.adj_map.get(vertex_id) {
            Some((memory, _)) => Ok(memory),
            None => Err(SlpaError::NotFound(*vertex_id)),
        }
    }

    pub fn memory_mut(&mut self, vertex_id: &VInt) -> Result<&mut LabelMemory, SlpaError> {
        match self.adj_map.get_mut(vertex_id) {
            Some((memory, _)) => Ok(memory),
            None => Err(SlpaError::NotFound(*vertex_id)),
        }
    }

    /// All vertex ids in ascending order.
    pub fn node_ids(&self) -> Vec<VInt> {
        self.adj_map.keys().copied().collect()
    }

    /// (vertex id, memory) pairs in ascending vertex order.
    pub fn iter_memories(&self) -> impl Iterator<Item = (&VInt, &LabelMemory)> {
        self.adj_map.iter().map(|(vertex_id, (memory, _))| (vertex_id, memory))
    }

    pub fn memories_mut(&mut self) -> impl Iterator<Item = &mut LabelMemory> {
        self.adj_map.values_mut().map(|(memory, _)| memory)
    }

    pub fn vertex_count(&self) -> u32 {
        self.v_size
    }

    /// Count of inserted edges, self-loops and parallel edges included.
    pub fn edge_count(&self) -> u32 {
        self.e_size
    }

    pub fn from_edges(edges_iter: impl Iterator<Item = (VInt, VInt)>) -> Graph {
        let mut graph = Graph::new();
        for (src, dst) in edges_iter {
            graph.add_edge(src, dst);
        }
        graph
    }

    /// Load a graph from a whitespace-delimited edge list file.
    pub fn from_edge_list_file(file_path: &str) -> Result<Graph, SlpaError> {
        let edge_file = File::open(file_path)?;
        let edge_reader = BufReader::with_capacity(READ_BUFFER_SIZE, edge_file);
        Self::from_edge_list(edge_reader)
    }

    /// Parse `src dst` pairs, one edge per line. The first line is a header
    /// and is skipped unconditionally; tokens past the second are ignored.
    /// A line without two parseable ids aborts the load.
    pub fn from_edge_list(reader: impl BufRead) -> Result<Graph, SlpaError> {
        let mut graph = Graph::new();
        let mut line_count = 0usize;
        for line in reader.lines() {
            let line = line?;
            line_count += 1;
            if line_count == 1 {
                // The first line is a header, just skip it.
                continue;
            }

            let mut tokens = line.split_whitespace();
            let src = tokens.next().and_then(|t| t.parse::<VInt>().ok());
            let dst = tokens.next().and_then(|t| t.parse::<VInt>().ok());
            match (src, dst) {
                (Some(src), Some(dst)) => graph.add_edge(src, dst),
                _ => {
                    return Err(SlpaError::MalformedEdge {
                        line: line_count,
                        content: line,
                    })
                }
            }
        }
        Ok(graph)
    }

    /// Dump the adjacency structure, for eyeballing small graphs.
    pub fn print_graph(&self) {
        println!("Graph with {} vertices and {} edges.", self.v_size, self.e_size);
        for (vertex_id, (memory, neighbors)) in &self.adj_map {
            println!(
                "V{} -> {:?}, {} labels held.",
                vertex_id,
                neighbors,
                memory.label_count()
            );
        }
    }
}
