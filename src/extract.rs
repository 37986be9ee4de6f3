use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufWriter, Write};

use itertools::Itertools;
use log::info;

use crate::config::WRITE_BUFFER_SIZE;
use crate::error::SlpaError;
use crate::graph::{Graph, VInt};

/// Turns accumulated memories into overlapping communities.
pub struct CommunityExtractor {
    threshold: f64, // Minimum share of a memory a label must hold to survive.
}

impl CommunityExtractor {
    pub fn create(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Post-process after the last round, in two passes.
    /// Prune every memory in place, then invert the vertex-to-labels view
    /// into label-to-vertices community sets.
    pub fn extract(&self, graph: &mut Graph) -> CommunityPartition {
        // S1. Prune and finalize all memories.
        for memory in graph.memories_mut() {
            memory.prune(self.threshold);
        }

        // S2. Invert into label -> member set, keys created lazily.
        let mut comm_map = BTreeMap::<VInt, BTreeSet<VInt>>::new();
        for (vertex_id, memory) in graph.iter_memories() {
            for label in memory.labels() {
                comm_map.entry(label).or_default().insert(*vertex_id);
            }
        }
        info!(
            "extracted {} communities at threshold {}",
            comm_map.len(),
            self.threshold
        );
        CommunityPartition { comm_map }
    }
}

/// Final communities keyed by surviving label. A vertex may belong to
/// several communities; one that lost every label belongs to none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityPartition {
    comm_map: BTreeMap<VInt, BTreeSet<VInt>>,
}

impl CommunityPartition {
    pub fn community_count(&self) -> usize {
        self.comm_map.len()
    }

    pub fn members(&self, label: &VInt) -> Option<&BTreeSet<VInt>> {
        self.comm_map.get(label)
    }

    /// (label, member set) pairs in ascending label order.
    pub fn communities(&self) -> impl Iterator<Item = (&VInt, &BTreeSet<VInt>)> {
        self.comm_map.iter()
    }

    /// True if the vertex survives in at least one community.
    pub fn contains_vertex(&self, vertex_id: &VInt) -> bool {
        self.comm_map.values().any(|members| members.contains(vertex_id))
    }

    /// Write one line per community: member ids ascending, space separated.
    /// Communities are written in ascending label order.
    pub fn write_to_file(&self, file_path: &str) -> Result<(), SlpaError> {
        let comm_file = File::create(file_path)?;
        let mut comm_writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, comm_file);
        for members in self.comm_map.values() {
            writeln!(comm_writer, "{}", members.iter().join(" "))?;
        }
        comm_writer.flush()?;
        Ok(())
    }
}
