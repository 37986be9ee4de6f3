use log::debug;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, VInt};

/// Drives the speaker-listener rounds over a graph.
///
/// One round visits every vertex as listener in freshly shuffled order. The
/// listener polls each neighbor (duplicates polled individually), every
/// speaker answers with one sampled label from its current memory, and the
/// listener records the most frequent answer. Listeners visited earlier in
/// the same round already speak with this round's update folded in; rounds
/// themselves are strictly sequential.
pub struct PropagationEngine<R: Rng = StdRng> {
    rng: R, // Shuffle and sampling source for the whole run.
}

impl PropagationEngine {
    /// Create an engine, seeded for reproducible runs when a seed is given.
    pub fn create(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl<R: Rng> PropagationEngine<R> {
    /// Build an engine around a caller-supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Execute one full propagation round.
    pub fn propagate_round(&mut self, graph: &mut Graph) {
        // S1. Shuffle the listener visitation order for this round only.
        let mut order = graph.node_ids();
        order.shuffle(&mut self.rng);

        // S2. Every listener polls its neighbors and accepts the winner.
        for listener in order {
            let neighbors = graph.neighbors(&listener).unwrap();
            let mut tally: Vec<(VInt, u32)> = Vec::new();
            for speaker in neighbors {
                let label = graph.memory(speaker).unwrap().sample(&mut self.rng);
                match tally.iter_mut().find(|(seen, _)| *seen == label) {
                    Some(slot) => slot.1 += 1,
                    None => tally.push((label, 1)),
                }
            }
            // A listener without neighbors hears nothing and keeps quiet.
            if let Some(winner) = winning_label(&tally) {
                graph.memory_mut(&listener).unwrap().record(winner);
            }
        }
    }

    /// Run a fixed number of rounds back to back. No convergence check, the
    /// caller-given round count is the only stopping rule.
    pub fn run(&mut self, graph: &mut Graph, num_rounds: u32) {
        for round in 0..num_rounds {
            self.propagate_round(graph);
            debug!("propagation round {}/{} complete", round + 1, num_rounds);
        }
    }
}

/// Most frequent label of a tally. The first slot to reach the top count
/// wins, a later slot must strictly exceed it to take over.
fn winning_label(tally: &[(VInt, u32)]) -> Option<VInt> {
    let mut winner: Option<(VInt, u32)> = None;
    for &(label, count) in tally {
        match winner {
            Some((_, best)) if count <= best => {}
            _ => winner = Some((label, count)),
        }
    }
    winner.map(|(label, _)| label)
}
