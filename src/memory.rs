use rand::Rng;

use crate::graph::VInt;

/// The accumulated label memory of a single vertex.
///
/// Labels live in an association list kept in first-insertion order. The
/// sampling scan walks that order, so a seeded generator replays the exact
/// label sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMemory {
    slots: Vec<(VInt, u32)>, // (label, occurrence count), first-seen order.
    total: u32,              // Receipt events recorded, including the seed label.
    finalized: bool,         // Set once pruned, no further recording.
}

impl LabelMemory {
    /// Create a memory seeded with the owning vertex's label at count one.
    pub fn create(own_label: VInt) -> Self {
        Self {
            slots: vec![(own_label, 1)],
            total: 1,
            finalized: false,
        }
    }

    /// Record one received label, creating its slot on first sight.
    pub fn record(&mut self, label: VInt) {
        if self.finalized {
            panic!("cannot record into a finalized label memory!");
        }
        match self.slots.iter_mut().find(|(seen, _)| *seen == label) {
            Some(slot) => slot.1 += 1,
            None => self.slots.push((label, 1)),
        }
        self.total += 1;
    }

    /// Sample one label with probability proportional to its share of the
    /// total, by a single uniform draw and a cumulative scan in slot order.
    /// If rounding keeps the running sum below the draw, the last slot wins.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> VInt {
        let r = rng.gen::<f64>();
        let total = self.total as f64;
        let mut cumulative = 0.0f64;
        for (label, count) in &self.slots {
            cumulative += *count as f64 / total;
            if r < cumulative {
                return *label;
            }
        }
        match self.slots.last() {
            Some((label, _)) => *label,
            None => panic!("cannot sample an empty label memory!"),
        }
    }

    /// Drop every label whose share of the total is strictly below the
    /// threshold and finalize the memory. The total is kept as the lifetime
    /// receipt count, so pruning again with the same threshold is stable.
    pub fn prune(&mut self, threshold: f64) {
        let total = self.total as f64;
        self.slots
            .retain(|(_, count)| *count as f64 / total >= threshold);
        self.finalized = true;
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn label_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Current count of one label, None if it is not (or no longer) held.
    pub fn count_of(&self, label: &VInt) -> Option<u32> {
        self.slots
            .iter()
            .find(|(seen, _)| seen == label)
            .map(|(_, count)| *count)
    }

    /// Labels in first-insertion order.
    pub fn labels(&self) -> impl Iterator<Item = VInt> + '_ {
        self.slots.iter().map(|(label, _)| *label)
    }

    /// (label, count) pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VInt, u32)> + '_ {
        self.slots.iter().copied()
    }
}
