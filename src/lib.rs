//! Overlapping community detection with the Speaker-listener Label
//! Propagation Algorithm (SLPA).
//!
//! Every vertex starts out holding its own id as a label. Over a fixed
//! number of rounds each vertex polls its neighbors, who answer with one
//! label sampled from their accumulated memories; the vertex then records
//! the most frequent answer. Thresholding the per-vertex label
//! distributions afterwards yields communities that may overlap.

pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod logger;
pub mod memory;
pub mod progress;
pub mod propagate;
