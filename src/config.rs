use crate::error::SlpaError;

#[allow(dead_code)]
pub(crate) const READ_BUFFER_SIZE :usize = 1024 * 1024;

#[allow(dead_code)]
pub(crate) const WRITE_BUFFER_SIZE :usize = 256 * 1024;

/// Upper bound of the membership threshold. Above one half no label can
/// survive pruning, so larger values are rejected at the interface.
pub const MAX_THRESHOLD :f64 = 0.5;

/// Validated run parameters of a propagation run.
#[derive(Debug, Clone, Copy)]
pub struct SlpaConfig {
    pub num_iterations: u32, // Propagation rounds to execute.
    pub threshold: f64,      // Minimum membership probability.
    pub seed: Option<u64>,   // RNG seed, entropy when absent.
}

impl SlpaConfig {
    /// Create a validated configuration.
    pub fn create(num_iterations: u32, threshold: f64, seed: Option<u64>) -> Result<Self, SlpaError> {
        // The lower bound is inclusive, a zero threshold keeps every label.
        if !(0.0..=MAX_THRESHOLD).contains(&threshold) {
            return Err(SlpaError::InvalidConfig(format!(
                "threshold must be within [0, {}], got {}",
                MAX_THRESHOLD, threshold
            )));
        }
        Ok(Self {
            num_iterations,
            threshold,
            seed,
        })
    }

    /// Parse operator-given strings, then validate through `create`.
    pub fn parse(num_iterations: &str, threshold: &str, seed: Option<u64>) -> Result<Self, SlpaError> {
        let num_iterations = num_iterations.parse::<u32>().map_err(|_| {
            SlpaError::InvalidConfig(format!(
                "num_iterations must be an unsigned integer, got {:?}",
                num_iterations
            ))
        })?;
        let threshold = threshold.parse::<f64>().map_err(|_| {
            SlpaError::InvalidConfig(format!("threshold must be a number, got {:?}", threshold))
        })?;
        Self::create(num_iterations, threshold, seed)
    }
}
