//! Nullable entropy: deterministic draws.

use std::sync::atomic::{AtomicUsize, Ordering};

use veri_entropy::{EntropyError, EntropyOutput, EntropySource};

/// A deterministic entropy source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted.
pub struct NullEntropy {
    outputs: Vec<[u8; 32]>,
    index: AtomicUsize,
}

impl NullEntropy {
    /// Create with a sequence of deterministic values.
    pub fn new(outputs: Vec<[u8; 32]>) -> Self {
        Self {
            outputs,
            index: AtomicUsize::new(0),
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: [u8; 32]) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }
}

impl EntropySource for NullEntropy {
    fn entropy(&self, _context: &[u8]) -> Result<EntropyOutput, EntropyError> {
        if self.outputs.is_empty() {
            return Err(EntropyError::Unavailable("no null entropy configured".into()));
        }
        let idx = self.index.fetch_add(1, Ordering::Relaxed);
        let current = idx % self.outputs.len();
        Ok(EntropyOutput {
            value: self.outputs[current],
            height: idx as u64,
        })
    }

    fn name(&self) -> &str {
        "null-entropy"
    }
}
