//! Block-style entropy: a height counter mixed with the clock.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{EntropyError, EntropyOutput, EntropySource};
use veri_crypto::blake2b_256_multi;
use veri_types::Clock;

/// Mimics "hash of the current block's identifying data".
///
/// Every draw advances an internal height, so two draws in the same second
/// still differ. The output is `Blake2b(height || time || context)`.
pub struct BlockEntropy<C> {
    clock: C,
    height: AtomicU64,
}

impl<C: Clock> BlockEntropy<C> {
    pub fn new(clock: C) -> Self {
        Self::at_height(clock, 0)
    }

    pub fn at_height(clock: C, height: u64) -> Self {
        Self {
            clock,
            height: AtomicU64::new(height),
        }
    }

    /// Height the next draw will use.
    pub fn height(&self) -> u64 {
        self.height.load(Ordering::Relaxed)
    }
}

impl<C: Clock + Send + Sync> EntropySource for BlockEntropy<C> {
    fn entropy(&self, context: &[u8]) -> Result<EntropyOutput, EntropyError> {
        // The last usable height is u64::MAX - 1; the counter never wraps.
        let height = self
            .height
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |h| h.checked_add(1))
            .map_err(|_| EntropyError::Exhausted)?;
        let now = self.clock.now().as_secs();
        let value = blake2b_256_multi(&[&height.to_be_bytes(), &now.to_be_bytes(), context]);
        Ok(EntropyOutput { value, height })
    }

    fn name(&self) -> &str {
        "block-entropy"
    }
}
