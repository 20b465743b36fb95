// Chained block hasher
// Owns the chaining value and drives block source -> mixer -> compressor -> finalizer

use std::io::Read;

use super::block::{Block, BlockReader};
use super::compress::{compress, INITIAL_CHAINING_VALUE};
use super::finalize::{finalize, Digest};
use super::mixer::{mix_block, mix_bytes};

/// Where a hasher is in its lifecycle
///
/// Taking a digest does not move a hasher out of either phase: it reads the
/// chaining value without touching it, from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial chaining value, nothing folded in
    Reset,
    /// At least one block folded in since the last reset
    Accumulating,
}

/// Streaming hasher over 64-byte blocks with a 64-bit chaining value
///
/// Reset policy: [`update`](Self::update) never resets, it always folds onto the
/// current chaining value, even after [`finalize`](Self::finalize). The
/// whole-stream entry point [`hash`](Self::hash) always resets first. Reusing an
/// instance incrementally for an unrelated stream requires calling
/// [`reset`](Self::reset) explicitly.
///
/// This is a reproducible checksum, not a cryptographic hash. Collisions are
/// easy to construct; a short stream and the same stream with trailing zeros up
/// to the block boundary already share a digest.
#[derive(Debug, Clone)]
pub struct ChainHasher {
    chaining_value: u64,
    blocks: u64,
}

impl ChainHasher {
    /// Create a hasher in the reset state
    pub fn new() -> Self {
        Self {
            chaining_value: INITIAL_CHAINING_VALUE,
            blocks: 0,
        }
    }

    /// Return to the initial chaining value
    pub fn reset(&mut self) {
        self.chaining_value = INITIAL_CHAINING_VALUE;
        self.blocks = 0;
    }

    /// Fold one block into the chaining value
    pub fn update(&mut self, block: &Block) {
        self.chaining_value = compress(self.chaining_value, mix_block(block));
        self.blocks += 1;
    }

    /// Fold one block given as a byte slice
    ///
    /// Panics unless `block` is exactly 64 bytes long.
    pub fn update_bytes(&mut self, block: &[u8]) {
        self.chaining_value = compress(self.chaining_value, mix_bytes(block));
        self.blocks += 1;
    }

    /// Digest of the current chaining value
    ///
    /// Pure read of the state: it can be called any number of times and always
    /// returns the same digest until the next update.
    pub fn finalize(&self) -> Digest {
        finalize(self.chaining_value)
    }

    /// Hex form of [`finalize`](Self::finalize)
    pub fn hexdigest(&self) -> String {
        self.finalize().to_hex()
    }

    /// Hash a whole stream, starting from a fresh chaining value
    ///
    /// Read errors are returned as-is and abort the computation; the hasher is
    /// then left holding a partial chaining value.
    pub fn hash<R: Read>(&mut self, reader: R) -> std::io::Result<Digest> {
        self.reset();
        for block in BlockReader::new(reader) {
            self.update(&block?);
        }
        Ok(self.finalize())
    }

    /// Current chaining value
    pub fn chaining_value(&self) -> u64 {
        self.chaining_value
    }

    /// Blocks folded in since the last reset
    pub fn blocks_processed(&self) -> u64 {
        self.blocks
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        if self.blocks == 0 {
            Phase::Reset
        } else {
            Phase::Accumulating
        }
    }
}

impl Default for ChainHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash a whole stream with a fresh hasher
pub fn hash_reader<R: Read>(reader: R) -> std::io::Result<Digest> {
    ChainHasher::new().hash(reader)
}

/// Hash an in-memory byte slice
pub fn hash_bytes(data: &[u8]) -> Digest {
    let mut hasher = ChainHasher::new();
    // Reading from a slice never fails
    for block in BlockReader::new(data).flatten() {
        hasher.update(&block);
    }
    hasher.finalize()
}
