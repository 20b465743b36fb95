// Mixing module
// Reduces one block to a 64-bit value by word rotation and XOR accumulation

use super::block::{Block, BLOCK_SIZE};

const WORD_SIZE: usize = 8;

/// Reduce one block to a 64-bit mixed value.
///
/// Reads the block as eight big-endian 64-bit words, rotates each one left by a
/// single bit and XORs them all together. The result is linear in the input and
/// trivially invertible, and word order does not matter, so this is a mixing
/// step and nothing more. Blocks that differ only by a permutation of their
/// words, or by pairs of equal words, mix to the same value.
pub fn mix_block(block: &Block) -> u64 {
    block
        .chunks_exact(WORD_SIZE)
        .map(|chunk| {
            let mut word = [0u8; WORD_SIZE];
            word.copy_from_slice(chunk);
            u64::from_be_bytes(word).rotate_left(1)
        })
        .fold(0, |acc, rotated| acc ^ rotated)
}

/// Same as [`mix_block`], for callers holding a plain byte slice.
///
/// Panics if `bytes` is not exactly one block long: the block source is the only
/// producer of blocks, so a wrong length means it is broken.
pub fn mix_bytes(bytes: &[u8]) -> u64 {
    assert!(
        bytes.len() == BLOCK_SIZE,
        "block must be exactly {} bytes, got {}",
        BLOCK_SIZE,
        bytes.len()
    );
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);
    mix_block(&block)
}
