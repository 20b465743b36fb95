// Block source module
// Splits a byte stream into fixed-size, zero-padded blocks

use std::io::{self, Read};

/// Size of one block in bytes (512 bits)
pub const BLOCK_SIZE: usize = 64;

/// One fixed-size unit of input
pub type Block = [u8; BLOCK_SIZE];

/// Lazy, ordered sequence of blocks read from a stream
///
/// Every block is filled completely before it is yielded, so a short read from
/// the underlying stream never causes early padding. Only the final region of
/// the stream is padded with zeros. An empty stream yields no blocks at all.
///
/// The sequence ends at the first read error; re-reading requires a fresh handle.
pub struct BlockReader<R> {
    reader: R,
    bytes_read: u64,
    blocks: u64,
    done: bool,
}

impl<R: Read> BlockReader<R> {
    /// Create a block reader over the given stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes_read: 0,
            blocks: 0,
            done: false,
        }
    }

    /// Number of bytes consumed from the underlying stream so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Number of blocks yielded so far
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Fill `block` from the stream, returning how many real bytes were read
    fn fill(&mut self, block: &mut Block) -> io::Result<usize> {
        let mut filled = 0;
        while filled < BLOCK_SIZE {
            match self.reader.read(&mut block[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Zero-initialized, so whatever is not filled is already padding
        let mut block = [0u8; BLOCK_SIZE];
        match self.fill(&mut block) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(n) => {
                if n < BLOCK_SIZE {
                    self.done = true;
                }
                self.bytes_read += n as u64;
                self.blocks += 1;
                Some(Ok(block))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Number of blocks a stream of `len` bytes produces
pub fn expected_block_count(len: u64) -> u64 {
    len.div_ceil(BLOCK_SIZE as u64)
}
