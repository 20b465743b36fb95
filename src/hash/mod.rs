// Hash Core Library
// Block-chained checksum: block source, mixer, compressor, finalizer and file layer

pub mod block;
pub mod mixer;
pub mod compress;
pub mod finalize;
pub mod hasher;
pub mod compute;
pub mod report;
pub mod timing;
pub mod error;

// Re-export commonly used types for convenience
pub use block::{Block, BlockReader, BLOCK_SIZE, expected_block_count};
pub use compress::{compress, INITIAL_CHAINING_VALUE};
pub use mixer::{mix_block, mix_bytes};
pub use finalize::{finalize, Digest, DIGEST_SIZE};
pub use hasher::{ChainHasher, Phase, hash_bytes, hash_reader};
pub use compute::{HashComputer, HashResult, ensure_min_size};
pub use report::{ReportWriter, report_file_name};
pub use timing::{measure, throughput_mib_per_sec, Timed};
pub use error::HashUtilityError;
