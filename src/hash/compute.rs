// File hashing module
// Streams files, stdin and text through the chained hasher

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use super::block::{expected_block_count, BlockReader, BLOCK_SIZE};
use super::error::HashUtilityError;
use super::hasher::ChainHasher;

/// Result of a hash computation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HashResult {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub file_path: PathBuf,
    pub hash: String, // hex-encoded
    pub size: u64,
    pub blocks: u64,
}

/// Serialize a path as a string, replacing invalid UTF-8 with U+FFFD
fn serialize_path_lossy<S: serde::Serializer>(path: &Path, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_string_lossy())
}

/// Hash computer with streaming I/O
pub struct HashComputer {
    buffer_size: usize,
}

// Constants for progress bar
const PROGRESS_UPDATE_INTERVAL_MS: u64 = 100; // 10 times per second
const PROGRESS_TEMPLATE: &str =
    "{msg}\n[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})";

impl HashComputer {
    /// Create a new HashComputer with default read buffer size (1MB)
    pub fn new() -> Self {
        Self {
            buffer_size: 1024 * 1024,
        }
    }

    /// Create a new HashComputer with custom read buffer size
    ///
    /// The buffer only batches reads; blocks are still folded one at a time.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(BLOCK_SIZE),
        }
    }

    /// Compute hash from text string
    pub fn compute_hash_text(&self, text: &str) -> Result<HashResult, HashUtilityError> {
        self.compute_hash_reader(text.as_bytes(), Path::new("<text>"))
    }

    /// Compute hash from stdin
    pub fn compute_hash_stdin(&self) -> Result<HashResult, HashUtilityError> {
        let stdin = std::io::stdin();
        self.fold_stream(stdin.lock(), Path::new("-"), |e| {
            HashUtilityError::from_io_error(e, "reading from stdin", None)
        })
    }

    /// Compute hash of any stream, labelling the result with `label`
    pub fn compute_hash_reader<R: Read>(
        &self,
        reader: R,
        label: &Path,
    ) -> Result<HashResult, HashUtilityError> {
        self.fold_stream(reader, label, |e| {
            HashUtilityError::from_io_error(e, "reading", Some(label.to_path_buf()))
        })
    }

    fn fold_stream<R: Read>(
        &self,
        reader: R,
        label: &Path,
        on_error: impl Fn(io::Error) -> HashUtilityError,
    ) -> Result<HashResult, HashUtilityError> {
        let mut hasher = ChainHasher::new();
        let mut blocks = BlockReader::new(BufReader::with_capacity(self.buffer_size, reader));

        for block in blocks.by_ref() {
            hasher.update(&block.map_err(&on_error)?);
        }

        Ok(HashResult {
            file_path: label.to_path_buf(),
            hash: hasher.hexdigest(),
            size: blocks.bytes_read(),
            blocks: blocks.blocks(),
        })
    }

    /// Compute hash for a single file
    pub fn compute_hash(&self, path: &Path) -> Result<HashResult, HashUtilityError> {
        self.compute_hash_with_progress(path, false)
    }

    /// Compute hash for a single file with optional progress bar
    ///
    /// The progress bar is only drawn when stderr is a terminal.
    pub fn compute_hash_with_progress(
        &self,
        path: &Path,
        show_progress: bool,
    ) -> Result<HashResult, HashUtilityError> {
        let file = File::open(path).map_err(|e| {
            HashUtilityError::from_io_error(e, "reading", Some(path.to_path_buf()))
        })?;

        let file_size = file.metadata()
            .map_err(|e| HashUtilityError::from_io_error(e, "reading metadata", Some(path.to_path_buf())))?
            .len();

        log::debug!(
            "hashing {} ({} bytes, {} blocks)",
            path.display(),
            file_size,
            expected_block_count(file_size)
        );

        let result = if show_progress && std::io::stderr().is_terminal() {
            self.hash_with_progress(file, path, file_size)?
        } else {
            self.compute_hash_reader(file, path)?
        };

        log::debug!("{}: {}", path.display(), result.hash);
        Ok(result)
    }

    /// Helper method to hash a file while drawing a progress bar
    fn hash_with_progress(
        &self,
        file: File,
        path: &Path,
        file_size: u64,
    ) -> Result<HashResult, HashUtilityError> {
        let pb = ProgressBar::new(file_size);
        pb.set_style(
            ProgressStyle::with_template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(format!("Hashing: {}", path.display()));

        let mut hasher = ChainHasher::new();
        let mut blocks = BlockReader::new(BufReader::with_capacity(self.buffer_size, file));
        let mut last_update = Instant::now();
        let update_interval = Duration::from_millis(PROGRESS_UPDATE_INTERVAL_MS);

        while let Some(block) = blocks.next() {
            let block = block.map_err(|e| {
                pb.finish_and_clear();
                HashUtilityError::from_io_error(e, "reading", Some(path.to_path_buf()))
            })?;
            hasher.update(&block);

            let now = Instant::now();
            if now.duration_since(last_update) >= update_interval {
                pb.set_position(blocks.bytes_read());
                last_update = now;
            }
        }

        pb.finish_and_clear();

        Ok(HashResult {
            file_path: path.to_path_buf(),
            hash: hasher.hexdigest(),
            size: blocks.bytes_read(),
            blocks: blocks.blocks(),
        })
    }
}

impl Default for HashComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a file is at least `minimum` bytes long and return its size
pub fn ensure_min_size(path: &Path, minimum: u64) -> Result<u64, HashUtilityError> {
    let size = std::fs::metadata(path)
        .map_err(|e| HashUtilityError::from_io_error(e, "reading metadata", Some(path.to_path_buf())))?
        .len();

    if size < minimum {
        return Err(HashUtilityError::FileTooSmall {
            path: path.to_path_buf(),
            size,
            minimum,
        });
    }
    Ok(size)
}
