// Compression step
// Folds one mixed value into the running chaining value

/// Chaining value every full-stream computation starts from
pub const INITIAL_CHAINING_VALUE: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// 64-bit FNV prime
pub const MULTIPLIER: u64 = 0x0000_0100_0000_01B3;

/// Right shift of the final diffusion step
const DIFFUSION_SHIFT: u32 = 33;

/// Produce the next chaining value from the current one and a mixed block value
///
/// All arithmetic wraps modulo 2^64.
pub fn compress(chaining_value: u64, mixed: u64) -> u64 {
    let mut combined = chaining_value ^ mixed;
    combined = combined.wrapping_mul(MULTIPLIER);
    combined ^ (combined >> DIFFUSION_SHIFT)
}
