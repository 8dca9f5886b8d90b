//! Alea pseudo-random generator keyed by the decimal text of a seed
//!
//! Alea is a multiply-with-carry generator over three 32-bit fractional lags
//! (Johannes Baagøe, 2010). The key is hashed with the companion Mash function,
//! which consumes UTF-16 code units, so any implementation that follows the same
//! recipe maps a seed to the same stream of floats.

use rand::RngCore;

/// 2^-32, the resolution of every value the generator produces
const FRACTION_SCALE: f64 = 2.328_306_436_538_696_3e-10;

/// 2^32
const UINT32_RANGE: f64 = 4_294_967_296.0;

/// Initial Mash accumulator (`0xefc8249d`)
const MASH_INITIAL: f64 = 4_022_871_197.0;

/// Multiplier of the multiply-with-carry step
const ALEA_MULTIPLIER: f64 = 2_091_639.0;

// Wraps a non-negative float into [0, 2^32) after truncation
fn wrap_uint32(value: f64) -> f64 {
    f64::from(value as u64 as u32)
}

/// Mash string hash used to derive the generator's initial state
#[derive(Debug, Clone)]
struct Mash {
    accumulator: f64,
}

impl Mash {
    const fn new() -> Self {
        Self {
            accumulator: MASH_INITIAL,
        }
    }

    fn hash(&mut self, data: &str) -> f64 {
        for unit in data.encode_utf16() {
            self.accumulator += f64::from(unit);
            let mut h = 0.025_196_032_824_169_38 * self.accumulator;
            self.accumulator = wrap_uint32(h);
            h -= self.accumulator;
            h *= self.accumulator;
            self.accumulator = wrap_uint32(h);
            h -= self.accumulator;
            self.accumulator += h * UINT32_RANGE;
        }
        wrap_uint32(self.accumulator) * FRACTION_SCALE
    }
}

/// Deterministic random source producing floats in `[0, 1)`
///
/// Every draw the generator makes comes from one `Alea` instance, in one fixed
/// order, so the seed alone determines the artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct Alea {
    s0: f64,
    s1: f64,
    s2: f64,
    carry: f64,
}

impl Alea {
    /// Create a generator keyed by the decimal representation of `seed`
    pub fn new(seed: i64) -> Self {
        Self::from_key(&seed.to_string())
    }

    /// Create a generator keyed by an arbitrary string
    pub fn from_key(key: &str) -> Self {
        let mut mash = Mash::new();
        let mut lags = [mash.hash(" "), mash.hash(" "), mash.hash(" ")];

        for lag in &mut lags {
            *lag -= mash.hash(key);
            if *lag < 0.0 {
                *lag += 1.0;
            }
        }

        let [s0, s1, s2] = lags;
        Self {
            s0,
            s1,
            s2,
            carry: 1.0,
        }
    }

    /// Advance the stream and return the next float in `[0, 1)`
    // A fused multiply-add would round differently and change the stream
    #[allow(clippy::suboptimal_flops)]
    pub fn next_f64(&mut self) -> f64 {
        let t = ALEA_MULTIPLIER * self.s0 + self.carry * FRACTION_SCALE;
        self.s0 = self.s1;
        self.s1 = self.s2;
        self.carry = t.trunc();
        self.s2 = t - self.carry;
        self.s2
    }

    /// Draw a float uniformly from `[low, high)`
    #[allow(clippy::suboptimal_flops)]
    pub fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        self.next_f64() * (high - low) + low
    }

    /// Draw an index uniformly from `0..len`
    ///
    /// Returns 0 for an empty range so callers can index with `get`.
    pub fn next_index(&mut self, len: usize) -> usize {
        let draw = (self.next_f64() * len as f64).floor() as usize;
        draw.min(len.saturating_sub(1))
    }
}

impl RngCore for Alea {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * UINT32_RANGE) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            for (slot, byte) in chunk.iter_mut().zip(bytes) {
                *slot = byte;
            }
        }
    }
}
