//! Three-dimensional simplex noise with a seeded permutation table
//!
//! The permutation table is a Fisher–Yates shuffle of `0..=255` drawn from the
//! run's [`Alea`] stream, duplicated to 512 entries so lattice hashing never
//! needs a modulo. Evaluation only uses additions, multiplications and floors,
//! which keeps the field bit-identical across platforms for a given seed.

use crate::math::random::Alea;

/// Skew factor from input space to simplex lattice space
const SKEW: f64 = 1.0 / 3.0;
/// Unskew factor from simplex lattice space back to input space
const UNSKEW: f64 = 1.0 / 6.0;

/// Squared radius of each corner's contribution kernel
const KERNEL_RADIUS_SQUARED: f64 = 0.6;

/// Normalizes the summed contributions to roughly `[-1, 1]`
const OUTPUT_SCALE: f64 = 32.0;

const PERMUTATION_SIZE: usize = 256;

/// Midpoints of the twelve cube edges
const GRADIENTS: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Coherent noise function over three dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexNoise3 {
    permutation: Vec<u8>,
    gradients: Vec<[f64; 3]>,
}

impl SimplexNoise3 {
    /// Build the permutation table from `random`
    ///
    /// Consumes exactly 255 draws, one per shuffle step.
    pub fn new(random: &mut Alea) -> Self {
        let mut permutation = vec![0u8; PERMUTATION_SIZE * 2];
        let (low, high) = permutation.split_at_mut(PERMUTATION_SIZE);

        for (value, slot) in (0..=u8::MAX).zip(low.iter_mut()) {
            *slot = value;
        }
        for i in 0..PERMUTATION_SIZE - 1 {
            let span = (PERMUTATION_SIZE - i) as f64;
            let swap_with = i + (random.next_f64() * span) as usize;
            low.swap(i, swap_with);
        }
        high.copy_from_slice(low);

        let gradients = permutation
            .iter()
            .map(|&value| {
                GRADIENTS
                    .get(usize::from(value) % GRADIENTS.len())
                    .copied()
                    .unwrap_or_default()
            })
            .collect();

        Self {
            permutation,
            gradients,
        }
    }

    /// The 512-entry permutation table
    pub fn permutation(&self) -> &[u8] {
        &self.permutation
    }

    /// Sample the noise at `(x, y, z)`, returning a value in `[-1, 1]`
    pub fn value_at(&self, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * SKEW;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();
        let t = (i + j + k) * UNSKEW;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        let (second, third) = simplex_corners(x0, y0, z0);

        let x1 = x0 - second[0] + UNSKEW;
        let y1 = y0 - second[1] + UNSKEW;
        let z1 = z0 - second[2] + UNSKEW;
        let x2 = x0 - third[0] + 2.0 * UNSKEW;
        let y2 = y0 - third[1] + 2.0 * UNSKEW;
        let z2 = z0 - third[2] + 2.0 * UNSKEW;
        let x3 = x0 - 1.0 + 3.0 * UNSKEW;
        let y3 = y0 - 1.0 + 3.0 * UNSKEW;
        let z3 = z0 - 1.0 + 3.0 * UNSKEW;

        let ii = lattice_wrap(i);
        let jj = lattice_wrap(j);
        let kk = lattice_wrap(k);
        let offset = |corner: [f64; 3]| corner.map(|c| c as usize);
        let [i1, j1, k1] = offset(second);
        let [i2, j2, k2] = offset(third);

        let gi0 = ii + self.perm(jj + self.perm(kk));
        let gi1 = ii + i1 + self.perm(jj + j1 + self.perm(kk + k1));
        let gi2 = ii + i2 + self.perm(jj + j2 + self.perm(kk + k2));
        let gi3 = ii + 1 + self.perm(jj + 1 + self.perm(kk + 1));

        let n0 = self.contribution(gi0, x0, y0, z0);
        let n1 = self.contribution(gi1, x1, y1, z1);
        let n2 = self.contribution(gi2, x2, y2, z2);
        let n3 = self.contribution(gi3, x3, y3, z3);

        OUTPUT_SCALE * (n0 + n1 + n2 + n3)
    }

    fn perm(&self, index: usize) -> usize {
        self.permutation.get(index).copied().map_or(0, usize::from)
    }

    #[allow(clippy::suboptimal_flops)]
    fn contribution(&self, gradient_index: usize, x: f64, y: f64, z: f64) -> f64 {
        let mut t = KERNEL_RADIUS_SQUARED - x * x - y * y - z * z;
        if t < 0.0 {
            return 0.0;
        }
        let [gx, gy, gz] = self
            .gradients
            .get(gradient_index)
            .copied()
            .unwrap_or_default();
        t *= t;
        t * t * (gx * x + gy * y + gz * z)
    }
}

// Lattice coordinates wrap into the 256-entry period
fn lattice_wrap(coordinate: f64) -> usize {
    ((coordinate as i64) & 255) as usize
}

// Offsets of the second and third simplex corners, chosen by the ordering of
// the point's position inside its lattice cube
fn simplex_corners(x0: f64, y0: f64, z0: f64) -> ([f64; 3], [f64; 3]) {
    if x0 >= y0 {
        if y0 >= z0 {
            ([1.0, 0.0, 0.0], [1.0, 1.0, 0.0])
        } else if x0 >= z0 {
            ([1.0, 0.0, 0.0], [1.0, 0.0, 1.0])
        } else {
            ([0.0, 0.0, 1.0], [1.0, 0.0, 1.0])
        }
    } else if y0 < z0 {
        ([0.0, 0.0, 1.0], [0.0, 1.0, 1.0])
    } else if x0 < z0 {
        ([0.0, 1.0, 0.0], [0.0, 1.0, 1.0])
    } else {
        ([0.0, 1.0, 0.0], [1.0, 1.0, 0.0])
    }
}
