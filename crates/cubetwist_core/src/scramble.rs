//! Deterministic random scrambles.

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{AXIS_COUNT, LayerMaskUint, Twist};

/// Parameters to deterministically generate a scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of twists.
    pub length: usize,
    /// Random seed. The same seed always gives the same scramble.
    pub seed: String,
}

impl ScrambleParams {
    /// Returns parameters with a seed taken from the thread-local RNG.
    pub fn new(length: usize) -> Self {
        let seed = format!("{:016x}", rand::rng().random::<u64>());
        Self { length, seed }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest: [u8; 32] = sha256.finalize().into();
        rand_chacha::ChaCha12Rng::from_seed(digest)
    }
}

/// Generates a scramble for a cube with `layer_count` layers.
///
/// Each twist turns a block of up to half the layers from one face by a
/// quarter or half turn. No two consecutive twists share an axis.
pub fn generate(layer_count: u8, params: &ScrambleParams) -> Vec<Twist> {
    let mut rng = params.rng();
    let max_depth = (layer_count / 2).max(1);
    let mut last_axis = None;

    std::iter::from_fn(|| {
        let axis = loop {
            let axis = rng.random_range(0..AXIS_COUNT);
            if last_axis != Some(axis) {
                break axis;
            }
        };
        last_axis = Some(axis);

        let depth = rng.random_range(1..=max_depth);
        let block: LayerMaskUint = (1 << depth) - 1;
        let layer_mask = if rng.random() {
            block << (layer_count - depth)
        } else {
            block
        };
        let angle = [-1, 1, 2][rng.random_range(0..3)];
        Some(Twist::new(axis, layer_mask, angle))
    })
    .take(params.length)
    .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_scramble_is_deterministic() {
        let params = ScrambleParams {
            length: 25,
            seed: "hello".to_owned(),
        };
        assert_eq!(generate(3, &params), generate(3, &params));
        let other = ScrambleParams {
            seed: "world".to_owned(),
            ..params.clone()
        };
        assert_ne!(generate(3, &params), generate(3, &other));
        assert_eq!(generate(3, &params).len(), 25);
    }

    proptest! {
        #[test]
        fn proptest_scramble_twists_are_valid(layer_count in 2..=5_u8, length in 0..60_usize, seed: u64) {
            let params = ScrambleParams { length, seed: seed.to_string() };
            let twists = generate(layer_count, &params);
            prop_assert_eq!(twists.len(), length);
            for t in &twists {
                prop_assert_eq!(t.validate(layer_count), Ok(()));
                prop_assert!(t.angle != 0 && t.layer_mask != 0);
                // Never the middle layer alone, never the whole cube.
                prop_assert!(t.layer_mask & 1 != 0 || t.layer_mask >> (layer_count - 1) != 0);
                prop_assert!(t.layer_mask.count_ones() < u32::from(layer_count));
            }
            for (a, b) in twists.iter().tuple_windows() {
                prop_assert_ne!(a.axis, b.axis);
            }
        }
    }
}
