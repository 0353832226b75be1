// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Layout parameters derived from occupancy: segment size, segment count,
//! total capacity, and the density-threshold tree's height and per-level
//! deltas.
//!
//! Thresholds are height-based with height 0 at the leaves (segment level)
//! and height `h - 1` at the root, matching the window finder's walk from
//! an affected slot upward. The upper threshold is `1.00` at the leaves
//! and approaches `0.75` at the root; the lower threshold is `0.25` at the
//! leaves and approaches `0.50` at the root.

/// Upper density threshold at the leaves (segment level).
const UPPER_LEAF: f64 = 1.00;
/// Upper density threshold at the root.
const UPPER_ROOT: f64 = 0.75;
/// Lower density threshold at the root.
const LOWER_ROOT: f64 = 0.50;
/// Lower density threshold at the leaves (segment level).
const LOWER_LEAF: f64 = 0.25;

/// Largest legal capacity. The top 8 bits of an index are reserved for
/// `spread`'s 8-bit fixed-point arithmetic.
pub(crate) const MAX_SIZE: u64 = (1 << 56) - 1;

/// Returns the 1-based index of the most significant set bit of `x`.
fn last_bit_set(x: u64) -> u32 {
    debug_assert!(x > 0, "last_bit_set is undefined for 0");
    u64::BITS - x.leading_zeros()
}

/// Largest power of two not greater than `x`.
pub(crate) fn floor_lg(x: u64) -> u32 {
    last_bit_set(x) - 1
}

/// Smallest power of two not less than `x` (`x >= 1`).
pub(crate) fn hyperceil(x: u64) -> u64 {
    debug_assert!(x >= 1);
    if x <= 1 {
        return 1;
    }
    1 << last_bit_set(x - 1).min(63)
}

/// Largest power of two not greater than `x`.
pub(crate) fn hyperfloor(x: u64) -> u64 {
    1 << floor_lg(x)
}

/// Derived layout parameters, recomputed on every create/grow/shrink from
/// a desired occupancy `n`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Params {
    /// Total slot count.
    pub m: u64,
    /// Segment size (tree leaf width).
    pub s: u64,
    /// Number of segments.
    pub num_segments: u64,
    /// Height of the threshold tree. Height 0 is the leaves.
    pub h: u8,
    delta_t: f64,
    delta_p: f64,
}

impl Params {
    /// The smallest legal configuration, used for an empty PMA.
    pub fn empty() -> Self {
        Self::for_occupancy(0)
    }

    /// Derives `m`, `s`, `num_segments`, and `h` from a desired occupancy
    /// `n`, following the hyperceil/hyperfloor construction.
    pub fn for_occupancy(n: u64) -> Self {
        let m = if n == 0 { 16 } else { hyperceil(2 * n) };
        let s = floor_lg(m);
        let num_segments = hyperfloor(m / s);
        let m = num_segments * s;
        let h = (floor_lg(num_segments) + 1) as u8;
        debug_assert!(m <= MAX_SIZE);
        debug_assert!(m > n);
        let delta_t = (UPPER_LEAF - UPPER_ROOT) / h as f64;
        let delta_p = (LOWER_ROOT - LOWER_LEAF) / h as f64;
        Params {
            m,
            s,
            num_segments,
            h,
            delta_t,
            delta_p,
        }
    }

    /// Upper density threshold at tree height `height` (0 = leaf).
    pub fn upper_threshold(&self, height: u8) -> f64 {
        UPPER_LEAF - height as f64 * self.delta_t
    }

    /// Lower density threshold at tree height `height` (0 = leaf).
    pub fn lower_threshold(&self, height: u8) -> f64 {
        LOWER_LEAF + height as f64 * self.delta_p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperfloor_hyperceil() {
        assert_eq!(hyperfloor(1), 1);
        assert_eq!(hyperfloor(5), 4);
        assert_eq!(hyperfloor(8), 8);
        assert_eq!(hyperceil(1), 1);
        assert_eq!(hyperceil(5), 8);
        assert_eq!(hyperceil(8), 8);
    }

    #[test]
    fn test_floor_lg() {
        assert_eq!(floor_lg(1), 0);
        assert_eq!(floor_lg(2), 1);
        assert_eq!(floor_lg(15), 3);
        assert_eq!(floor_lg(16), 4);
    }

    #[test]
    fn test_empty_config() {
        let params = Params::empty();
        assert_eq!(params.m, 16);
        assert_eq!(params.s, 4);
        assert_eq!(params.num_segments, 4);
        assert_eq!(params.h, 3);
    }

    #[test]
    fn test_thresholds_at_leaf_and_root() {
        let params = Params::for_occupancy(256);
        let root = params.h - 1;
        assert!((params.upper_threshold(0) - UPPER_LEAF).abs() < 1e-9);
        assert!((params.lower_threshold(0) - LOWER_LEAF).abs() < 1e-9);
        // root threshold only approaches UPPER_ROOT/LOWER_ROOT since delta
        // is computed with denominator h, not h - 1.
        assert!(params.upper_threshold(root) > UPPER_ROOT);
        assert!(params.lower_threshold(root) < LOWER_ROOT);
    }

    #[test]
    fn test_m_exceeds_n() {
        for n in [1u64, 2, 3, 7, 64, 1000, 1_000_000] {
            let params = Params::for_occupancy(n);
            assert!(params.m > n);
            assert_eq!(params.m, params.num_segments * params.s);
        }
    }
}
