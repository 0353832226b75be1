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

//! Walks the implicit density-threshold tree from an affected slot
//! upward to the smallest window whose density is within threshold.

use crate::layout::Params;
use crate::slot::Slot;

/// The outcome of a window search rooted at index `i`.
pub(crate) struct RebalanceWindow {
    pub start: u64,
    pub end: u64,
    pub occupancy: u64,
    /// `true` if a window within threshold was found before reaching the
    /// root; `false` means the caller must resize.
    pub ok: bool,
}

/// Finds the smallest window containing `i` whose density lies in
/// `[lower, upper)`, extending the occupancy count outward one level at a
/// time so no slot is counted twice.
pub(crate) fn find_rebalance_window(array: &[Slot], params: &Params, i: u64) -> RebalanceWindow {
    let mut height: u8 = 0;
    let mut occupancy: u64 = if array[i as usize].is_empty() { 0 } else { 1 };
    let mut left_index = i as i64 - 1;
    let mut right_index = i as i64 + 1;

    let mut start = 0u64;
    let mut end = 0u64;
    let mut upper;
    let mut lower;
    loop {
        let window_size = params.s * (1u64 << height);
        let window = i / window_size;
        start = window * window_size;
        end = start + window_size;

        while left_index >= start as i64 {
            if !array[left_index as usize].is_empty() {
                occupancy += 1;
            }
            left_index -= 1;
        }
        while right_index < end as i64 {
            if !array[right_index as usize].is_empty() {
                occupancy += 1;
            }
            right_index += 1;
        }

        let density = occupancy as f64 / window_size as f64;
        upper = params.upper_threshold(height);
        lower = params.lower_threshold(height);
        height += 1;
        if !(density < lower || density >= upper) || height >= params.h {
            break;
        }
    }

    let density = occupancy as f64 / (end - start) as f64;
    RebalanceWindow {
        start,
        end,
        occupancy,
        ok: density >= lower && density < upper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Params;

    #[test]
    fn test_leaf_window_within_threshold() {
        let params = Params::for_occupancy(64);
        let mut array = vec![Slot::EMPTY; params.m as usize];
        // fill all but one slot of the first segment: dense enough to
        // satisfy the leaf threshold (density < 1.0) on its own.
        for idx in 0..params.s - 1 {
            array[idx as usize] = Slot::occupied(idx + 1, idx + 1);
        }
        let window = find_rebalance_window(&array, &params, 0);
        assert!(window.ok);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, params.s);
        assert_eq!(window.occupancy, params.s - 1);
    }

    #[test]
    fn test_sparse_array_walks_to_root() {
        let params = Params::for_occupancy(64);
        let mut array = vec![Slot::EMPTY; params.m as usize];
        array[0] = Slot::occupied(1, 1);
        let window = find_rebalance_window(&array, &params, 0);
        // a single occupied slot in a large array must fail every
        // threshold up to the root.
        assert!(!window.ok);
        assert_eq!(window.end - window.start, params.m);
    }
}
