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

//! Local insertion within a single segment, shifting existing elements
//! left into the nearest left-side gap, falling back to a right shift
//! only when the segment has no room on the left.

use crate::slot::Slot;

/// Inserts `(key, val)` immediately after index `i`, within `i`'s segment
/// of size `s`, shifting occupied slots to close the nearest gap.
///
/// The lockstep scan below walks `left`/`right` outward one slot at a
/// time from `i`, so whenever both sides are still in range they are
/// always equidistant from `i`: this is why the search always prefers a
/// left-side gap when one exists within the segment, only falling back
/// to a right shift when it doesn't. This matches the original source's
/// behavior exactly (it is not a "nearer side wins" search).
///
/// `i` may be `-1` to mean "insert before everything", i.e. the new key
/// is smaller than every key currently in the array: this lands the new
/// element in segment 0 via a pure right-push, since there is no slot at
/// or before index `-1` to push left into. Otherwise `array[i]` must be
/// occupied.
///
/// Returns `false` if the segment has no empty slot; under the leaf
/// density threshold this should never happen in practice, since a
/// segment is rebalanced before it can fill completely.
pub(crate) fn insert_in_segment_after(array: &mut [Slot], s: u64, i: i64, key: u64, val: u64) -> bool {
    debug_assert!(i == -1 || !array[i as usize].is_empty());
    let segment = i / s as i64;
    let segment_start = segment * s as i64;
    let segment_end = segment_start + s as i64;

    let mut left = i - 1;
    let mut right = i + 1;
    while (left >= segment_start && !array[left as usize].is_empty())
        || (right < segment_end && !array[right as usize].is_empty())
    {
        left -= 1;
        right += 1;
    }
    let left_in_range = left >= segment_start;
    let right_in_range = right < segment_end;

    // left and right move in lockstep above, so whenever both are in
    // range they are equidistant from i: a left gap always wins when one
    // exists, with no actual "nearer side" comparison to make.
    if left_in_range {
        let mut j = left;
        while j < i {
            array[j as usize] = array[(j + 1) as usize];
            j += 1;
        }
        array[i as usize] = Slot::occupied(key, val);
    } else if right_in_range {
        let mut j = right;
        while j > i + 1 {
            array[j as usize] = array[(j - 1) as usize];
            j -= 1;
        }
        array[(i + 1) as usize] = Slot::occupied(key, val);
    } else {
        return false;
    }
    true
}
