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

//! Gap-tolerant binary search over a dense, gapped array.

use crate::slot::Slot;

/// Searches `array` for `key`.
///
/// Returns `(true, i)` with `array[i].key == key` on a hit. On a miss,
/// returns `(false, i)` where `i` is the largest occupied index with
/// `array[i].key < key`, or `-1` if no such index exists.
///
/// `array` must have at least one slot. `key` must be nonzero.
pub(crate) fn find(array: &[Slot], key: u64) -> (bool, i64) {
    debug_assert!(key != 0);
    debug_assert!(!array.is_empty());
    let mut from: i64 = 0;
    let mut to: i64 = array.len() as i64 - 1;
    while from < to {
        let mid = from + (to - from) / 2;
        let mut i = mid;
        while i >= from && array[i as usize].is_empty() {
            i -= 1;
        }
        if i < from {
            // Everything between from and mid (inclusive) is empty.
            from = mid + 1;
        } else {
            let probed = array[i as usize].key;
            if probed == key {
                return (true, i);
            } else if probed < key {
                from = mid + 1;
            } else {
                to = i - 1;
            }
        }
    }
    if array[from as usize].is_empty() || array[from as usize].key > key {
        let mut idx = from - 1;
        while idx >= 0 && array[idx as usize].is_empty() {
            idx -= 1;
        }
        (false, idx)
    } else {
        let found = array[from as usize].key == key;
        (found, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array_from(pairs: &[(u64, u64)], m: usize) -> Vec<Slot> {
        let mut array = vec![Slot::EMPTY; m];
        for &(key, val) in pairs {
            let idx = array.iter().position(Slot::is_empty).unwrap();
            array[idx] = Slot::occupied(key, val);
        }
        array.sort_by_key(|slot| if slot.is_empty() { u64::MAX } else { slot.key });
        array
    }

    #[test]
    fn test_find_in_dense_array() {
        let array = array_from(&[(1, 10), (2, 20), (3, 30), (4, 40)], 4);
        assert_eq!(find(&array, 3), (true, 2));
        assert_eq!(find(&array, 1), (true, 0));
        assert_eq!(find(&array, 4), (true, 3));
    }

    #[test]
    fn test_find_miss_returns_predecessor() {
        // slots: [1, _, 3, _, 5, _, _, _]
        let mut array = vec![Slot::EMPTY; 8];
        array[0] = Slot::occupied(1, 10);
        array[2] = Slot::occupied(3, 30);
        array[4] = Slot::occupied(5, 50);
        assert_eq!(find(&array, 2), (false, 0)); // pred at idx 0 (key 1)
        assert_eq!(find(&array, 4), (false, 2)); // pred at idx 2 (key 3)
        assert_eq!(find(&array, 6), (false, 4)); // pred at idx 4 (key 5)
        assert_eq!(find(&array, 1), (true, 0));
    }

    #[test]
    fn test_find_miss_before_everything() {
        let mut array = vec![Slot::EMPTY; 8];
        array[3] = Slot::occupied(10, 100);
        array[6] = Slot::occupied(20, 200);
        assert_eq!(find(&array, 5), (false, -1));
    }

    #[test]
    fn test_find_gap_tolerance() {
        // large gaps on both sides of the probed midpoint must not
        // confuse the search.
        let mut array = vec![Slot::EMPTY; 16];
        array[0] = Slot::occupied(1, 1);
        array[15] = Slot::occupied(100, 100);
        assert_eq!(find(&array, 1), (true, 0));
        assert_eq!(find(&array, 100), (true, 15));
        assert_eq!(find(&array, 50), (false, 0));
    }
}
