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

//! Compacts a window to the left (`pack`), then redistributes its
//! elements uniformly across the window's capacity (`spread`).

use crate::slot::Slot;

/// Compacts the occupied slots of `array[from..to)` to `array[from..from +
/// n)`, preserving order, leaving the remainder empty. `from` is
/// inclusive, `to` is exclusive.
pub(crate) fn pack(array: &mut [Slot], from: u64, to: u64, n: u64) {
    debug_assert!(from < to);
    let mut write_index = from;
    for read_index in from..to {
        if !array[read_index as usize].is_empty() {
            if read_index > write_index {
                array[write_index as usize] = array[read_index as usize];
                array[read_index as usize].clear();
            }
            write_index += 1;
        }
    }
    debug_assert_eq!(write_index - from, n);
}

/// Distributes the `n` densely packed elements of `array[from..from + n)`
/// uniformly across `array[from..to)`, using 8-bit fixed-point spacing so
/// reads and writes never collide. Precondition: `array[from + n..to)` is
/// empty.
///
/// The fixed-point shift is why total capacity is capped at `2^56 - 1`
/// (see `layout::MAX_SIZE`): `to << 8` must fit in a `u64`.
pub(crate) fn spread(array: &mut [Slot], from: u64, to: u64, n: u64) {
    debug_assert!(from < to);
    debug_assert!(n > 0);
    let capacity = to - from;
    let frequency = (capacity << 8) / n;
    let mut read_index = from + n - 1;
    let mut write_index = (to << 8) - frequency;
    loop {
        if (write_index >> 8) <= read_index {
            break;
        }
        array[(write_index >> 8) as usize] = array[read_index as usize];
        array[read_index as usize].clear();
        write_index -= frequency;
        if read_index == from {
            break;
        }
        read_index -= 1;
    }
}

/// Restores density across a window: `pack` followed by `spread`.
pub(crate) fn rebalance(array: &mut [Slot], from: u64, to: u64, n: u64) {
    pack(array, from, to, n);
    spread(array, from, to, n);
}
