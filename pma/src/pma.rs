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

//! The `Pma` type: a packed-memory array holding unique `u64` keys, each
//! with an associated `u64` value, in ascending order.

use crate::error::{Error, Result};
use crate::layout::Params;
use crate::rebalance::rebalance;
use crate::resize::resize;
use crate::search;
use crate::segment::insert_in_segment_after;
use crate::slot::Slot;
use crate::window::find_rebalance_window;

/// The result of [`Pma::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// The key was present at array position `index`.
    Found {
        /// Position within the backing array; stable only until the next
        /// mutating call.
        index: u64,
        /// The value stored alongside the key.
        value: u64,
    },
    /// The key was absent, but a predecessor (the occupied slot with the
    /// largest key less than the queried one) exists at `index`.
    Predecessor {
        /// Position of the predecessor slot.
        index: u64,
    },
    /// The key was absent and no predecessor exists.
    NoPredecessor,
}

impl FindOutcome {
    /// `true` if the key was present.
    pub fn is_found(&self) -> bool {
        matches!(self, FindOutcome::Found { .. })
    }
}

/// A packed-memory array: an ordered, self-balancing sequence of unique
/// `u64` keys, each with an associated `u64` value, stored in a single
/// dense buffer interleaved with deliberate gaps.
///
/// Key `0` is reserved as the empty-slot sentinel and must not be
/// inserted. This type has no internal synchronization; callers that
/// need concurrent access should wrap it behind a reader-writer lock
/// (reads are `O(log m)`, writes are amortized `O(log^2 m)`).
#[derive(Debug)]
pub struct Pma {
    array: Vec<Slot>,
    params: Params,
    n: u64,
}

impl Pma {
    /// Creates a new `Pma` seeded with `entries`, which must be sorted in
    /// strictly ascending order by key and contain no zero keys.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// if `entries` is not sorted, contains duplicates, or contains a
    /// zero key. Returns
    /// [`ErrorKind::AllocationFailed`](crate::ErrorKind::AllocationFailed)
    /// if the backing buffer could not be allocated.
    pub fn create(entries: &[(u64, u64)]) -> Result<Pma> {
        for pair in entries.windows(2) {
            if pair[0].0 >= pair[1].0 {
                return Err(Error::invalid_argument(
                    "seed entries must be sorted by strictly ascending key",
                ));
            }
        }
        if entries.first().is_some_and(|(key, _)| *key == 0) {
            return Err(Error::invalid_argument("key 0 is reserved for empty slots"));
        }

        let n = entries.len() as u64;
        let params = Params::for_occupancy(n);
        let mut array = Vec::new();
        array
            .try_reserve_exact(params.m as usize)
            .map_err(|_| Error::allocation_failed())?;
        array.resize(params.m as usize, Slot::EMPTY);
        for (i, &(key, val)) in entries.iter().enumerate() {
            array[i] = Slot::occupied(key, val);
        }
        if n > 0 {
            crate::rebalance::spread(&mut array, 0, params.m, n);
        }

        Ok(Pma { array, params, n })
    }

    /// Searches for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is `0`.
    pub fn find(&self, key: u64) -> Result<FindOutcome> {
        if key == 0 {
            return Err(Error::invalid_argument("key must be nonzero"));
        }
        let (found, idx) = search::find(&self.array, key);
        Ok(if found {
            FindOutcome::Found {
                index: idx as u64,
                value: self.array[idx as usize].val,
            }
        } else if idx < 0 {
            FindOutcome::NoPredecessor
        } else {
            FindOutcome::Predecessor { index: idx as u64 }
        })
    }

    /// Returns `true` if `key` is present.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is `0`.
    pub fn contains(&self, key: u64) -> Result<bool> {
        Ok(self.find(key)?.is_found())
    }

    /// Inserts `(key, val)`.
    ///
    /// Returns `Ok(true)` if the key was inserted, `Ok(false)` if `key`
    /// was already present (no duplicates are allowed).
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is `0`, or if a resize triggered by this
    /// insert could not allocate its new backing buffer (in which case
    /// the `Pma`'s prior contents are left untouched).
    pub fn insert(&mut self, key: u64, val: u64) -> Result<bool> {
        if key == 0 {
            return Err(Error::invalid_argument("key must be nonzero"));
        }
        let (found, idx) = search::find(&self.array, key);
        if found {
            return Ok(false);
        }

        if !insert_in_segment_after(&mut self.array, self.params.s, idx, key, val) {
            // §4.3: this is an assertion under I3, not a runtime path.
            unreachable!("segment had no empty slot despite satisfying the leaf density threshold");
        }
        self.n += 1;

        // idx is within the segment the new key landed in regardless of
        // which side it was pushed to; -1 (no predecessor) maps to the
        // start of segment 0.
        let affected = if idx < 0 { 0 } else { idx as u64 };
        let window = find_rebalance_window(&self.array, &self.params, affected);
        if window.ok {
            rebalance(&mut self.array, window.start, window.end, window.occupancy);
        } else {
            resize(&mut self.array, &mut self.params, self.n)?;
        }
        Ok(true)
    }

    /// Removes `key`.
    ///
    /// Returns `Ok(true)` if the key was removed, `Ok(false)` if it was
    /// not present.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is `0`, or if a resize triggered by this
    /// delete could not allocate its new backing buffer (in which case
    /// the `Pma`'s prior contents are left untouched).
    pub fn delete(&mut self, key: u64) -> Result<bool> {
        if key == 0 {
            return Err(Error::invalid_argument("key must be nonzero"));
        }
        let (found, idx) = search::find(&self.array, key);
        if !found {
            return Ok(false);
        }
        let i = idx as u64;
        self.array[i as usize].clear();
        self.n -= 1;

        if self.n == 0 {
            // find_rebalance_window assumes at least one slot exists to
            // anchor the walk; an empty PMA has nothing left to rebalance.
            resize(&mut self.array, &mut self.params, self.n)?;
            return Ok(true);
        }

        let window = find_rebalance_window(&self.array, &self.params, i);
        if window.ok {
            rebalance(&mut self.array, window.start, window.end, window.occupancy);
        } else {
            resize(&mut self.array, &mut self.params, self.n)?;
        }
        Ok(true)
    }

    /// Returns the `(key, value)` pair at array position `index`, or
    /// `None` if that slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= capacity()`.
    pub fn get(&self, index: u64) -> Result<Option<(u64, u64)>> {
        if index >= self.params.m {
            return Err(Error::invalid_argument("index out of bounds"));
        }
        let slot = self.array[index as usize];
        Ok(if slot.is_empty() { None } else { Some((slot.key, slot.val)) })
    }

    /// Returns the total number of slots in the backing buffer.
    pub fn capacity(&self) -> u64 {
        self.params.m
    }

    /// Returns the number of occupied slots.
    pub fn count(&self) -> u64 {
        self.n
    }
}
