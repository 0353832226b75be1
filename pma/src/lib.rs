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

//! A packed-memory array (PMA): a sorted array of unique keys that keeps
//! deliberate gaps between elements so that single-element insert and
//! delete can shift a small local window instead of the whole array.
//!
//! # Overview
//!
//! This is an implementation of the data structure described in
//! ["Cache-Oblivious Streaming B-trees"](https://dl.acm.org/doi/10.1145/1378533.1378539)
//! and ["A Locality-Preserving Cache-Oblivious Dynamic Dictionary"](https://erikdemaine.org/papers/CacheObliviousDict_SODA2002/)
//! by Bender, Demaine, and Farach-Colton. A PMA stores `n` elements in a
//! backing array of capacity `m = O(n)`, interleaving occupied slots with
//! empty ones so that the array's density stays within a threshold band
//! at every level of an implicit binary tree over array segments.
//!
//! Reads are a gap-tolerant binary search in `O(log m)`. Writes shift
//! elements within the smallest ancestor segment whose density, after the
//! write, falls back within its threshold band; when no such segment
//! exists up to the root, the whole array is reallocated and its
//! elements evenly respread. This keeps both operations at
//! `O(log^2 m)` amortized, with locality that favors sequential scans
//! and cache-friendly access patterns over a plain sorted `Vec`'s
//! `O(n)` shift-per-write.
//!
//! # Examples
//!
//! ```
//! # use pma::Pma;
//! let mut pma = Pma::create(&[]).unwrap();
//! pma.insert(10, 100).unwrap();
//! pma.insert(5, 50).unwrap();
//! assert!(pma.contains(5).unwrap());
//! assert!(!pma.contains(7).unwrap());
//! ```
//!
//! # Ordered predecessor search
//!
//! ```
//! # use pma::{FindOutcome, Pma};
//! let pma = Pma::create(&[(10, 100), (20, 200)]).unwrap();
//! match pma.find(15).unwrap() {
//!     FindOutcome::Predecessor { index } => assert_eq!(pma.get(index).unwrap(), Some((10, 100))),
//!     other => panic!("expected a predecessor, got {other:?}"),
//! }
//! ```

mod error;
mod layout;
mod pma;
mod rebalance;
mod resize;
mod search;
mod segment;
mod slot;
mod window;

pub use crate::error::{Error, ErrorKind};
pub use crate::pma::{FindOutcome, Pma};
