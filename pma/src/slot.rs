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

/// A single array slot: either empty (`key == 0`) or an occupied key/value
/// pair. Key `0` is reserved as the empty-slot sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Slot {
    pub key: u64,
    pub val: u64,
}

impl Slot {
    pub const EMPTY: Slot = Slot { key: 0, val: 0 };

    #[inline]
    pub fn occupied(key: u64, val: u64) -> Self {
        debug_assert!(key != 0);
        Slot { key, val }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Slot::EMPTY;
    }
}
