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

//! Grow and shrink are the same procedure: re-derive layout parameters
//! from the current occupancy and reallocate. They are triggered from
//! opposite directions (root upper threshold on insert, root lower
//! threshold on delete) but share one implementation.

use crate::error::{Error, Result};
use crate::layout::Params;
use crate::rebalance::{pack, spread};
use crate::slot::Slot;

/// Reallocates `array` to the capacity implied by `n`, packing the live
/// elements to the front and spreading them uniformly across the new
/// buffer. On allocation failure, `array` and `params` are left
/// untouched.
pub(crate) fn resize(array: &mut Vec<Slot>, params: &mut Params, n: u64) -> Result<()> {
    pack(array, 0, params.m, n);

    let new_params = Params::for_occupancy(n);
    let mut new_array = allocate(new_params.m)?;
    if n > 0 {
        new_array[..n as usize].copy_from_slice(&array[..n as usize]);
        spread(&mut new_array, 0, new_params.m, n);
    }

    *array = new_array;
    *params = new_params;
    Ok(())
}

fn allocate(len: u64) -> Result<Vec<Slot>> {
    let len = len as usize;
    let mut buffer: Vec<Slot> = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::allocation_failed())?;
    buffer.resize(len, Slot::EMPTY);
    Ok(buffer)
}
