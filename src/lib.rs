// Copyright 2024, Horizen Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![no_std]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

extern crate core;

pub use error::IncrementError;
pub use increment::Increment;

mod error;
mod increment;

/// Returns `x + 1`.
///
/// Overflow is checked: `plus_one(i32::MAX)` fails with
/// [`IncrementError::ArithmeticOverflow`] instead of wrapping to `i32::MIN`.
/// Use [`Increment::increment`] for the other signed widths.
pub fn plus_one(x: i32) -> Result<i32, IncrementError> {
    x.increment()
}
