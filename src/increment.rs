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

use snafu::OptionExt;

use crate::error::{ArithmeticOverflowSnafu, IncrementError};

/// Adds one to a signed integer, failing instead of wrapping on overflow.
///
/// Implemented for every signed primitive; each implementation applies the
/// same checked policy, so `T::MAX.increment()` is always an error.
pub trait Increment: Sized + Copy {
    /// Returns `self + 1`, or [`IncrementError::ArithmeticOverflow`] when
    /// `self` is the largest value of its type.
    fn increment(self) -> Result<Self, IncrementError>;
}

macro_rules! impl_increment {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Increment for $ty {
                fn increment(self) -> Result<Self, IncrementError> {
                    self.checked_add(1)
                        .context(ArithmeticOverflowSnafu {
                            value: self as i128,
                        })
                        .inspect_err(|_| {
                            log::trace!("increment overflow: {} is {}::MAX", self, stringify!($ty))
                        })
                }
            }
        )*
    };
}

impl_increment!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn overflow(value: i128) -> IncrementError {
        IncrementError::ArithmeticOverflow { value }
    }

    #[test]
    fn should_reach_max_of_every_width() {
        assert_eq!((i8::MAX - 1).increment(), Ok(i8::MAX));
        assert_eq!((i16::MAX - 1).increment(), Ok(i16::MAX));
        assert_eq!((i32::MAX - 1).increment(), Ok(i32::MAX));
        assert_eq!((i64::MAX - 1).increment(), Ok(i64::MAX));
        assert_eq!((i128::MAX - 1).increment(), Ok(i128::MAX));
        assert_eq!((isize::MAX - 1).increment(), Ok(isize::MAX));
    }

    #[test]
    fn should_fail_past_max_of_every_width() {
        assert_eq!(i8::MAX.increment(), Err(overflow(i8::MAX as i128)));
        assert_eq!(i16::MAX.increment(), Err(overflow(i16::MAX as i128)));
        assert_eq!(i32::MAX.increment(), Err(overflow(i32::MAX as i128)));
        assert_eq!(i64::MAX.increment(), Err(overflow(i64::MAX as i128)));
        assert_eq!(i128::MAX.increment(), Err(overflow(i128::MAX)));
        assert_eq!(isize::MAX.increment(), Err(overflow(isize::MAX as i128)));
    }

    #[test]
    fn should_cross_zero() {
        assert_eq!((-1_i8).increment(), Ok(0));
        assert_eq!(0_i64.increment(), Ok(1));
    }

    #[test]
    fn should_agree_with_plain_addition_below_max() {
        for x in i8::MIN..i8::MAX {
            assert_eq!(x.increment(), Ok(x + 1));
        }
        for x in i16::MIN..i16::MAX {
            assert_eq!(x.increment(), Ok(x + 1));
        }
    }
}
