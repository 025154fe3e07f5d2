// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use std::fmt;

use crate::error::Violation;
use crate::layout::CharClass;
use crate::validate::is_blank;
use crate::{Error, FixedField};

/// The date of issue of a boarding pass.
///
/// The date is the last digit of the year followed by the day of the year,
/// e.g. `6007` for the 7th of January of a year ending on 6.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DateOfIssue<'a>(&'a [u8; 4]);

impl<'a> DateOfIssue<'a> {
    /// Returns the raw field.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or("")
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        is_blank(self.0)
    }

    /// The last digit of the year.
    ///
    /// # Errors
    ///
    /// Returns an error if the digit is not a number.
    pub fn year_digit(&self) -> Result<u8, Error> {
        parse_numeric!(u8, self.0[..1])
    }

    /// The day of the year.
    ///
    /// # Errors
    ///
    /// Returns an error if the day is not a number.
    pub fn day_of_year(&self) -> Result<u16, Error> {
        parse_numeric!(u16, self.0[1..])
    }
}

impl<'a> FixedField<'a> for DateOfIssue<'a> {
    const LENGTH: usize = 4;
    const CLASS: CharClass = CharClass::Numeric;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        crate::field::array(bytes).map(Self)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.is_blank() {
            return Ok(());
        }

        self.year_digit()?;
        let day = self.day_of_year()?;
        if (1..=366).contains(&day) {
            Ok(())
        } else {
            Err(Error::validation(Violation::OutOfRange {
                value: day as u32,
                expected: "a day of the year from 1 to 366",
            }))
        }
    }
}

impl fmt::Debug for DateOfIssue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", String::from_utf8_lossy(self.0))
    }
}

#[cfg(feature = "serde")]
serialize_as_str!([<'a>] DateOfIssue<'a>);
