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
use crate::{Error, FixedField};

/// A day of the year from 1 to 366 without a year.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct JulianDate<'a>(&'a [u8; 3]);

impl<'a> JulianDate<'a> {
    /// Returns the raw digits.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or("")
    }

    /// The day of the year.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is not a number.
    #[inline]
    pub fn as_u16(&self) -> Result<u16, Error> {
        parse_numeric!(u16, self.0)
    }
}

impl<'a> FixedField<'a> for JulianDate<'a> {
    const LENGTH: usize = 3;
    const CLASS: CharClass = CharClass::Numeric;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        crate::field::array(bytes).map(Self)
    }

    fn validate(&self) -> Result<(), Error> {
        let day = self.as_u16()?;
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

impl fmt::Debug for JulianDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.0))
    }
}

#[cfg(feature = "serde")]
serialize_as_str!([<'a>] JulianDate<'a>);
