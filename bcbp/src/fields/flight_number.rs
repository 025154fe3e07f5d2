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

use crate::layout::CharClass;
use crate::validate::digits;
use crate::{Error, FixedField};

/// A flight number of four digits and an optional operational suffix.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FlightNumber<'a>(&'a [u8; 5]);

impl<'a> FlightNumber<'a> {
    /// Returns the flight number with trailing spaces removed.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or("").trim_end()
    }

    /// The numeric part of the flight number.
    ///
    /// # Errors
    ///
    /// Returns an error if the flight number doesn't start with a digit.
    pub fn number(&self) -> Result<u32, Error> {
        let n = self.0.iter().take_while(|b| b.is_ascii_digit()).count();
        parse_numeric!(u32, self.0[..n])
    }

    /// The operational suffix following the digits, e.g. `A` for `0834A`.
    pub fn suffix(&self) -> Option<char> {
        self.0
            .iter()
            .skip_while(|b| b.is_ascii_digit())
            .find(|&&b| b != b' ')
            .map(|&b| b as char)
    }
}

impl<'a> FixedField<'a> for FlightNumber<'a> {
    const LENGTH: usize = 5;
    const CLASS: CharClass = CharClass::Alphanumeric;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        crate::field::array(bytes).map(Self)
    }

    fn validate(&self) -> Result<(), Error> {
        digits(&self.0[..4]).map_err(Error::validation)
    }
}

impl fmt::Debug for FlightNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl fmt::Display for FlightNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
serialize_as_str!([<'a>] FlightNumber<'a>);
