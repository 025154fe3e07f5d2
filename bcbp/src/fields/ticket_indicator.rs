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

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TicketIndicator {
    /// `E`
    Electronic,
    /// `L`
    Ticketless,
    /// Any other indicator, which is only accepted when decoding leniently.
    Other(u8),
}

impl TicketIndicator {
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Electronic => b'E',
            Self::Ticketless => b'L',
            Self::Other(byte) => *byte,
        }
    }
}

impl FixedField<'_> for TicketIndicator {
    const LENGTH: usize = 1;
    const CLASS: CharClass = CharClass::Alpha;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        Ok(match crate::field::array::<1>(bytes)? {
            [b'E'] => Self::Electronic,
            [b'L'] => Self::Ticketless,
            [byte] => Self::Other(*byte),
        })
    }

    fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Other(byte) => Err(Error::validation(Violation::InvalidCharacter {
                byte: *byte,
                expected: "E or L",
            })),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TicketIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}
