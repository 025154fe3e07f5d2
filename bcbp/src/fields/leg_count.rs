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

use crate::error::Violation;
use crate::layout::CharClass;
use crate::{Error, FixedField};

/// The number of legs encoded in a boarding pass (1 to 9).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LegCount(u8);

impl LegCount {
    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl FixedField<'_> for LegCount {
    const LENGTH: usize = 1;
    const CLASS: CharClass = CharClass::Numeric;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match crate::field::array::<1>(bytes)? {
            [byte @ b'1'..=b'9'] => Ok(Self(byte - b'0')),
            [byte] => Err(Error::validation(Violation::InvalidCharacter {
                byte: *byte,
                expected: "a number of legs from 1 to 9",
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leg_count() {
        assert_eq!(LegCount::from_bytes(b"1").map(|n| n.get()), Ok(1));
        assert_eq!(LegCount::from_bytes(b"9").map(|n| n.get()), Ok(9));
    }

    #[test]
    fn rejects_zero_and_letters() {
        assert!(LegCount::from_bytes(b"0").is_err());
        assert!(LegCount::from_bytes(b"A").is_err());
        assert!(LegCount::from_bytes(b"-").is_err());
    }
}
