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

/// The size of the following block as two hexadecimal digits.
///
/// The size declares how many bytes the block spans, and the block is parsed
/// within these bytes in every decode mode.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSize(usize);

impl FieldSize {
    pub fn get(&self) -> usize {
        self.0
    }
}

impl FixedField<'_> for FieldSize {
    const LENGTH: usize = 2;
    const CLASS: CharClass = CharClass::Hex;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let digits = crate::field::array::<2>(bytes)?;

        // No sign is allowed, which rules out parsing with from_str_radix.
        digits
            .iter()
            .try_fold(0, |size, &byte| match (byte as char).to_digit(16) {
                Some(digit) => Ok(size * 16 + digit as usize),
                None => Err(Error::validation(Violation::InvalidCharacter {
                    byte,
                    expected: "a hexadecimal digit",
                })),
            })
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_size() {
        assert_eq!(FieldSize::from_bytes(b"5C"), Ok(FieldSize(92)));
        assert_eq!(FieldSize::from_bytes(b"5c"), Ok(FieldSize(92)));
        assert_eq!(FieldSize::from_bytes(b"00"), Ok(FieldSize(0)));
    }

    #[test]
    fn rejects_sign() {
        assert!(FieldSize::from_bytes(b"-1").is_err());
        assert!(FieldSize::from_bytes(b"+1").is_err());
        assert!(FieldSize::from_bytes(b" 1").is_err());
    }
}
