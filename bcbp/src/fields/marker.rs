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

/// A single byte that opens a block, e.g. `>` for the version number.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Marker<const B: u8>;

impl<const B: u8> FixedField<'_> for Marker<B> {
    const LENGTH: usize = 1;
    const CLASS: CharClass = CharClass::Printable;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match crate::field::array::<1>(bytes)? {
            [byte] if *byte == B => Ok(Self),
            [byte] => Err(Error::validation(Violation::InvalidCharacter {
                byte: *byte,
                expected: "the block marker",
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marker() {
        assert_eq!(Marker::<b'>'>::from_bytes(b">"), Ok(Marker));
        assert!(Marker::<b'^'>::from_bytes(b">").is_err());
    }
}
