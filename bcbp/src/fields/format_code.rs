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

use crate::layout::CharClass;
use crate::{Error, ErrorKind, FixedField};

/// The format code that starts every boarding pass.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FormatCode {
    /// `M`, the format of boarding passes with one or more legs.
    Multiple,
}

impl FixedField<'_> for FormatCode {
    const LENGTH: usize = 1;
    const CLASS: CharClass = CharClass::Alpha;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match crate::field::array::<1>(bytes)? {
            [b'M'] => Ok(Self::Multiple),
            [byte] => Err(Error::new(ErrorKind::InvalidFormatCode { byte: *byte })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_code() {
        assert_eq!(FormatCode::from_bytes(b"M"), Ok(FormatCode::Multiple));
    }

    #[test]
    fn rejects_other_codes() {
        for code in [b"S", b"m", b"\0"] {
            let err = FormatCode::from_bytes(code).expect_err("only M is a format code");
            assert_eq!(
                err.kind(),
                &ErrorKind::InvalidFormatCode { byte: code[0] }
            );
        }
    }
}
