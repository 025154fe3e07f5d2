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
use std::str::FromStr;

use crate::error::Violation;
use crate::layout::{FieldSpec, Length};

/// The validation mode of a decoder.
///
/// Both modes check the structure of a boarding pass, i.e. the length of each
/// field and the declared lengths of the conditional blocks. The strict mode
/// additionally checks the content of every field.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Strict,
    #[default]
    Lenient,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(format!("unknown mode \"{s}\", expected strict or lenient")),
        }
    }
}

/// Validates the raw value of a field.
///
/// The length of fixed fields is always checked. In [`Mode::Strict`] each byte
/// must be of the field's character class. Conditional fields that are left
/// blank pass in either mode.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate(spec: &FieldSpec, raw: &[u8], mode: Mode) -> Result<(), Violation> {
    if let Length::Fixed(expected) = spec.length {
        if raw.len() != expected {
            return Err(Violation::InvalidLength {
                expected,
                actual: raw.len(),
            });
        }
    }

    if mode == Mode::Lenient {
        return Ok(());
    }

    if spec.phase.is_conditional() && is_blank(raw) {
        return Ok(());
    }

    match raw.iter().find(|&&byte| !spec.class.accepts(byte)) {
        Some(&byte) => Err(Violation::InvalidCharacter {
            byte,
            expected: spec.class.expected(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn is_blank(raw: &[u8]) -> bool {
    raw.iter().all(|&b| b == b' ')
}

/// Checks that the bytes are all digits.
pub(crate) fn digits(raw: &[u8]) -> Result<(), Violation> {
    if raw.iter().all(u8::is_ascii_digit) {
        Ok(())
    } else {
        Err(Violation::NotANumber {
            bytes: raw.to_vec(),
        })
    }
}
