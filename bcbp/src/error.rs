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

use std::error;
use std::fmt;

/// The reason why a field's value was rejected.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Violation {
    InvalidLength {
        expected: usize,
        actual: usize,
    },
    InvalidCharacter {
        byte: u8,
        expected: &'static str,
    },
    NotANumber {
        bytes: Vec<u8>,
    },
    OutOfRange {
        value: u32,
        expected: &'static str,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "should be {expected} byte long but is {actual}")
            }
            Self::InvalidCharacter { byte, expected } => {
                write!(f, "is \"{}\" but should be {expected}", byte.escape_ascii())
            }
            Self::NotANumber { bytes } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "should be a number but is \"{s}\"")
            }
            Self::OutOfRange { value, expected } => {
                write!(f, "is {value} but should be {expected}")
            }
        }
    }
}

/// The kind of a decode failure.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorKind {
    /// The data doesn't start with the BCBP format code.
    InvalidFormatCode { byte: u8 },
    /// The data ends within a field or block.
    InsufficientData { expected: usize, remaining: usize },
    /// Data is left after the boarding pass is complete.
    ExcessData { remaining: usize },
    /// A field's content is invalid.
    FieldValidationFailed(Violation),
    /// A declared count or length disagrees with the data.
    StructuralMismatch { declared: usize, actual: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormatCode { byte } => {
                write!(f, "format code is \"{}\" but should be M", byte.escape_ascii())
            }
            Self::InsufficientData {
                expected,
                remaining,
            } => {
                write!(f, "expected {expected} more byte but only {remaining} remain")
            }
            Self::ExcessData { remaining } => {
                write!(f, "{remaining} byte remain after the boarding pass")
            }
            Self::FieldValidationFailed(violation) => violation.fmt(f),
            Self::StructuralMismatch { declared, actual } => {
                write!(f, "{declared} declared but {actual} found")
            }
        }
    }
}

/// A decode error.
///
/// The error names the field where decoding stopped and the byte offset of
/// that field within the decoded data. Errors of field accessors that are
/// called after decoding have no location and an empty field name.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Error {
    kind: ErrorKind,
    field: &'static str,
    offset: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: "",
            offset: 0,
        }
    }

    pub(crate) fn validation(violation: Violation) -> Self {
        Self::new(ErrorKind::FieldValidationFailed(violation))
    }

    /// Locates the error at the field starting at `offset`.
    pub(crate) fn at(mut self, field: &'static str, offset: usize) -> Self {
        self.field = field;
        self.offset = offset;
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The name of the field where decoding stopped.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The byte offset of the field where decoding stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} at byte {}: {}", self.field, self.offset, self.kind)
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_location() {
        let err = Error::validation(Violation::InvalidCharacter {
            byte: b'0',
            expected: "A-Z",
        })
        .at("from_airport", 30);

        assert_eq!(
            err.to_string(),
            "from_airport at byte 30: is \"0\" but should be A-Z"
        );
    }

    #[test]
    fn displays_unlocated_error() {
        let err = Error::new(ErrorKind::ExcessData { remaining: 6 });
        assert_eq!(err.to_string(), "6 byte remain after the boarding pass");
    }
}
