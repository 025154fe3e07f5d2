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
use crate::Error;

/// A fixed-length field type.
///
/// This trait is implemented by all BCBP fields. Each field is created
/// [`from_bytes`](FixedField::from_bytes) and stores a reference to those
/// bytes.
pub trait FixedField<'a>: Sized {
    /// The fixed length of this field in bytes.
    const LENGTH: usize;

    /// The characters this field may contain.
    const CLASS: CharClass;

    /// Parse this field from a byte slice.
    ///
    /// Only the structure of the field is checked, which applies to every
    /// decode mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte slice is too short or is structurally
    /// invalid.
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error>;

    /// Checks the content of this field beyond its character class.
    ///
    /// This is only called when decoding strictly.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is invalid.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Borrows the first `N` bytes as array.
pub(crate) fn array<const N: usize>(bytes: &[u8]) -> Result<&[u8; N], Error> {
    bytes
        .get(..N)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| {
            Error::validation(Violation::InvalidLength {
                expected: N,
                actual: bytes.len(),
            })
        })
}

/////////////////////////////////////////////////////////////////////////////
// Alphanumeric Field
/////////////////////////////////////////////////////////////////////////////

/// A alpha/numeric field (left-justified, space-padded).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Alphanumeric<'a, const N: usize>(pub(crate) &'a [u8; N]);

impl<'a, const N: usize> Alphanumeric<'a, N> {
    /// Returns the field as a bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the field as a UTF-8 string with trailing spaces removed.
    ///
    /// Returns an empty string if the field contains invalid UTF-8.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or("").trim_end()
    }

    /// Returns `true` if the field contains only spaces.
    #[inline]
    pub fn is_blank(&self) -> bool {
        crate::validate::is_blank(self.0)
    }
}

impl<'a, const N: usize> FixedField<'a> for Alphanumeric<'a, N> {
    const LENGTH: usize = N;
    const CLASS: CharClass = CharClass::Alphanumeric;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        array(bytes).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl<const N: usize> fmt::Display for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<const N: usize> From<Alphanumeric<'_, N>> for String {
    fn from(a: Alphanumeric<'_, N>) -> Self {
        a.as_str().to_owned()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Numeric Field
/////////////////////////////////////////////////////////////////////////////

/// A numeric field (right-justified, zero-padded).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Numeric<'a, const N: usize>(&'a [u8; N]);

macro_rules! numeric_impl {
    ($n:tt => $($method:ident : $t:ty),+) => {
        impl<'a> Numeric<'a, $n> {
            $(
                /// Parses the field.
                ///
                /// # Errors
                ///
                /// Returns an error if the field contains anything but digits.
                #[inline]
                pub fn $method(&self) -> Result<$t, Error> {
                    parse_numeric!($t, self.0)
                }
            )+
        }
    };
}

// Implement different parser depending on the field's length. For example, a
// three byte long field can't be parsed to a unsigned 8 bit integer.
numeric_impl!(1 => as_u8: u8, as_u16: u16);
numeric_impl!(3 => as_u16: u16, as_u32: u32);
numeric_impl!(10 => as_u64: u64);
numeric_impl!(13 => as_u64: u64);

impl<'a, const N: usize> Numeric<'a, N> {
    /// Returns the field's raw digits.
    ///
    /// Returns an empty string if the field contains invalid UTF-8.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or("")
    }

    /// Returns `true` if the field contains only spaces.
    #[inline]
    pub fn is_blank(&self) -> bool {
        crate::validate::is_blank(self.0)
    }
}

impl<'a, const N: usize> FixedField<'a> for Numeric<'a, N> {
    const LENGTH: usize = N;
    const CLASS: CharClass = CharClass::Numeric;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        array(bytes).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Numeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from_utf8_lossy(self.0);
        write!(f, "{s}")
    }
}

impl<const N: usize> fmt::Display for Numeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/////////////////////////////////////////////////////////////////////////////
// Opaque Field
/////////////////////////////////////////////////////////////////////////////

/// A variable-length field that is passed through without validation.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Opaque<'a>(pub(crate) &'a [u8]);

impl<'a> Opaque<'a> {
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the field as a UTF-8 string.
    ///
    /// Returns an empty string if the field contains invalid UTF-8.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Opaque<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.0))
    }
}

impl fmt::Display for Opaque<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
serialize_as_str!(
    [<'a, const N: usize>] Alphanumeric<'a, N>,
    [<'a, const N: usize>] Numeric<'a, N>,
    [<'a>] Opaque<'a>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn trims_alphanumeric() {
        let name = Alphanumeric::<20>::from_bytes(b"LEOPOLD/EMR         ").expect("name should parse");
        assert_eq!(name.as_str(), "LEOPOLD/EMR");
        assert!(!name.is_blank());
    }

    #[test]
    fn short_field() {
        let err = Alphanumeric::<3>::from_bytes(b"GV").expect_err("field is too short");
        assert_eq!(
            err.kind(),
            &ErrorKind::FieldValidationFailed(Violation::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn parses_numeric() {
        let code = Numeric::<3>::from_bytes(b"016").expect("airline code should parse");
        assert_eq!(code.as_u16(), Ok(16));

        let serial = Numeric::<10>::from_bytes(b"2476075898").expect("serial should parse");
        assert_eq!(serial.as_u64(), Ok(2476075898));
    }

    #[test]
    fn numeric_with_sign_is_not_a_number() {
        let code = Numeric::<3>::from_bytes(b"-16").expect("numeric is parsed lazily");
        assert!(matches!(
            code.as_u16().map_err(|e| e.kind().clone()),
            Err(ErrorKind::FieldValidationFailed(Violation::NotANumber { .. }))
        ));
    }

    #[test]
    fn blank_numeric_is_not_a_number() {
        let tag = Numeric::<13>::from_bytes(b"             ").expect("blank tag should parse");
        assert!(tag.is_blank());
        assert!(tag.as_u64().is_err());
    }
}
