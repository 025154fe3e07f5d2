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

use log::debug;

use crate::error::Violation;
use crate::layout::{FieldSpec, Phase};
use crate::validate::{validate, Mode};
use crate::{Error, ErrorKind, FixedField, Opaque};

/// A BCBP section, a group of consecutive fields.
pub trait Section<'a>: Sized {
    /// The decode phase of the section's fields.
    const PHASE: Phase;

    /// The section's fields in wire order.
    const FIELDS: &'static [FieldSpec];

    /// Parse this section from a field cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor runs out of data or a field is invalid.
    fn parse(fields: &mut Fields<'a>) -> Result<Self, Error>;
}

/// The field type of a conditional section.
#[doc(hidden)]
pub trait Conditional {
    type Inner;
}

impl<T> Conditional for Option<T> {
    type Inner = T;
}

/// Fails at the first byte that isn't ASCII.
///
/// Boarding pass data is ASCII, so a byte offset equals a character offset.
pub(crate) fn ascii(bytes: &[u8], name: &'static str, offset: usize) -> Result<(), Error> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(i) => Err(Error::validation(Violation::InvalidCharacter {
            byte: bytes[i],
            expected: "an ASCII character",
        })
        .at(name, offset + i)),
        None => Ok(()),
    }
}

/// A cursor over the fields of a boarding pass.
///
/// The cursor either spans the entire data or a block with a declared size.
/// Running out of data is [`ErrorKind::InsufficientData`] in the first case
/// and [`ErrorKind::StructuralMismatch`] within a block, since the block's
/// declared size doesn't cover its fields. Every byte that is taken must be
/// ASCII in either mode.
pub struct Fields<'a> {
    bytes: &'a [u8],
    index: usize,
    base: usize,
    block: Option<&'static str>,
    mode: Mode,
}

impl<'a> Fields<'a> {
    pub fn new(bytes: &'a [u8], mode: Mode) -> Self {
        Self {
            bytes,
            index: 0,
            base: 0,
            block: None,
            mode,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The absolute offset of the next field.
    #[inline]
    pub fn offset(&self) -> usize {
        self.base + self.index
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.index
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index == self.bytes.len()
    }

    /// Returns the next byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    /// Takes the next `n` bytes and advances the position.
    ///
    /// # Errors
    ///
    /// Returns an error if less than `n` bytes remain or a byte isn't ASCII.
    pub fn take(&mut self, spec: &FieldSpec, n: usize) -> Result<&'a [u8], Error> {
        let offset = self.offset();
        let bytes = self.advance(spec, n)?;
        ascii(bytes, spec.name, offset)?;
        Ok(bytes)
    }

    fn advance(&mut self, spec: &FieldSpec, n: usize) -> Result<&'a [u8], Error> {
        let offset = self.offset();
        let remaining = self.remaining();

        if n > remaining {
            let kind = match self.block {
                Some(_) => ErrorKind::StructuralMismatch {
                    declared: self.bytes.len(),
                    actual: self.index + n,
                },
                None => ErrorKind::InsufficientData {
                    expected: n,
                    remaining,
                },
            };
            return Err(Error::new(kind).at(spec.name, offset));
        }

        let bytes = &self.bytes[self.index..self.index + n];
        self.index += n;
        Ok(bytes)
    }

    /// Reads the next field, and advances the position by the field's length.
    ///
    /// The field's structure is always checked while its content is only
    /// checked in [`Mode::Strict`].
    ///
    /// # Errors
    ///
    /// Returns an error if there are not enough bytes or the field is invalid.
    pub fn next<F>(&mut self, spec: &FieldSpec) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        let offset = self.offset();
        let raw = self.take(spec, F::LENGTH)?;
        let locate = |err: Error| err.at(spec.name, offset);

        let field = F::from_bytes(raw).map_err(locate)?;
        validate(spec, raw, self.mode)
            .map_err(Error::validation)
            .map_err(locate)?;
        if self.mode == Mode::Strict {
            field.validate().map_err(locate)?;
        }

        Ok(field)
    }

    /// Reads the next field if any bytes remain.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is cut off or invalid.
    pub fn next_conditional<F>(&mut self, spec: &FieldSpec) -> Result<Option<F>, Error>
    where
        F: FixedField<'a>,
    {
        if self.is_at_end() {
            Ok(None)
        } else {
            self.next(spec).map(Some)
        }
    }

    /// Reads `n` bytes of opaque data.
    ///
    /// # Errors
    ///
    /// Returns an error if less than `n` bytes remain.
    pub fn next_opaque(&mut self, spec: &FieldSpec, n: usize) -> Result<Opaque<'a>, Error> {
        self.take(spec, n).map(Opaque)
    }

    /// Reads all remaining bytes as opaque data.
    ///
    /// The bytes are returned as is, without the ASCII check of
    /// [`take`](Fields::take).
    pub fn rest(&mut self) -> Opaque<'a> {
        let bytes = &self.bytes[self.index..];
        self.index = self.bytes.len();
        Opaque(bytes)
    }

    /// Parses a section at the current position.
    ///
    /// # Errors
    ///
    /// Returns any error of the section's fields.
    #[inline]
    pub fn section<S>(&mut self) -> Result<S, Error>
    where
        S: Section<'a>,
    {
        S::parse(self)
    }

    /// Splits the next `len` bytes off as a block.
    ///
    /// The block's fields are read with the returned cursor while this cursor
    /// continues after the block. Its bytes are checked as its fields are
    /// read.
    ///
    /// # Errors
    ///
    /// Returns an error if the block exceeds the remaining bytes.
    pub fn block(&mut self, spec: &FieldSpec, len: usize) -> Result<Fields<'a>, Error> {
        let base = self.offset();
        let bytes = self.advance(spec, len)?;

        Ok(Self {
            bytes,
            index: 0,
            base,
            block: Some(spec.name),
            mode: self.mode,
        })
    }

    /// Closes a block after its known fields are read.
    ///
    /// Unknown bytes at the end of a block are skipped when decoding
    /// leniently.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::StructuralMismatch`] if bytes remain in
    /// [`Mode::Strict`].
    pub fn close(mut self) -> Result<(), Error> {
        if self.is_at_end() {
            return Ok(());
        }

        let name = self.block.unwrap_or("data");
        match self.mode {
            Mode::Strict => Err(Error::new(ErrorKind::StructuralMismatch {
                declared: self.bytes.len(),
                actual: self.index,
            })
            .at(name, self.offset())),
            Mode::Lenient => {
                let offset = self.offset();
                let skipped = self.rest();
                ascii(skipped.as_bytes(), name, offset)?;
                debug!("skipping {} unknown byte of {name}: {skipped:?}", skipped.len());
                Ok(())
            }
        }
    }
}
