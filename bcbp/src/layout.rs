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

//! The BCBP field layout.
//!
//! Every field of a boarding pass is described by a [`FieldSpec`]. The
//! specifications of the fixed-length fields are generated with the sections
//! that parse them. Together with the variable-length fields they form the
//! [`LAYOUT`] of a boarding pass, ordered by [`Phase`].

use crate::records::{
    FlightLeg, Header, RepeatedConditional, Security, UniqueConditional, VersionHeader,
};
use crate::section::Section;

/// The decode phase a field belongs to.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Phase {
    /// Format code, number of legs, passenger name and ticket indicator.
    Header,
    /// The fixed fields repeated for each leg.
    LegMandatory,
    /// The version-tagged conditional block that follows the first leg.
    GlobalConditional,
    /// The conditional block of each leg.
    LegConditional,
    /// The trailing security block.
    Security,
}

impl Phase {
    /// Returns `true` if the phase's fields are declared by a length field.
    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::GlobalConditional | Self::LegConditional)
    }
}

/// The length of a field.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Length {
    Fixed(usize),
    /// The field spans the rest of its block or a previously declared length.
    Variable,
}

/// The characters a field may contain.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum CharClass {
    /// ASCII digits.
    Numeric,
    /// Uppercase letters.
    Alpha,
    /// Uppercase letters, digits and space padding.
    Alphanumeric,
    /// Any printable ASCII character.
    Printable,
    /// Hexadecimal digits of a length field.
    Hex,
    /// Data that is never validated.
    Opaque,
}

impl CharClass {
    /// Returns `true` if the byte belongs to this class.
    pub fn accepts(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alpha => byte.is_ascii_uppercase(),
            Self::Alphanumeric => {
                byte.is_ascii_uppercase() || byte.is_ascii_digit() || byte == b' '
            }
            Self::Printable => matches!(byte, b' '..=b'~'),
            Self::Hex => byte.is_ascii_hexdigit(),
            Self::Opaque => true,
        }
    }

    /// Describes the class for error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Numeric => "a digit",
            Self::Alpha => "an uppercase letter",
            Self::Alphanumeric => "an uppercase letter, digit or space",
            Self::Printable => "a printable ASCII character",
            Self::Hex => "a hexadecimal digit",
            Self::Opaque => "any byte",
        }
    }
}

/// Describes a single field of a boarding pass.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub length: Length,
    pub class: CharClass,
    pub phase: Phase,
}

impl FieldSpec {
    pub const fn fixed(name: &'static str, length: usize, class: CharClass, phase: Phase) -> Self {
        Self {
            name,
            length: Length::Fixed(length),
            class,
            phase,
        }
    }

    pub const fn variable(name: &'static str, class: CharClass, phase: Phase) -> Self {
        Self {
            name,
            length: Length::Variable,
            class,
            phase,
        }
    }
}

/// The 2-digit hexadecimal size of a leg's repeated conditional fields.
pub const REPEATED_FIELD_SIZE: FieldSpec = FieldSpec::fixed(
    "repeated_field_size",
    2,
    CharClass::Hex,
    Phase::LegConditional,
);

/// Whatever follows the repeated conditional fields within a leg's block.
pub const AIRLINE_INDIVIDUAL_USE: FieldSpec = FieldSpec::variable(
    "airline_individual_use",
    CharClass::Opaque,
    Phase::LegConditional,
);

/// The security data with the length declared in the security block.
pub const SECURITY_DATA: FieldSpec =
    FieldSpec::variable("security_data", CharClass::Opaque, Phase::Security);

/// The complete layout of a boarding pass by phase.
///
/// A phase consists of one or more consecutive field tables. The leg phases
/// are repeated for each leg and the global conditional phase only follows the
/// first leg.
pub static LAYOUT: [(Phase, &[&[FieldSpec]]); 5] = [
    (Phase::Header, &[Header::FIELDS]),
    (Phase::LegMandatory, &[FlightLeg::FIELDS]),
    (
        Phase::GlobalConditional,
        &[VersionHeader::FIELDS, UniqueConditional::FIELDS],
    ),
    (
        Phase::LegConditional,
        &[
            &[REPEATED_FIELD_SIZE],
            RepeatedConditional::FIELDS,
            &[AIRLINE_INDIVIDUAL_USE],
        ],
    ),
    (Phase::Security, &[Security::FIELDS, &[SECURITY_DATA]]),
];

/// Returns all fields of a phase in wire order.
pub fn fields(phase: Phase) -> impl Iterator<Item = &'static FieldSpec> {
    LAYOUT
        .iter()
        .filter(move |(p, _)| *p == phase)
        .flat_map(|(_, tables)| tables.iter())
        .flat_map(|table| table.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_length(phase: Phase) -> usize {
        fields(phase)
            .map(|spec| match spec.length {
                Length::Fixed(n) => n,
                Length::Variable => 0,
            })
            .sum()
    }

    #[test]
    fn mandatory_lengths() {
        // format code, legs, name, ticket indicator
        assert_eq!(fixed_length(Phase::Header), 23);
        // 35 byte of leg data and the 2 byte conditional size
        assert_eq!(fixed_length(Phase::LegMandatory), 37);
    }

    #[test]
    fn conditional_lengths() {
        // marker, version, size and 50 byte of unique fields
        assert_eq!(fixed_length(Phase::GlobalConditional), 54);
        // size and 42 byte of repeated fields
        assert_eq!(fixed_length(Phase::LegConditional), 44);
    }

    #[test]
    fn passenger_name_is_printable() {
        let name = fields(Phase::Header)
            .find(|spec| spec.name == "passenger_name")
            .expect("passenger name should be in the header");

        assert_eq!(name.length, Length::Fixed(20));
        assert_eq!(name.class, CharClass::Printable);
    }

    #[test]
    fn airports_are_alpha() {
        let airports: Vec<_> = fields(Phase::LegMandatory)
            .filter(|spec| spec.name.ends_with("_airport"))
            .collect();

        assert_eq!(airports.len(), 2);
        assert!(airports.iter().all(|spec| spec.class == CharClass::Alpha));
    }

    #[test]
    fn variable_fields() {
        let variable: Vec<_> = LAYOUT
            .iter()
            .flat_map(|(phase, _)| fields(*phase))
            .filter(|spec| spec.length == Length::Variable)
            .map(|spec| spec.name)
            .collect();

        assert_eq!(variable, ["airline_individual_use", "security_data"]);
    }

    #[test]
    fn character_classes() {
        assert!(CharClass::Alpha.accepts(b'Z'));
        assert!(!CharClass::Alpha.accepts(b'0'));
        assert!(CharClass::Alphanumeric.accepts(b' '));
        assert!(!CharClass::Numeric.accepts(b'-'));
        assert!(CharClass::Hex.accepts(b'c'));
        assert!(!CharClass::Printable.accepts(0));
    }
}
