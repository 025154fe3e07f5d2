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

use chrono::{NaiveDate, Utc};
use log::{debug, trace};

use crate::date::{DateResolver, FLIGHT_DATE_PAST_TOLERANCE_DAYS};
use crate::fields::FieldSize;
use crate::layout::{
    CharClass, FieldSpec, Phase, AIRLINE_INDIVIDUAL_USE, REPEATED_FIELD_SIZE, SECURITY_DATA,
};
use crate::records::{
    BoardingPass, FlightLeg, Header, Security, UniqueConditional, VersionHeader,
};
use crate::section::{ascii, Fields};
use crate::validate::Mode;
use crate::{Error, ErrorKind};

const LEG_CONDITIONAL: FieldSpec =
    FieldSpec::variable("leg_conditional", CharClass::Opaque, Phase::LegConditional);

const UNIQUE_CONDITIONAL: FieldSpec = FieldSpec::variable(
    "unique_conditional",
    CharClass::Opaque,
    Phase::GlobalConditional,
);

const REPEATED_CONDITIONAL: FieldSpec = FieldSpec::variable(
    "repeated_conditional",
    CharClass::Opaque,
    Phase::LegConditional,
);

/// Boarding pass decoder.
///
/// The decoder is configured once and can decode any number of boarding
/// passes. By default it decodes leniently and resolves dates relative to
/// the current UTC date.
///
/// # Examples
///
/// ```
/// use bcbp::Decoder;
/// use chrono::NaiveDate;
///
/// # fn main() -> Result<(), bcbp::Error> {
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date should be valid");
/// let pass = Decoder::new()
///     .strict()
///     .today(today)
///     .decode("M1LEOPOLD/EMR         EZQ7O92 GVALHRBA 00723319C002F00009100")?;
///
/// let leg = &pass.legs[0];
/// assert_eq!(leg.date_of_flight, NaiveDate::from_ymd_opt(2026, 11, 15));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Decoder {
    mode: Mode,
    today: Option<NaiveDate>,
    flight_date_tolerance: u32,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            today: None,
            flight_date_tolerance: FLIGHT_DATE_PAST_TOLERANCE_DAYS,
        }
    }
}

impl Decoder {
    /// Creates a new lenient decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the content of every field.
    pub fn strict(&mut self) -> &mut Self {
        self.mode = Mode::Strict;
        self
    }

    /// Checks only the structure of the boarding pass.
    pub fn lenient(&mut self) -> &mut Self {
        self.mode = Mode::Lenient;
        self
    }

    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Sets the date to which the year of dates is resolved.
    pub fn today(&mut self, today: NaiveDate) -> &mut Self {
        self.today = Some(today);
        self
    }

    /// Sets how many days a flight may lie in the past.
    pub fn flight_date_tolerance(&mut self, days: u32) -> &mut Self {
        self.flight_date_tolerance = days;
        self
    }

    /// Decodes a boarding pass.
    ///
    /// # Errors
    ///
    /// Decoding stops at the first invalid field. The error locates the field
    /// within the data.
    pub fn decode<'a>(&self, data: &'a str) -> Result<BoardingPass<'a>, Error> {
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        let resolver = DateResolver::new(today).with_tolerance(self.flight_date_tolerance);
        let mut fields = Fields::new(data.as_bytes(), self.mode);

        trace!("decoding {} byte ({} mode)", data.len(), self.mode);

        let header: Header = fields.section()?;
        let count = header.number_of_legs.get();

        let mut legs = Vec::with_capacity(count);
        let mut version_number = None;
        let mut conditional: Option<UniqueConditional> = None;

        for i in 0..count {
            if i > 0 && fields.is_at_end() {
                return Err(Error::new(ErrorKind::StructuralMismatch {
                    declared: count,
                    actual: i,
                })
                .at("number_of_legs", 1));
            }

            trace!("decoding leg {} at byte {}", i + 1, fields.offset());
            let mut leg: FlightLeg = fields.section()?;
            let mut block = fields.block(&LEG_CONDITIONAL, leg.conditional_size.get())?;

            if i == 0 && block.peek() == Some(b'>') {
                let version: VersionHeader = block.section()?;
                trace!("unique conditional block of version {}", version.version_number);

                let mut unique = block.block(&UNIQUE_CONDITIONAL, version.field_size.get())?;
                conditional = Some(unique.section()?);
                unique.close()?;
                version_number = Some(version.version_number);
            }

            if !block.is_at_end() {
                let size: FieldSize = block.next(&REPEATED_FIELD_SIZE)?;
                let mut repeated = block.block(&REPEATED_CONDITIONAL, size.get())?;
                leg.conditional = Some(repeated.section()?);
                repeated.close()?;
            }

            if !block.is_at_end() {
                let len = block.remaining();
                leg.airline_individual_use =
                    Some(block.next_opaque(&AIRLINE_INDIVIDUAL_USE, len)?);
            }

            leg.date_of_flight = leg
                .julian_date_of_flight
                .as_u16()
                .ok()
                .and_then(|day| resolver.flight_date(day));

            legs.push(leg);
        }

        let date_of_issue = conditional
            .and_then(|unique| unique.date_of_pass_issuance)
            .and_then(|date| {
                let year_digit = date.year_digit().ok()?;
                let day = date.day_of_year().ok()?;
                resolver.issue_date(year_digit, day)
            });

        let security = match fields.peek() {
            Some(b'^') => {
                trace!("security block at byte {}", fields.offset());
                let mut security: Security = fields.section()?;
                security.data = fields.next_opaque(&SECURITY_DATA, security.length.get())?;
                Some(security)
            }
            _ => None,
        };

        if !fields.is_at_end() {
            let remaining = fields.remaining();
            if security.is_some() || self.mode == Mode::Strict {
                return Err(Error::new(ErrorKind::ExcessData { remaining })
                    .at("trailing_data", fields.offset()));
            }
            let offset = fields.offset();
            ascii(fields.rest().as_bytes(), "trailing_data", offset)?;
            debug!("ignoring {remaining} trailing byte at {offset}");
        }

        debug!(
            "decoded boarding pass with {} leg (version {:?}, security {})",
            legs.len(),
            version_number.map(|v| v.as_str()),
            security.is_some()
        );

        Ok(BoardingPass {
            format_code: header.format_code,
            passenger_name: header.passenger_name,
            electronic_ticket_indicator: header.electronic_ticket_indicator,
            legs,
            version_number,
            conditional,
            date_of_issue,
            security,
        })
    }
}

/// Decodes a boarding pass leniently relative to today.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(data: &str) -> Result<BoardingPass<'_>, Error> {
    Decoder::new().decode(data)
}
