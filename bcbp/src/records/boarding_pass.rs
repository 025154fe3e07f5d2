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

use chrono::NaiveDate;

use super::{FlightLeg, Security, UniqueConditional};
use crate::fields::*;
use crate::{Decoder, Error};

/// A decoded boarding pass.
///
/// The boarding pass references the data it's decoded from. Fields that
/// aren't present in the data are `None`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardingPass<'a> {
    pub format_code: FormatCode,
    pub passenger_name: PassengerName<'a>,
    pub electronic_ticket_indicator: TicketIndicator,
    /// The legs in the order of the boarding pass.
    pub legs: Vec<FlightLeg<'a>>,
    pub version_number: Option<VersionNumber<'a>>,
    pub conditional: Option<UniqueConditional<'a>>,
    /// The date of pass issuance with its year resolved.
    pub date_of_issue: Option<NaiveDate>,
    pub security: Option<Security<'a>>,
}

impl<'a> BoardingPass<'a> {
    /// Returns the raw date of pass issuance, e.g. `6007` for the 7th day of
    /// a year ending on 6.
    pub fn date_of_pass_issuance(&self) -> Option<&'a str> {
        self.conditional
            .as_ref()?
            .date_of_pass_issuance
            .map(|date| date.as_str())
    }

    pub fn security_data(&self) -> Option<&'a str> {
        self.security.as_ref().map(|security| security.data.as_str())
    }
}

impl<'a> TryFrom<&'a str> for BoardingPass<'a> {
    type Error = Error;

    /// Decodes the boarding pass leniently relative to today.
    fn try_from(data: &'a str) -> Result<Self, Self::Error> {
        Decoder::new().decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let pass = BoardingPass::try_from(
            "M1TEST/PETER          E24Z5RN AMSBRUKL 1733 019M008A0001 316>503  W0D0742497067621",
        )
        .expect("boarding pass should decode");

        assert_eq!(pass.passenger_name.as_str(), "TEST/PETER");
        assert_eq!(pass.version_number.map(|v| v.as_str()), Some("5"));
        assert_eq!(pass.date_of_pass_issuance(), None);
        assert_eq!(pass.date_of_issue, None);
        assert_eq!(pass.security_data(), None);
    }

    #[test]
    fn security_data() {
        let pass = BoardingPass::try_from(
            "M1LEOPOLD/EMR         EZQ7O92 GVALHRBA 00723319C002F00009100^105ABCDE",
        )
        .expect("boarding pass should decode");

        assert_eq!(pass.security_data(), Some("ABCDE"));
        assert_eq!(pass.conditional, None);
    }
}
