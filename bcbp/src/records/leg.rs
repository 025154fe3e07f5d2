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

use super::RepeatedConditional;
use crate::fields::*;
use crate::{Opaque, Section};

/// A flight leg of the boarding pass.
///
/// The mandatory fields are followed by a block of [`conditional_size`]
/// bytes, which holds the leg's [`conditional`] fields and data for the
/// individual use of the airline.
///
/// [`conditional_size`]: FlightLeg::conditional_size
/// [`conditional`]: FlightLeg::conditional
#[derive(Clone, Eq, PartialEq, Debug, Section)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[bcbp(phase = LegMandatory)]
pub struct FlightLeg<'a> {
    pub operating_carrier_pnr: Pnr<'a>,
    #[bcbp(class = Alpha)]
    pub from_airport: AirportCode<'a>,
    #[bcbp(class = Alpha)]
    pub to_airport: AirportCode<'a>,
    pub operating_carrier_designator: CarrierDesignator<'a>,
    pub flight_number: FlightNumber<'a>,
    pub julian_date_of_flight: JulianDate<'a>,
    #[bcbp(class = Alpha)]
    pub compartment_code: CompartmentCode<'a>,
    pub seat_number: SeatNumber<'a>,
    pub check_in_sequence_number: CheckInSequence<'a>,
    pub passenger_status: PassengerStatus<'a>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub conditional_size: FieldSize,
    /// The date of the flight with its year resolved.
    #[bcbp(skip)]
    pub date_of_flight: Option<NaiveDate>,
    #[bcbp(skip)]
    pub conditional: Option<RepeatedConditional<'a>>,
    #[bcbp(skip)]
    pub airline_individual_use: Option<Opaque<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Fields;
    use crate::{ErrorKind, Mode};

    #[test]
    fn mandatory_fields() {
        let mut fields = Fields::new(b"ZQ7O92 GVALHRBA 00723319C002F00009100", Mode::Strict);
        let leg: FlightLeg = fields.section().expect("leg should parse");

        assert_eq!(leg.operating_carrier_pnr.as_str(), "ZQ7O92");
        assert_eq!(leg.from_airport.as_str(), "GVA");
        assert_eq!(leg.to_airport.as_str(), "LHR");
        assert_eq!(leg.operating_carrier_designator.as_str(), "BA");
        assert_eq!(leg.flight_number.as_str(), "00723");
        assert_eq!(leg.julian_date_of_flight.as_u16(), Ok(319));
        assert_eq!(leg.compartment_code.as_str(), "C");
        assert_eq!(leg.seat_number.as_str(), "002F");
        assert_eq!(leg.check_in_sequence_number.as_str(), "00009");
        assert_eq!(leg.passenger_status.as_str(), "1");
        assert_eq!(leg.conditional_size.get(), 0);

        // set by the decoder
        assert_eq!(leg.date_of_flight, None);
        assert_eq!(leg.conditional, None);
        assert_eq!(leg.airline_individual_use, None);
        assert!(fields.is_at_end());
    }

    #[test]
    fn numeric_airport_is_rejected_strictly() {
        let data = b"ABC123 000FRAAC 0834 226F001A0025 100";

        let mut fields = Fields::new(data, Mode::Strict);
        let err = fields.section::<FlightLeg>().expect_err("airport isn't alpha");
        assert!(matches!(err.kind(), ErrorKind::FieldValidationFailed(_)));
        assert_eq!(err.field(), "from_airport");
        assert_eq!(err.offset(), 7);

        let mut fields = Fields::new(data, Mode::Lenient);
        let leg: FlightLeg = fields.section().expect("lenient skips the class");
        assert_eq!(leg.from_airport.as_str(), "000");
    }

    #[test]
    fn signed_conditional_size() {
        let mut fields = Fields::new(b"ABC123 YULFRAAC 0834 226F001A0025 1-1", Mode::Lenient);
        let err = fields.section::<FlightLeg>().expect_err("size has a sign");
        assert_eq!(err.field(), "conditional_size");
    }
}
