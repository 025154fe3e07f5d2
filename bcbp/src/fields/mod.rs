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

use crate::{Alphanumeric, Numeric};

mod check_in_sequence;
mod field_size;
mod flight_number;
mod format_code;
mod issue_date;
mod julian_date;
mod leg_count;
mod marker;
mod ticket_indicator;

pub use check_in_sequence::CheckInSequence;
pub use field_size::FieldSize;
pub use flight_number::FlightNumber;
pub use format_code::FormatCode;
pub use issue_date::DateOfIssue;
pub use julian_date::JulianDate;
pub use leg_count::LegCount;
pub use marker::Marker;
pub use ticket_indicator::TicketIndicator;

pub type AirlineNumericCode<'a> = Numeric<'a, 3>;
pub type AirportCode<'a> = Alphanumeric<'a, 3>;
pub type BaggageAllowance<'a> = Alphanumeric<'a, 3>;
pub type BaggageTag<'a> = Numeric<'a, 13>;
pub type CarrierDesignator<'a> = Alphanumeric<'a, 3>;
pub type CompartmentCode<'a> = Alphanumeric<'a, 1>;
pub type DocumentSerialNumber<'a> = Numeric<'a, 10>;
pub type FrequentFlyerNumber<'a> = Alphanumeric<'a, 16>;
pub type Indicator<'a> = Alphanumeric<'a, 1>;
pub type PassengerName<'a> = Alphanumeric<'a, 20>;
pub type PassengerStatus<'a> = Alphanumeric<'a, 1>;
pub type Pnr<'a> = Alphanumeric<'a, 7>;
pub type SeatNumber<'a> = Alphanumeric<'a, 4>;
pub type SecurityDataType<'a> = Alphanumeric<'a, 1>;
pub type SecurityMarker = Marker<b'^'>;
pub type VersionMarker = Marker<b'>'>;
pub type VersionNumber<'a> = Numeric<'a, 1>;
