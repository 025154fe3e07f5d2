// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! IATA Bar-Coded Boarding Pass (BCBP) decoder.
//!
//! This crate decodes the data of a boarding pass barcode into a
//! [`BoardingPass`] with its flight [legs]. The boarding pass references the
//! decoded data and its [fields] provide methods to convert values when
//! needed.
//!
//! # Examples
//!
//! Lets decode a boarding pass and print the flight:
//!
//! ```
//! # fn main() -> Result<(), bcbp::Error> {
//! let data = "M1LEOPOLD/EMR         EZQ7O92 GVALHRBA 00723319C002F00009100";
//! let pass = bcbp::decode(data)?;
//!
//! let leg = &pass.legs[0];
//! println!(
//!     "{} from {} to {} with {} {}",
//!     pass.passenger_name,
//!     leg.from_airport,
//!     leg.to_airport,
//!     leg.operating_carrier_designator,
//!     leg.flight_number,
//! ); // => "LEOPOLD/EMR from GVA to LHR with BA 00723"
//! #     Ok(())
//! # }
//! ```
//!
//! By default, only the structure of the data is checked. Use a [`Decoder`]
//! to validate the content of every field or to resolve dates relative to a
//! fixed day:
//!
//! ```
//! # use bcbp::{Decoder, ErrorKind};
//! # use chrono::NaiveDate;
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date should be valid");
//! let mut decoder = Decoder::new();
//! decoder.strict().today(today);
//!
//! // the airport can't be numeric
//! let err = decoder
//!     .decode("M1DESMARAIS/LUC       EABC123 000FRAAC 0834 226F001A0025 100")
//!     .unwrap_err();
//! assert!(matches!(err.kind(), ErrorKind::FieldValidationFailed(_)));
//! assert_eq!(err.field(), "from_airport");
//! ```
//!
//! [legs]: crate::FlightLeg
//! [fields]: crate::fields

#[macro_use]
mod macros;

mod error;
mod field;

pub mod date;
pub mod decoder;
pub mod fields;
pub mod layout;
pub mod records;
pub mod section;
pub mod validate;

pub use decoder::{decode, Decoder};
pub use error::{Error, ErrorKind, Violation};
pub use field::{Alphanumeric, FixedField, Numeric, Opaque};
pub use records::{BoardingPass, FlightLeg};
pub use validate::Mode;

// Re-export the derive macro for convenience
pub(crate) use bcbp_derive::Section;
