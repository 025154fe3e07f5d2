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

use crate::fields::*;
use crate::Section;

/// Opens the conditional data of the first leg.
///
/// The [`field_size`](VersionHeader::field_size) is the length of the
/// following [`UniqueConditional`] block.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Section)]
#[bcbp(phase = GlobalConditional)]
pub struct VersionHeader<'a> {
    pub version_marker: VersionMarker,
    pub version_number: VersionNumber<'a>,
    pub field_size: FieldSize,
}

/// Conditional fields that appear once per boarding pass.
///
/// A field is `None` if the declared block ends before it.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Section)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[bcbp(phase = GlobalConditional, conditional)]
pub struct UniqueConditional<'a> {
    pub passenger_description: Option<Indicator<'a>>,
    pub source_of_check_in: Option<Indicator<'a>>,
    pub source_of_boarding_pass_issuance: Option<Indicator<'a>>,
    pub date_of_pass_issuance: Option<DateOfIssue<'a>>,
    pub document_type: Option<Indicator<'a>>,
    pub boarding_pass_issuer: Option<CarrierDesignator<'a>>,
    pub baggage_tag_number: Option<BaggageTag<'a>>,
    pub first_non_consecutive_baggage_tag: Option<BaggageTag<'a>>,
    pub second_non_consecutive_baggage_tag: Option<BaggageTag<'a>>,
}

/// Conditional fields that repeat for each leg.
///
/// A field is `None` if the declared block ends before it.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Section)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[bcbp(phase = LegConditional, conditional)]
pub struct RepeatedConditional<'a> {
    pub airline_numeric_code: Option<AirlineNumericCode<'a>>,
    pub document_serial_number: Option<DocumentSerialNumber<'a>>,
    pub selectee_indicator: Option<Indicator<'a>>,
    pub international_documentation_verification: Option<Indicator<'a>>,
    pub marketing_carrier_designator: Option<CarrierDesignator<'a>>,
    pub frequent_flyer_airline_designator: Option<CarrierDesignator<'a>>,
    pub frequent_flyer_number: Option<FrequentFlyerNumber<'a>>,
    pub id_ad_indicator: Option<Indicator<'a>>,
    pub free_baggage_allowance: Option<BaggageAllowance<'a>>,
    pub fast_track: Option<Indicator<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Fields;
    use crate::{ErrorKind, Mode};

    #[test]
    fn version_header() {
        let mut fields = Fields::new(b">503", Mode::Strict);
        let header: VersionHeader = fields.section().expect("header should parse");

        assert_eq!(header.version_number.as_u8(), Ok(5));
        assert_eq!(header.field_size.get(), 3);
    }

    #[test]
    fn missing_version_marker() {
        let mut fields = Fields::new(b"<503", Mode::Lenient);
        let err = fields.section::<VersionHeader>().expect_err("marker is wrong");
        assert_eq!(err.field(), "version_marker");
    }

    #[test]
    fn partial_unique_block() {
        let mut fields = Fields::new(b"  W", Mode::Strict);
        let unique: UniqueConditional = fields.section().expect("fields should parse");

        assert_eq!(unique.passenger_description.map(|f| f.is_blank()), Some(true));
        assert_eq!(unique.source_of_check_in.map(|f| f.is_blank()), Some(true));
        assert_eq!(unique.source_of_boarding_pass_issuance.map(|f| f.as_str()), Some("W"));
        assert_eq!(unique.date_of_pass_issuance, None);
        assert_eq!(unique.second_non_consecutive_baggage_tag, None);
    }

    #[test]
    fn full_unique_block() {
        let mut fields = Fields::new(b"0 M6007BUA              ", Mode::Strict);
        let unique: UniqueConditional = fields.section().expect("fields should parse");

        assert_eq!(unique.date_of_pass_issuance.map(|f| f.as_str()), Some("6007"));
        assert_eq!(unique.document_type.map(|f| f.as_str()), Some("B"));
        assert_eq!(unique.boarding_pass_issuer.map(|f| f.as_str()), Some("UA"));
        assert_eq!(unique.baggage_tag_number.map(|f| f.is_blank()), Some(true));
        assert_eq!(unique.first_non_consecutive_baggage_tag, None);
    }

    #[test]
    fn repeated_block() {
        let data = b"01624760758980 UA UA EY975897            ";
        let mut fields = Fields::new(data, Mode::Strict);
        let repeated: RepeatedConditional = fields.section().expect("fields should parse");

        assert_eq!(repeated.airline_numeric_code.map(|f| f.as_u16()), Some(Ok(16)));
        assert_eq!(
            repeated.document_serial_number.map(|f| f.as_u64()),
            Some(Ok(2476075898))
        );
        assert_eq!(repeated.selectee_indicator.map(|f| f.as_str()), Some("0"));
        assert_eq!(repeated.marketing_carrier_designator.map(|f| f.as_str()), Some("UA"));
        assert_eq!(
            repeated.frequent_flyer_number.map(|f| f.as_str()),
            Some("EY975897")
        );
        assert_eq!(repeated.free_baggage_allowance.map(|f| f.is_blank()), Some(true));
        assert_eq!(repeated.fast_track, None);
    }

    #[test]
    fn non_numeric_serial_number() {
        let data = b"0162476O75898";

        let mut fields = Fields::new(data, Mode::Strict);
        let err = fields
            .section::<RepeatedConditional>()
            .expect_err("serial number has a letter");
        assert!(matches!(err.kind(), ErrorKind::FieldValidationFailed(_)));
        assert_eq!(err.field(), "document_serial_number");
        assert_eq!(err.offset(), 3);

        let mut fields = Fields::new(data, Mode::Lenient);
        let repeated: RepeatedConditional = fields.section().expect("lengths are intact");
        assert!(repeated.document_serial_number.is_some());
    }
}
